//! The save → start → wait → logs sequence.
//!
//! # Design
//! `run_smoke` issues each request exactly once, in order, through a
//! [`Transport`]. The wait is a single unconditional [`Pause`] between job
//! start and the logs call; nothing is polled and nothing is retried. The
//! first error aborts the run.

use std::time::Duration;

use log::info;

use crate::client::ScenarioClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::ScenarioId;

/// Default time given to the job to produce output before logs are fetched.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(10);

/// Blocks the caller for a fixed duration.
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

/// `Pause` backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Everything the server said during one run.
#[derive(Debug, Clone)]
pub struct SmokeReport {
    pub scenario_id: ScenarioId,
    /// Raw body of the save reply.
    pub save_body: String,
    pub job_response: serde_json::Value,
    /// Raw body of the logs reply.
    pub logs: String,
}

pub fn run_smoke<T, P>(
    client: &ScenarioClient,
    mut transport: T,
    mut pause: P,
    payload: &str,
    delay: Duration,
) -> Result<SmokeReport, ApiError>
where
    T: Transport,
    P: Pause,
{
    info!("creating scenario at {}", client.base_url());
    let response = transport.execute(client.build_save_scenario(payload)?)?;
    info!("save response ({}): {}", response.status, response.body);
    let save_body = response.body.clone();
    let scenario_id = client.parse_save_scenario(response)?;
    info!("scenario id saved as {scenario_id}");

    info!("starting job for {scenario_id}");
    let response = transport.execute(client.build_start_job(&scenario_id)?)?;
    info!("start job response ({}): {}", response.status, response.body);
    let job_response = client.parse_start_job(response)?;

    info!("sleeping for {delay:?}");
    pause.pause(delay);

    info!("querying logs for {scenario_id}");
    let response = transport.execute(client.build_worker_logs(&scenario_id)?)?;
    info!("logs response ({}): {} bytes", response.status, response.body.len());
    let logs = client.parse_worker_logs(response);

    Ok(SmokeReport {
        scenario_id,
        save_body,
        job_response,
        logs,
    })
}
