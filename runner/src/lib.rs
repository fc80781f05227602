//! Command-line smoke test for the scenario service.
//!
//! Submits a scenario, starts its job, waits, then prints the worker logs.
//! The sequence itself lives in `scenario_core::run_smoke`; this crate adds
//! configuration, logging and a real HTTP transport.

pub mod cli;
pub mod transport;

use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use scenario_core::{ScenarioClient, ScenarioId, Transport};

pub use cli::{SmokeCli, SAMPLE_PAYLOAD};
pub use transport::UreqTransport;

/// Initialise logging and parse the command line.
pub fn init() -> SmokeCli {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    SmokeCli::parse()
}

/// Look the scenario up by id and check the server stored `payload` unchanged.
pub fn verify_saved<T: Transport>(
    client: &ScenarioClient,
    mut transport: T,
    id: &ScenarioId,
    payload: &str,
) -> anyhow::Result<()> {
    if id.is_missing() {
        bail!("Cannot verify scenario, the save reply carried no shortUrl");
    }
    let request = client.build_lookup_scenario(id)?;
    let response = transport
        .execute(request)
        .with_context(|| format!("Failed to look up scenario {id}"))?;
    let found = client
        .parse_lookup_scenario(response)
        .with_context(|| format!("Bad lookup reply for scenario {id}"))?;
    if !found.success {
        bail!("Scenario {id} is unknown to the server");
    }
    if found.long_url != payload {
        bail!("Scenario {id} was stored with a different payload");
    }
    info!("scenario {id} verified");
    Ok(())
}
