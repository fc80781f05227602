use anyhow::Context;
use scenario_core::{run_smoke, ScenarioClient, ThreadSleep};
use scenario_smoke::{init, verify_saved, UreqTransport};

fn main() -> anyhow::Result<()> {
    let cli = init();
    let payload = cli.payload()?;

    let client = ScenarioClient::new(&cli.base_url);
    let mut transport = UreqTransport::new();

    let report = run_smoke(&client, &mut transport, ThreadSleep, &payload, cli.delay())
        .with_context(|| format!("Smoke run against {} failed", client.base_url()))?;

    println!("Save response: {}", report.save_body);
    println!("Scenario id saved as: {}", report.scenario_id);
    println!("Start job response: {}", report.job_response);
    println!("Logs returned: {}", report.logs);

    if cli.verify {
        verify_saved(&client, &mut transport, &report.scenario_id, &payload)?;
    }

    Ok(())
}
