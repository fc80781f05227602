use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

/// Scenario bundled with the tool, submitted when no payload is given.
pub const SAMPLE_PAYLOAD: &str = "eJzdVMlu2zAU/BeeFZWkKGq5pVmaohuapEibIggoiaZVS2RAUY0dw/9earMdOW6Rorn0Jj6+ZTQzj0sgVcYrEH9fgjwDMUinLJe3Pp3gkAIHmMUdH6L2eKeq3ORKgngJ5iA+QAi7QQBhgGlIQgqp74CFjVPPjSglNIQ+8UMUYbJyQMYMawoLlvDCNj3qm+YlE80Q91U7xq1+ChuVrOTrJFtdmUVhA0v7OVG6PO6bdchii6yYsUwZW8mqipvmrm8xXB1vbt/aX4W256JMVAPl+NNlM4NlmeaVZQP4p+/988MvZj79+i1TH96cy48+0eLq3TVmXqnmJxezH9dMnuozkVydXnxuGpeqlnYuwL49ZbxglglZF4UDUiUNS013tHPu88xMQYwJccCU52JqrwhBFhAveGq4RTdhRcU3hB8mlSpqw/+OeM2EyKXou66cXmsLyba+pSwKJ3AjdhfeVRt71EUYE0i8MIo8D7cjSegSChHEnud7lARPSt233C9jnxCD+aVmsppw3TDaBh+nXHYYt9MqVeuU/84Mvdz/UN6xcwzTojPdgKEdfFYn2xg6N2xggNVqyw0QbtyACd12g9H1fjM8R5c9Tui2nuEIseyPW+9HkYsQgiHxqR04WA9Bi8LzkRfQiIQEBsFL7/yY4q2dH7P+aLm31OwUedllfRZfI4FuHMAzse+BPhhv8LAKO894b8+dlR8Yth9azZpKoTmX7U0TuOp/3kIrmZ5xfSKzJn14KrRW9+NktFo7qMrLu4In/CFvN3VwwfB5MVX3r8Vg7y40AEpYOhPaqpQdqULpNbLWC2ldsaTJayqffs8ORp5eU7Pz6g3cjAv+B2puVr8Ad8h8jw==";

#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct SmokeCli {
    /// Base address of the scenario service
    #[clap(long, default_value = "http://localhost:8081")]
    pub base_url: String,

    /// Encoded scenario payload to submit, passed through untouched
    #[clap(long, conflicts_with = "payload_file")]
    pub payload: Option<String>,

    /// Read the encoded scenario payload from a file. Surrounding whitespace is trimmed.
    #[clap(long)]
    pub payload_file: Option<PathBuf>,

    /// Seconds to wait between starting the job and fetching its logs
    #[clap(long, default_value = "10")]
    pub delay_secs: u64,

    /// After the run, look the scenario up again and check the stored payload matches
    #[clap(long, default_value = "false")]
    pub verify: bool,
}

impl SmokeCli {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    pub fn payload(&self) -> anyhow::Result<String> {
        if let Some(payload) = &self.payload {
            return Ok(payload.clone());
        }
        match &self.payload_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read payload file {}", path.display()))?;
                Ok(raw.trim().to_string())
            }
            None => Ok(SAMPLE_PAYLOAD.to_string()),
        }
    }
}
