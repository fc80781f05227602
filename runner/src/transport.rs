//! Blocking ureq transport for the smoke driver.

use log::debug;
use scenario_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Executes requests with a single reused `ureq::Agent`.
///
/// 4xx/5xx replies are handed back as data; the core decides what a status
/// means for each endpoint.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!("{:?} {}", req.method, req.path);

        let sent = match (req.method, req.body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!("-> {status}, {} bytes", body.len());

        Ok(HttpResponse { status, headers, body })
    }
}
