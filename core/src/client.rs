//! Stateless HTTP request builder and response parser for the scenario service.
//!
//! # Design
//! `ScenarioClient` holds only a `base_url`. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller (or [`crate::smoke::run_smoke`])
//! executes the round-trip in between.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{LookupResponse, SaveScenario, SaveScenarioResponse, ScenarioId, ScenarioRef};

/// Synchronous, stateless client for the scenario service.
#[derive(Debug, Clone)]
pub struct ScenarioClient {
    base_url: String,
}

impl ScenarioClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /saveUrl` carrying the opaque payload untouched.
    pub fn build_save_scenario(&self, payload: &str) -> Result<HttpRequest, ApiError> {
        self.post_json(
            "/saveUrl",
            &SaveScenario {
                url: payload.to_string(),
            },
        )
    }

    pub fn build_start_job(&self, id: &ScenarioId) -> Result<HttpRequest, ApiError> {
        self.post_json("/job/start", &ScenarioRef { id: id.clone() })
    }

    pub fn build_worker_logs(&self, id: &ScenarioId) -> Result<HttpRequest, ApiError> {
        self.post_json("/scenario/worker/logs", &ScenarioRef { id: id.clone() })
    }

    /// `GET /getUrl/{id}`. The id is percent-encoded as a single path segment.
    pub fn build_lookup_scenario(&self, id: &ScenarioId) -> Result<HttpRequest, ApiError> {
        let mut url = Url::parse(&format!("{}/getUrl/", self.base_url))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: url.to_string(),
            headers: Vec::new(),
            body: None,
        })
    }

    /// Extract the scenario id from a save reply.
    ///
    /// A reply without `shortUrl` does not fail: the id becomes
    /// [`ScenarioId::MISSING`] and later calls carry that literal.
    pub fn parse_save_scenario(&self, response: HttpResponse) -> Result<ScenarioId, ApiError> {
        check_success(&response)?;
        let parsed: SaveScenarioResponse = parse_body(&response)?;
        match parsed.short_url {
            Some(id) => Ok(ScenarioId::new(id)),
            None => {
                warn!("save reply had no shortUrl, continuing with {:?}", ScenarioId::MISSING);
                Ok(ScenarioId::missing())
            }
        }
    }

    /// The job-start reply is arbitrary JSON; it is only checked to parse.
    pub fn parse_start_job(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        check_success(&response)?;
        parse_body(&response)
    }

    /// Logs are returned verbatim, whatever the status or shape.
    pub fn parse_worker_logs(&self, response: HttpResponse) -> String {
        if !response.is_success() {
            warn!("logs endpoint answered with status {}", response.status);
        }
        response.body
    }

    pub fn parse_lookup_scenario(&self, response: HttpResponse) -> Result<LookupResponse, ApiError> {
        check_success(&response)?;
        parse_body(&response)
    }

    fn post_json<T: Serialize>(&self, endpoint: &str, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{endpoint}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError {
        message: e.to_string(),
        body: response.body.clone(),
    })
}

fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ScenarioClient {
        ScenarioClient::new("http://localhost:8081")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn body_of(req: &HttpRequest) -> serde_json::Value {
        serde_json::from_str(req.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn build_save_scenario_wraps_payload_in_url_field() {
        let req = client().build_save_scenario("eJzdVMlu2zAU").unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8081/saveUrl");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(body_of(&req), serde_json::json!({"url": "eJzdVMlu2zAU"}));
    }

    #[test]
    fn build_start_job_and_logs_carry_the_same_id() {
        let id = ScenarioId::new("abc123");
        let start = client().build_start_job(&id).unwrap();
        let logs = client().build_worker_logs(&id).unwrap();
        assert_eq!(start.path, "http://localhost:8081/job/start");
        assert_eq!(logs.path, "http://localhost:8081/scenario/worker/logs");
        assert_eq!(body_of(&start), serde_json::json!({"id": "abc123"}));
        assert_eq!(body_of(&logs), body_of(&start));
    }

    #[test]
    fn build_lookup_scenario_is_a_get_without_body() {
        let req = client().build_lookup_scenario(&ScenarioId::new("abc123")).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8081/getUrl/abc123");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_lookup_scenario_encodes_reserved_characters() {
        let c = client();
        let req = c.build_lookup_scenario(&ScenarioId::new("H#Xz6?LWvg")).unwrap();
        assert_eq!(req.path, "http://localhost:8081/getUrl/H%23Xz6%3FLWvg");

        let req = c.build_lookup_scenario(&ScenarioId::new("ab cd")).unwrap();
        assert_eq!(req.path, "http://localhost:8081/getUrl/ab%20cd");

        let req = c.build_lookup_scenario(&ScenarioId::new("a/b")).unwrap();
        assert_eq!(req.path, "http://localhost:8081/getUrl/a%2Fb");

        let req = c.build_lookup_scenario(&ScenarioId::new("H!Xz6LWvg")).unwrap();
        assert_eq!(req.path, "http://localhost:8081/getUrl/H!Xz6LWvg");
    }

    #[test]
    fn build_lookup_scenario_keeps_base_path() {
        let req = ScenarioClient::new("http://localhost:8081/api/")
            .build_lookup_scenario(&ScenarioId::new("abc123"))
            .unwrap();
        assert_eq!(req.path, "http://localhost:8081/api/getUrl/abc123");
    }

    #[test]
    fn build_lookup_scenario_rejects_unparseable_base() {
        let err = ScenarioClient::new("not a url")
            .build_lookup_scenario(&ScenarioId::new("abc123"))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn parse_save_scenario_returns_short_url() {
        let id = client()
            .parse_save_scenario(ok(r#"{"success":true,"shortUrl":"abc123"}"#))
            .unwrap();
        assert_eq!(id, ScenarioId::new("abc123"));
    }

    #[test]
    fn parse_save_scenario_falls_back_when_short_url_absent() {
        let id = client().parse_save_scenario(ok(r#"{"success":true}"#)).unwrap();
        assert_eq!(id.as_str(), "not found");
    }

    #[test]
    fn parse_save_scenario_null_short_url_falls_back() {
        let id = client().parse_save_scenario(ok(r#"{"shortUrl":null}"#)).unwrap();
        assert!(id.is_missing());
    }

    #[test]
    fn parse_save_scenario_rejects_non_string_short_url() {
        let err = client().parse_save_scenario(ok(r#"{"shortUrl":42}"#)).unwrap_err();
        match err {
            ApiError::DeserializationError { body, .. } => assert_eq!(body, r#"{"shortUrl":42}"#),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_save_scenario_rejects_non_json() {
        let err = client().parse_save_scenario(ok("<html>Gateway Timeout</html>")).unwrap_err();
        match err {
            ApiError::DeserializationError { body, .. } => assert_eq!(body, "<html>Gateway Timeout</html>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_save_scenario_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_save_scenario(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_start_job_accepts_any_json() {
        let value = client().parse_start_job(ok(r#"[1,"two"]"#)).unwrap();
        assert_eq!(value, serde_json::json!([1, "two"]));
    }

    #[test]
    fn parse_worker_logs_returns_body_even_on_error_status() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: "no such worker".to_string(),
        };
        assert_eq!(client().parse_worker_logs(response), "no such worker");
    }

    #[test]
    fn parse_lookup_scenario_success() {
        let found = client()
            .parse_lookup_scenario(ok(r#"{"success":true,"longUrl":"eJz"}"#))
            .unwrap();
        assert!(found.success);
        assert_eq!(found.long_url, "eJz");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ScenarioClient::new("http://localhost:8081/");
        let req = client.build_save_scenario("x").unwrap();
        assert_eq!(req.path, "http://localhost:8081/saveUrl");
    }
}
