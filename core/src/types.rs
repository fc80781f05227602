//! Wire DTOs for the scenario service.
//!
//! # Design
//! Field names follow the service's JSON (`shortUrl`, `longUrl`) through
//! serde renames. Reply types ignore unknown fields; the service adds and
//! drops fields freely and the client only depends on the ones named here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /saveUrl`. `url` is the opaque encoded scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveScenario {
    pub url: String,
}

/// Reply of `POST /saveUrl`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SaveScenarioResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(rename = "shortUrl", default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

/// Token the server hands out for a saved scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(String);

impl ScenarioId {
    /// Placeholder used downstream when the save reply carried no `shortUrl`.
    pub const MISSING: &'static str = "not found";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn missing() -> Self {
        Self(Self::MISSING.to_string())
    }

    pub fn is_missing(&self) -> bool {
        self.0 == Self::MISSING
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /job/start` and `POST /scenario/worker/logs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioRef {
    pub id: ScenarioId,
}

/// Generic `{success, result}` reply used across the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenericOut {
    pub success: bool,
    pub result: String,
}

/// Reply of `GET /getUrl/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupResponse {
    pub success: bool,
    #[serde(rename = "longUrl")]
    pub long_url: String,
}
