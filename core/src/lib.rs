//! Synchronous client core for the scenario service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! `/saveUrl`, `/job/start`, `/scenario/worker/logs` and `/getUrl/{id}`
//! endpoints without touching the network (host-does-IO pattern), and drives
//! the save → start → wait → logs smoke sequence over any [`Transport`].
//!
//! # Design
//! - `ScenarioClient` is stateless; it holds only `base_url`.
//! - Each endpoint is split into `build_*` and `parse_*`, so the I/O boundary
//!   is explicit.
//! - The scenario payload is opaque and passed through untouched.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod smoke;
pub mod types;

pub use client::ScenarioClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use smoke::{run_smoke, Pause, SmokeReport, ThreadSleep, DEFAULT_DELAY};
pub use types::{GenericOut, LookupResponse, SaveScenario, SaveScenarioResponse, ScenarioId, ScenarioRef};
