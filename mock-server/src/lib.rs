use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const INFO_TEXT: &str = "Scenario service mock: POST /saveUrl, GET /getUrl/{id}, POST /job/start, POST /scenario/worker/logs";
pub const NOT_FOUND: &str = "not found";

const SHORT_ID_LEN: usize = 9;

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResponse {
    pub success: bool,
    #[serde(rename = "longUrl")]
    pub long_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioRef {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenericOut {
    pub success: bool,
    pub result: String,
}

impl GenericOut {
    fn ok(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: result.into(),
        }
    }

    fn not_found() -> Self {
        Self {
            success: false,
            result: NOT_FOUND.to_string(),
        }
    }
}

/// Saved payloads and the log lines of started jobs, both keyed by short id.
#[derive(Debug, Default)]
pub struct Store {
    scenarios: HashMap<String, String>,
    jobs: HashMap<String, Vec<String>>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/", get(info_text))
        .route("/saveUrl", post(save_url))
        .route("/getUrl/{id}", get(get_url))
        .route("/job/start", post(start_job))
        .route("/scenario/worker/logs", post(worker_logs))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(SHORT_ID_LEN);
    id
}

async fn info_text() -> &'static str {
    INFO_TEXT
}

async fn save_url(State(db): State<Db>, Json(input): Json<SaveRequest>) -> Json<SaveResponse> {
    let mut store = db.write().await;
    let mut id = short_id();
    while store.scenarios.contains_key(&id) {
        id = short_id();
    }
    debug!("saving {} byte scenario", input.url.len());
    store.scenarios.insert(id.clone(), input.url);
    info!("scenario saved as {id}");
    Json(SaveResponse {
        success: true,
        short_url: id,
    })
}

async fn get_url(State(db): State<Db>, Path(id): Path<String>) -> Json<LookupResponse> {
    let store = db.read().await;
    match store.scenarios.get(&id) {
        Some(payload) => Json(LookupResponse {
            success: true,
            long_url: payload.clone(),
        }),
        None => Json(LookupResponse {
            success: false,
            long_url: NOT_FOUND.to_string(),
        }),
    }
}

async fn start_job(State(db): State<Db>, Json(input): Json<ScenarioRef>) -> Json<GenericOut> {
    let mut store = db.write().await;
    if !store.scenarios.contains_key(&input.id) {
        info!("job start for unknown scenario {}", input.id);
        return Json(GenericOut::not_found());
    }
    store
        .jobs
        .entry(input.id.clone())
        .or_default()
        .push(format!("job started for scenario {}", input.id));
    info!("job started for {}", input.id);
    Json(GenericOut::ok("Job started"))
}

async fn worker_logs(State(db): State<Db>, Json(input): Json<ScenarioRef>) -> Json<GenericOut> {
    let store = db.read().await;
    match store.jobs.get(&input.id) {
        Some(lines) => Json(GenericOut::ok(lines.join("\n"))),
        None => Json(GenericOut::not_found()),
    }
}
