// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};
use skill_ranking::{api::ApiClient, config::Config, routes, state::AppState};
use url::Url;

/// Per-route request counters of the fake ranking API.
#[derive(Default)]
pub struct Hits {
    pub exam_gets: AtomicUsize,
    pub ranking_gets: AtomicUsize,
    pub certification_gets: AtomicUsize,
    pub course_type_gets: AtomicUsize,
    pub exam_posts: AtomicUsize,
    pub bulk_posts: AtomicUsize,
}

/// Counter values at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitCount {
    pub exam_gets: usize,
    pub ranking_gets: usize,
    pub certification_gets: usize,
    pub course_type_gets: usize,
    pub exam_posts: usize,
    pub bulk_posts: usize,
}

impl HitCount {
    pub fn total(&self) -> usize {
        self.exam_gets
            + self.ranking_gets
            + self.certification_gets
            + self.course_type_gets
            + self.exam_posts
            + self.bulk_posts
    }
}

/// In-memory stand-in for the ranking API.
pub struct FakeApi {
    pub hits: Hits,
    pub exam_records: Mutex<Vec<Value>>,
    pub rankings: Mutex<Vec<Value>>,
    pub created_payloads: Mutex<Vec<Value>>,
    pub uploaded_files: Mutex<Vec<(String, Vec<u8>)>>,
    pub bulk_count: u64,
    pub fail_bulk: bool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            hits: Hits::default(),
            exam_records: Mutex::new(Vec::new()),
            rankings: Mutex::new(Vec::new()),
            created_payloads: Mutex::new(Vec::new()),
            uploaded_files: Mutex::new(Vec::new()),
            bulk_count: 0,
            fail_bulk: false,
        }
    }

    pub fn with_rankings(self, count: usize) -> Self {
        *self.rankings.lock().unwrap() = (1..=count).map(ranking_json).collect();
        self
    }

    pub fn with_exam_records(self, records: Vec<Value>) -> Self {
        *self.exam_records.lock().unwrap() = records;
        self
    }

    pub fn with_bulk_count(mut self, count: u64) -> Self {
        self.bulk_count = count;
        self
    }

    pub fn failing_bulk(mut self) -> Self {
        self.fail_bulk = true;
        self
    }

    pub fn count(&self) -> HitCount {
        HitCount {
            exam_gets: self.hits.exam_gets.load(Ordering::SeqCst),
            ranking_gets: self.hits.ranking_gets.load(Ordering::SeqCst),
            certification_gets: self.hits.certification_gets.load(Ordering::SeqCst),
            course_type_gets: self.hits.course_type_gets.load(Ordering::SeqCst),
            exam_posts: self.hits.exam_posts.load(Ordering::SeqCst),
            bulk_posts: self.hits.bulk_posts.load(Ordering::SeqCst),
        }
    }
}

pub fn ranking_json(rank: usize) -> Value {
    json!({
        "_id": format!("rank-{}", rank),
        "rank": rank,
        "name": format!("Learner {}", rank),
        "certification": "CKA",
        "courseType": "Advanced",
        "score": 100 - rank as i64,
        "totalScore": 100
    })
}

pub fn exam_json(id: &str, name: &str, date: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "date": date,
        "certification": "AWS SAA",
        "courseType": "Intermediate",
        "status": "Passed",
        "score": 85,
        "totalScore": 100,
        "sessionLink": "https://sessions.example.com/1"
    })
}

async fn list_exam_data(State(api): State<Arc<FakeApi>>) -> Json<Vec<Value>> {
    api.hits.exam_gets.fetch_add(1, Ordering::SeqCst);
    Json(api.exam_records.lock().unwrap().clone())
}

async fn list_rankings(State(api): State<Arc<FakeApi>>) -> Json<Vec<Value>> {
    api.hits.ranking_gets.fetch_add(1, Ordering::SeqCst);
    Json(api.rankings.lock().unwrap().clone())
}

async fn list_certifications(State(api): State<Arc<FakeApi>>) -> Json<Value> {
    api.hits.certification_gets.fetch_add(1, Ordering::SeqCst);
    Json(json!(["AWS SAA", "CKA"]))
}

async fn list_course_types(State(api): State<Arc<FakeApi>>) -> Json<Value> {
    api.hits.course_type_gets.fetch_add(1, Ordering::SeqCst);
    Json(json!(["Beginner", "Intermediate", "Advanced"]))
}

async fn create_exam(
    State(api): State<Arc<FakeApi>>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    api.hits.exam_posts.fetch_add(1, Ordering::SeqCst);
    api.created_payloads.lock().unwrap().push(payload.clone());

    let name = payload["name"].as_str().unwrap_or_default().trim();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "name is required"})),
        );
    }

    let created = json!({
        "_id": uuid::Uuid::new_v4().to_string(),
        "name": name,
        "date": payload["date"],
        "certification": payload["certification"],
        "courseType": payload["courseType"],
        "status": payload["status"],
        "score": payload["score"].as_str().and_then(|s| s.parse::<f64>().ok()).unwrap_or(0.0),
        "totalScore": payload["totalScore"].as_str().and_then(|s| s.parse::<f64>().ok()).unwrap_or(0.0),
        "sessionLink": payload["sessionLink"],
    });
    api.exam_records.lock().unwrap().push(created.clone());

    (StatusCode::CREATED, Json(created))
}

async fn bulk_upload(State(api): State<Arc<FakeApi>>, mut multipart: Multipart) -> impl IntoResponse {
    api.hits.bulk_posts.fetch_add(1, Ordering::SeqCst);

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap_or_default().to_vec();
        api.uploaded_files.lock().unwrap().push((name, bytes));
    }

    if api.fail_bulk {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "could not parse spreadsheet"})),
        );
    }

    (StatusCode::OK, Json(json!({"count": api.bulk_count})))
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Spawns the fake ranking API on a random port and returns its base URL.
pub async fn spawn_fake_api(api: Arc<FakeApi>) -> String {
    let app = Router::new()
        .route("/api/examdata", get(list_exam_data).post(create_exam))
        .route("/api/rankings", get(list_rankings))
        .route("/api/certifications", get(list_certifications))
        .route("/api/coursetypes", get(list_course_types))
        .route("/api/bulkupload", axum::routing::post(bulk_upload))
        .with_state(api);

    serve(app).await
}

/// Spawns the web client pointed at `api_address`.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app(api_address: &str) -> String {
    let config = Config::with_api_url(Url::parse(api_address).expect("valid fake API address"));
    let client = ApiClient::new(config.api_url.clone(), config.request_timeout)
        .expect("Failed to build API client");

    let state = AppState::new(config, Arc::new(client));
    let app = routes::create_router(state);

    serve(app).await
}

/// Spawns both servers; returns the client's address.
pub async fn spawn_stack(api: Arc<FakeApi>) -> String {
    let api_address = spawn_fake_api(api).await;
    spawn_app(&api_address).await
}

/// A client that keeps cookies, like a browser tab.
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build browser client")
}

pub fn valid_form(name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", name.to_string()),
        ("date", "2024-03-05".to_string()),
        ("certification", "AWS SAA".to_string()),
        ("courseType", "Intermediate".to_string()),
        ("status", "Passed".to_string()),
        ("score", "88".to_string()),
        ("totalScore", "100".to_string()),
        ("sessionLink", "https://sessions.example.com/42".to_string()),
    ]
}
