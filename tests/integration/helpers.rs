use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use love_route::{
    config::{Config, StorageBackend},
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const BACKENDS: [StorageBackend; 2] = [StorageBackend::Sqlite, StorageBackend::Memory];

pub const JWT_SECRET: &str = "test-jwt-secret";

pub struct TestApp {
    pub app: Router,
    pub backend: StorageBackend,
}

fn build_config(storage_backend: StorageBackend) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        storage_backend,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        jwt_secret: JWT_SECRET.to_string(),
        token_ttl_hours: 1,
        catalogue_dir: None,
        argon2_memory_kib: 1024,
        argon2_iterations: 1,
        argon2_parallelism: 1,
        allowed_origins: Vec::new(),
        ignore_missing_migrations: false,
    }
}

pub async fn spawn_app(backend: StorageBackend) -> TestApp {
    let state = AppState::from_config(build_config(backend))
        .await
        .expect("failed to build app state");
    TestApp {
        app: create_router(state),
        backend,
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::now_v7())
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).expect("failed to build GET request")
}

pub fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("failed to build POST request")
}

/// Registers a fresh account and returns its token.
pub async fn register_user(app: &Router, email: &str, city_id: &str) -> String {
    let res = send(
        app,
        post_json(
            "/api/v1/auth/register",
            None,
            json!({ "email": email, "password": "secret1", "city_id": city_id }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::CREATED).await).await;
    body["token"]
        .as_str()
        .expect("missing token in register response")
        .to_string()
}

pub async fn swipe(app: &Router, token: &str, place_id: &str, action: &str) -> StatusCode {
    send(
        app,
        post_json(
            "/api/v1/swipes",
            Some(token),
            json!({ "place_id": place_id, "action": action }),
        ),
    )
    .await
    .status()
}

pub fn place_ids(places: &Value) -> Vec<String> {
    places
        .as_array()
        .expect("places should be an array")
        .iter()
        .map(|p| p["id"].as_str().expect("place id").to_string())
        .collect()
}
