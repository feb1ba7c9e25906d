#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use showcase_api::auth::jwt::{generate_access_token, JwtConfig};
use showcase_api::config::{ServerConfig, DEFAULT_BODY_LIMIT_BYTES};
use showcase_api::router::build_app_router;
use showcase_api::state::AppState;
use showcase_db::Db;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough-for-hmac";
pub const TEST_BASE_URL: &str = "http://cdn.test";

/// Build a test `ServerConfig` with safe defaults and the given upload root.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        upload_dir: upload_dir.to_path_buf(),
        base_url: Some(TEST_BASE_URL.to_string()),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_mins: 15,
        },
    }
}

/// Build the full application router over `pool`, exactly as `main.rs` does.
/// Uploads land in a directory nothing reads from.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_uploads(pool, std::env::temp_dir().join("showcase-api-tests"))
}

/// Same as [`build_test_app`] with an explicit upload root.
pub fn build_test_app_with_uploads(pool: PgPool, upload_dir: PathBuf) -> Router {
    let config = test_config(&upload_dir);
    let state = AppState {
        db: Db::new(pool),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A valid bearer token signed with the test secret.
pub fn auth_token() -> String {
    let config = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiry_mins: 15,
    };
    generate_access_token(1, "admin", &config).expect("token generation")
}

fn bearer() -> String {
    format!("Bearer {}", auth_token())
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn json_request(method: Method, uri: &str, body: serde_json::Value, auth: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if auth {
        builder = builder.header(AUTHORIZATION, bearer());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Authenticated JSON POST.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, true)).await
}

/// JSON POST without an `Authorization` header.
pub async fn post_json_anon(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, false)).await
}

/// JSON POST with an arbitrary `Authorization` header value.
pub async fn post_json_with_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    authorization: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, authorization)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Authenticated JSON PUT.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body, true)).await
}

/// Authenticated DELETE with no body.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, bearer())
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Authenticated DELETE with a JSON body.
pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::DELETE, uri, body, true)).await
}

/// Authenticated GET.
pub async fn get_auth(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, bearer())
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// One part of a multipart form.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

const BOUNDARY: &str = "showcase-test-boundary";

/// Authenticated multipart POST.
pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(AUTHORIZATION, bearer())
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an entity and return its id, asserting a 201.
pub async fn create_id(app: Router, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED, "POST {uri}");
    body_json(response).await["id"].as_i64().unwrap()
}
