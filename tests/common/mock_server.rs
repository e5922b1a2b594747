// tests/common/mock_server.rs
//
// AuthSystem API のエンドポイント表面をインプロセスで再現するモック。
// 受信した x-auth-token と登録フォームを記録してテストから検証できる。

use axum::extract::{Multipart, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const MOCK_AUTH_TOKEN: &str = "abc123";
pub const VALID_PASSWORD: &str = "password123@#567565";

/// モックが受け取った1件の登録フォーム
#[derive(Debug, Clone)]
pub struct ReceivedRegistration {
    pub email: String,
    pub username: String,
    pub has_profile_image: bool,
}

#[derive(Default)]
struct Inner {
    login_succeeds: bool,
    registered_emails: HashSet<String>,
    registrations: Vec<ReceivedRegistration>,
    seen_auth_tokens: Vec<String>,
}

#[derive(Clone, Default)]
pub struct MockAuthState {
    inner: Arc<Mutex<Inner>>,
}

impl MockAuthState {
    fn new(login_succeeds: bool) -> Self {
        MockAuthState {
            inner: Arc::new(Mutex::new(Inner {
                login_succeeds,
                ..Inner::default()
            })),
        }
    }

    pub fn seen_auth_tokens(&self) -> Vec<String> {
        self.inner.lock().unwrap().seen_auth_tokens.clone()
    }

    pub fn registrations(&self) -> Vec<ReceivedRegistration> {
        self.inner.lock().unwrap().registrations.clone()
    }
}

/// モックサーバーをエフェメラルポートで起動し、ベースURLと状態を返す
pub async fn spawn(login_succeeds: bool) -> (String, MockAuthState) {
    let state = MockAuthState::new(login_succeeds);

    let app = Router::new()
        .route("/api/register", post(register))
        .route("/api/verify", get(verify_email))
        .route("/api/login", post(login))
        .route("/api/text-verify", post(text_verify))
        .route("/api/verify-text", post(verify_text))
        .route("/api/update-profile", put(update_profile))
        .route("/api/delete-account", delete(delete_account))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api", addr), state)
}

async fn register(
    State(state): State<MockAuthState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let mut email = String::new();
    let mut username = String::new();
    let mut has_profile_image = false;

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "email" => email = field.text().await.unwrap(),
            "username" => username = field.text().await.unwrap(),
            "profileImage" => has_profile_image = !field.bytes().await.unwrap().is_empty(),
            _ => {
                field.bytes().await.unwrap();
            }
        }
    }

    let mut inner = state.inner.lock().unwrap();
    inner.registrations.push(ReceivedRegistration {
        email: email.clone(),
        username: username.clone(),
        has_profile_image,
    });

    if username.contains("badword") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Username contains inappropriate content" })),
        );
    }
    if !inner.registered_emails.insert(email) {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "Email already registered" })),
        );
    }

    (
        StatusCode::CREATED,
        Json(json!({ "message": "User registered, verification email sent" })),
    )
}

async fn verify_email(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    match params.get("token").map(String::as_str) {
        Some("valid") => (StatusCode::OK, Json(json!({ "message": "Email verified" }))),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid or expired token" })),
        ),
    }
}

async fn login(
    State(state): State<MockAuthState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let login_succeeds = state.inner.lock().unwrap().login_succeeds;
    let password = body.get("password").and_then(Value::as_str).unwrap_or("");

    if login_succeeds && password == VALID_PASSWORD {
        (StatusCode::OK, Json(json!({ "token": MOCK_AUTH_TOKEN })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
    }
}

async fn text_verify(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match body.get("email").and_then(Value::as_str) {
        Some("nonexistent@example.com") | None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "User not found" })),
        ),
        Some(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Verification code sent" })),
        ),
    }
}

async fn verify_text(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match body.get("code").and_then(Value::as_str) {
        Some("123456") => (StatusCode::OK, Json(json!({ "message": "Code verified" }))),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Wrong verification code" })),
        ),
    }
}

async fn update_profile(
    State(state): State<MockAuthState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    // multipart ボディを読み切る
    while let Some(field) = multipart.next_field().await.unwrap() {
        field.bytes().await.unwrap();
    }

    match record_auth_token(&state, &headers) {
        Some(token) if token == MOCK_AUTH_TOKEN => {
            (StatusCode::OK, Json(json!({ "message": "Profile updated" })))
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid token" })),
        ),
    }
}

async fn delete_account(
    State(state): State<MockAuthState>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    match record_auth_token(&state, &headers) {
        Some(token) if token == MOCK_AUTH_TOKEN => {
            (StatusCode::OK, Json(json!({ "message": "Account deleted" })))
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid token" })),
        ),
    }
}

fn record_auth_token(state: &MockAuthState, headers: &HeaderMap) -> Option<String> {
    let token = headers
        .get("x-auth-token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)?;
    state
        .inner
        .lock()
        .unwrap()
        .seen_auth_tokens
        .push(token.clone());
    Some(token)
}
