use super::error::{decode_error_body, ApiError};
use super::{CreateTaskOutcome, LoginResponse, RegisterRequest, TaskApi};
use crate::domain::{Task, TaskStatus, User};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Value,
}

/// Blocking HTTP implementation of [`TaskApi`].
///
/// The session cookie set by login/register lives in the client's cookie
/// store for as long as this value does.
pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-success response into a validation error carrying the best
/// message the body offers
fn rejection(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let text = response.text().unwrap_or_default();
    let message = decode_error_body(&text).into_message(fallback);
    warn!(%status, %message, "request rejected");
    ApiError::Validation(message)
}

impl TaskApi for HttpApi {
    fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        debug!(email, "logging in");
        let response = self
            .client
            .post(self.url("/api/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "login rejected");
            return Err(ApiError::Auth(String::from("Login failed")));
        }
        let body = response.json::<LoginResponse>()?;
        info!(email, "logged in");
        Ok(body)
    }

    fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        debug!(email = %request.email, "registering");
        let response = self
            .client
            .post(self.url("/api/register"))
            .json(request)
            .send()?;
        if !response.status().is_success() {
            return Err(rejection(response, "Registration failed"));
        }
        Ok(response.json::<LoginResponse>()?)
    }

    fn logout(&self) -> Result<(), ApiError> {
        let response = self.client.post(self.url("/api/logout")).send()?;
        debug!(status = %response.status(), "logged out");
        Ok(())
    }

    fn me(&self) -> Option<User> {
        let response = match self.client.get(self.url("/api/me")).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "could not reach server for /api/me");
                return None;
            }
        };
        if !response.status().is_success() {
            debug!(status = %response.status(), "not authenticated");
            return None;
        }
        match response.json::<User>() {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "unreadable /api/me payload");
                None
            }
        }
    }

    fn create_task(&self, description: &str) -> Result<CreateTaskOutcome, ApiError> {
        info!(len = description.len(), "creating task");
        let response = self
            .client
            .post(self.url("/api/tasks"))
            .json(&json!({ "description": description }))
            .send()?;
        if !response.status().is_success() {
            return Err(rejection(response, "Failed to create task"));
        }
        let body = response.json::<MessageBody>()?;
        CreateTaskOutcome::from_message(body.message)
    }

    fn tasks(&self) -> Vec<Task> {
        let response = match self.client.get(self.url("/api/tasks")).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "could not load tasks");
                return Vec::new();
            }
        };
        if !response.status().is_success() {
            warn!(status = %response.status(), "task list refused");
            return Vec::new();
        }
        match response.json::<Vec<Task>>() {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(error = %e, "unreadable task list");
                Vec::new()
            }
        }
    }

    fn update_status(&self, task_id: i64, status: TaskStatus) -> Result<String, ApiError> {
        info!(task_id, status = status.as_wire(), "updating status");
        let response = self
            .client
            .patch(self.url(&format!("/api/tasks/{}/status", task_id)))
            .json(&json!({ "status": status.as_wire() }))
            .send()?;
        if !response.status().is_success() {
            return Err(rejection(response, "Failed to update status"));
        }
        let body = response.json::<MessageBody>()?;
        Ok(match body.message {
            Value::String(s) => s,
            _ => format!("Status updated to '{}'", status.as_wire()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::{header, HeaderMap, StatusCode},
        response::{IntoResponse, Response as AxumResponse},
        routing::{get, patch, post},
        Json, Router,
    };

    const SESSION: &str = "session=abc123";

    async fn login(Json(body): Json<Value>) -> AxumResponse {
        if body["password"] == "secret" {
            (
                [(header::SET_COOKIE, format!("{}; Path=/", SESSION))],
                Json(json!({"message": "Login successful", "user": {"name": "Ana Ruiz", "email": body["email"]}})),
            )
                .into_response()
        } else {
            (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid credentials"}))).into_response()
        }
    }

    async fn register(Json(body): Json<Value>) -> AxumResponse {
        if body["email"] == "taken@example.com" {
            (StatusCode::BAD_REQUEST, Json(json!({"detail": "Email already registered"}))).into_response()
        } else {
            Json(json!({"message": "Registration successful", "user": {"name": "New User", "email": body["email"]}}))
                .into_response()
        }
    }

    async fn me(headers: HeaderMap) -> AxumResponse {
        let authed = headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains(SESSION))
            .unwrap_or(false);
        if authed {
            Json(json!({"id": "u-1", "name": "Ana Ruiz", "email": "ana@example.com"})).into_response()
        } else {
            (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"}))).into_response()
        }
    }

    async fn list_tasks() -> Json<Value> {
        Json(json!([
            {"id": 1, "title": "Fix bug", "description": "d", "priority": "5", "importance": "2",
             "status": "open", "assignee": "u-1", "assign_by": "u-2", "deadline": null},
            {"id": 2, "title": "Write docs", "description": "d", "priority": 1, "importance": 4,
             "status": "paused", "assignee": "u-3", "assign_by": "u-1"}
        ]))
    }

    async fn create_task(Json(body): Json<Value>) -> AxumResponse {
        match body["description"].as_str().unwrap_or_default() {
            "fix bug" => Json(json!({"message": {
                "status": "success",
                "message": "created",
                "assignee_name": "Ana Ruiz",
                "task_title": "Fix bug"
            }}))
            .into_response(),
            "plain" => Json(json!({"message": "Task queued"})).into_response(),
            "json error" => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "workflow crashed"}))).into_response()
            }
            "text error" => (StatusCode::BAD_REQUEST, "description too vague").into_response(),
            _ => StatusCode::BAD_REQUEST.into_response(),
        }
    }

    async fn update_status(Path(id): Path<i64>, Json(body): Json<Value>) -> AxumResponse {
        if id == 1 && body["status"] == "finished" {
            Json(json!({"message": "Task 1 status updated to finished"})).into_response()
        } else {
            (StatusCode::BAD_REQUEST, Json(json!({"detail": "Task not found"}))).into_response()
        }
    }

    /// Serve a fake backend on an ephemeral port from its own runtime thread
    fn spawn_server() -> String {
        let router = Router::new()
            .route("/api/login", post(login))
            .route("/api/register", post(register))
            .route("/api/logout", post(|| async { Json(json!({"message": "Logged out"})) }))
            .route("/api/me", get(me))
            .route("/api/tasks", get(list_tasks).post(create_task))
            .route("/api/tasks/{id}/status", patch(update_status));

        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("failed to build test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("failed to bind to ephemeral port");
                let port = listener.local_addr().expect("failed to get local addr").port();
                tx.send(port).expect("test thread went away");
                axum::serve(listener, router).await.expect("test server error");
            });
        });
        let port = rx.recv().expect("server did not report its port");
        format!("http://127.0.0.1:{}", port)
    }

    fn api() -> HttpApi {
        HttpApi::new(&spawn_server(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_me_is_none_before_login() {
        let api = api();
        assert!(api.me().is_none());
    }

    #[test]
    fn test_login_keeps_session_cookie() {
        let api = api();
        let response = api.login("ana@example.com", "secret").unwrap();
        assert_eq!(response.message, "Login successful");

        let user = api.me().expect("session cookie should authenticate /api/me");
        assert_eq!(user.id, "u-1");
        assert_eq!(user.name, "Ana Ruiz");
    }

    #[test]
    fn test_bad_login_is_auth_error() {
        let api = api();
        let err = api.login("ana@example.com", "wrong").unwrap_err();
        assert_eq!(err, ApiError::Auth("Login failed".to_string()));
    }

    #[test]
    fn test_register_rejection_carries_detail() {
        let api = api();
        let request = RegisterRequest {
            email: "taken@example.com".into(),
            ..RegisterRequest::default()
        };
        let err = api.register(&request).unwrap_err();
        assert_eq!(err, ApiError::Validation("Email already registered".to_string()));
    }

    #[test]
    fn test_tasks_decode() {
        let api = api();
        let tasks = api.tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].priority, 5);
        assert_eq!(tasks[1].status, TaskStatus::Paused);
        assert_eq!(tasks[1].assign_by, "u-1");
    }

    #[test]
    fn test_create_task_outcomes() {
        let api = api();
        let outcome = api.create_task("fix bug").unwrap();
        assert_eq!(
            outcome.toast_message(),
            "Task \"Fix bug\" assigned to Ana Ruiz successfully"
        );
        assert_eq!(
            api.create_task("plain").unwrap(),
            CreateTaskOutcome::Message("Task queued".to_string())
        );
    }

    #[test]
    fn test_create_task_error_bodies() {
        let api = api();
        assert_eq!(
            api.create_task("json error").unwrap_err(),
            ApiError::Validation("workflow crashed".to_string())
        );
        assert_eq!(
            api.create_task("text error").unwrap_err(),
            ApiError::Validation("description too vague".to_string())
        );
        assert_eq!(
            api.create_task("anything else").unwrap_err(),
            ApiError::Validation("Failed to create task".to_string())
        );
    }

    #[test]
    fn test_update_status() {
        let api = api();
        assert_eq!(
            api.update_status(1, TaskStatus::Finished).unwrap(),
            "Task 1 status updated to finished"
        );
        assert_eq!(
            api.update_status(9, TaskStatus::Finished).unwrap_err(),
            ApiError::Validation("Task not found".to_string())
        );
    }

    #[test]
    fn test_unreachable_server() {
        // Port 9 (discard) is closed on test hosts
        let api = HttpApi::new("http://127.0.0.1:9/", Duration::from_secs(2)).unwrap();
        assert_eq!(api.base_url(), "http://127.0.0.1:9");
        assert!(api.me().is_none());
        assert!(api.tasks().is_empty());
        assert!(matches!(api.login("a", "b"), Err(ApiError::Network(_))));
    }
}
