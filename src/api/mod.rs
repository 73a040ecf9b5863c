pub mod client;
pub mod error;

pub use client::HttpApi;
pub use error::ApiError;

use crate::domain::{Task, TaskStatus, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile fields sent to `/api/register`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub position: Option<String>,
    pub job_description: Option<String>,
}

/// Summary returned by login and register
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Body of a successful login or register
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// Structured result of the server's assignment workflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Assignment {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub assignee_name: String,
    #[serde(default)]
    pub task_title: String,
}

/// What `POST /api/tasks` reported back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateTaskOutcome {
    /// Free-form message from the workflow
    Message(String),
    Assigned(Assignment),
}

impl CreateTaskOutcome {
    /// Interpret the `message` field, which is either a string or an object
    pub fn from_message(message: Value) -> Result<Self, ApiError> {
        match message {
            Value::String(s) => Ok(CreateTaskOutcome::Message(s)),
            Value::Object(_) => {
                let assignment: Assignment = serde_json::from_value(message)
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                if assignment.status.as_deref() == Some("error") {
                    let msg = assignment
                        .message
                        .unwrap_or_else(|| String::from("Failed to create task"));
                    return Err(ApiError::Validation(msg));
                }
                Ok(CreateTaskOutcome::Assigned(assignment))
            }
            Value::Null => Ok(CreateTaskOutcome::Message(String::from("Task created"))),
            other => Ok(CreateTaskOutcome::Message(other.to_string())),
        }
    }

    /// Text for the success toast
    pub fn toast_message(&self) -> String {
        match self {
            CreateTaskOutcome::Message(msg) => msg.clone(),
            CreateTaskOutcome::Assigned(a) => format!(
                "Task \"{}\" assigned to {} successfully",
                a.task_title, a.assignee_name
            ),
        }
    }
}

/// The REST surface the client talks to.
///
/// `me` and `tasks` swallow failures: an unauthenticated start-up is normal,
/// so they downgrade to `None` / empty instead of erroring.
pub trait TaskApi {
    fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;
    fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError>;
    fn logout(&self) -> Result<(), ApiError>;
    fn me(&self) -> Option<User>;
    fn create_task(&self, description: &str) -> Result<CreateTaskOutcome, ApiError>;
    fn tasks(&self) -> Vec<Task>;
    /// Returns the server's confirmation message
    fn update_status(&self, task_id: i64, status: TaskStatus) -> Result<String, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_from_plain_message() {
        let outcome = CreateTaskOutcome::from_message(json!("Queued for review")).unwrap();
        assert_eq!(outcome.toast_message(), "Queued for review");
    }

    #[test]
    fn test_outcome_from_assignment() {
        let outcome = CreateTaskOutcome::from_message(json!({
            "status": "success",
            "message": "Task 'Fix bug' created successfully for assignee u-2.",
            "assignee_name": "Ana Ruiz",
            "task_title": "Fix bug"
        }))
        .unwrap();
        assert_eq!(
            outcome.toast_message(),
            "Task \"Fix bug\" assigned to Ana Ruiz successfully"
        );
    }

    #[test]
    fn test_outcome_with_error_status() {
        let err = CreateTaskOutcome::from_message(json!({
            "status": "error",
            "message": "No suitable assignee"
        }))
        .unwrap_err();
        assert_eq!(err, ApiError::Validation("No suitable assignee".to_string()));
    }

    #[test]
    fn test_register_request_wire_shape() {
        let req = RegisterRequest {
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            email: "ana@example.com".into(),
            password: "pw".into(),
            position: Some("Engineer".into()),
            job_description: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["first_name"], "Ana");
        assert_eq!(value["position"], "Engineer");
        assert!(value["job_description"].is_null());
    }
}
