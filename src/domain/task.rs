use super::enums::{Level, TaskStatus};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The signed-in user as reported by `/api/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A task as listed by `/api/tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub priority: i64,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub importance: i64,
    #[serde(default = "default_status", deserialize_with = "deserialize_status")]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub assignee: String,
    #[serde(default)]
    pub assignee_name: Option<String>,
    #[serde(default, alias = "assigner", alias = "assigned_by", deserialize_with = "deserialize_id")]
    pub assign_by: String,
    #[serde(default, alias = "assign_by_name")]
    pub assigner_name: Option<String>,
    #[serde(default)]
    pub suggestions: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_status() -> TaskStatus {
    TaskStatus::Open
}

/// Nullable text columns read as empty
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A null status is a task nobody has touched yet
fn deserialize_status<'de, D>(deserializer: D) -> Result<TaskStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TaskStatus>::deserialize(deserializer)?.unwrap_or_else(default_status))
}

/// The server stores priority/importance as text ("1".."5"); accept numbers too.
/// Anything unparseable scores 0.
fn deserialize_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    })
}

/// User ids are strings on the wire but older rows carry integers
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

impl Task {
    /// Whether `user_id` is the assignee (the only user allowed to change status)
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        !self.assignee.is_empty() && self.assignee == user_id
    }

    /// Whether `user_id` handed this task out
    pub fn is_assigned_by(&self, user_id: &str) -> bool {
        !self.assign_by.is_empty() && self.assign_by == user_id
    }

    /// Assignee name, falling back to the raw id
    pub fn assignee_display(&self) -> &str {
        match self.assignee_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.assignee,
        }
    }

    /// Assigner name, falling back to the raw id
    pub fn assigner_display(&self) -> &str {
        match self.assigner_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.assign_by,
        }
    }

    pub fn priority_level(&self) -> Level {
        Level::from_score(self.priority)
    }

    pub fn importance_level(&self) -> Level {
        Level::from_score(self.importance)
    }

    /// Calendar day of the deadline, if it parses
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline.as_deref().and_then(parse_date)
    }

    /// Deadline as shown in lists ("No deadline" when absent)
    pub fn deadline_label(&self) -> String {
        match (self.deadline_date(), self.deadline.as_deref()) {
            (Some(date), _) => date.format("%Y-%m-%d").to_string(),
            (None, Some(raw)) if !raw.trim().is_empty() => raw.to_string(),
            _ => String::from("No deadline"),
        }
    }

    /// Deadline passed and work is not settled
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.deadline_date() {
            Some(date) => date < today && !self.status.is_settled(),
            None => false,
        }
    }
}

/// Parse the date formats the server emits for datetime columns
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
pub(crate) fn sample_task(id: i64, assignee: &str, assign_by: &str) -> Task {
    Task {
        id,
        title: format!("Task {}", id),
        description: format!("Description {}", id),
        deadline: None,
        priority: 3,
        importance: 2,
        status: TaskStatus::Open,
        assignee: assignee.to_string(),
        assignee_name: None,
        assign_by: assign_by.to_string(),
        assigner_name: None,
        suggestions: None,
        created_at: None,
    }
}
