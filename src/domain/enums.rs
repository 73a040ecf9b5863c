use serde::{Deserialize, Serialize};

/// Workflow status of a task as stored by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Paused,
    Finished,
    Closed,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Wire name sent in status updates
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Paused => "paused",
            Self::Finished => "finished",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }

    /// Human label for badges
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN PROGRESS",
            Self::Paused => "PAUSED",
            Self::Finished => "FINISHED",
            Self::Closed => "CLOSED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Work on the task is over
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Finished | Self::Closed)
    }

    /// Every status an assignee can pick
    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::Open,
            TaskStatus::InProgress,
            TaskStatus::Paused,
            TaskStatus::Finished,
            TaskStatus::Closed,
        ]
    }

    /// Step through the selectable statuses, wrapping at both ends.
    /// `Unknown` steps onto the first (or last) real status.
    pub fn cycle(&self, forward: bool) -> TaskStatus {
        let all = Self::all();
        let len = all.len();
        match all.iter().position(|s| s == self) {
            Some(idx) if forward => all[(idx + 1) % len],
            Some(idx) => all[(idx + len - 1) % len],
            None if forward => all[0],
            None => all[len - 1],
        }
    }
}

/// Which slice of the task list the dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    AssignedToMe,
    AssignedByMe,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::AssignedToMe => "Assigned to me",
            Tab::AssignedByMe => "Assigned by me",
        }
    }

    pub fn other(&self) -> Tab {
        match self {
            Tab::AssignedToMe => Tab::AssignedByMe,
            Tab::AssignedByMe => Tab::AssignedToMe,
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::AssignedToMe, Tab::AssignedByMe]
    }
}

/// Page navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Previous,
    Next,
    Jump(usize),
}

/// Which auth form is showing while signed out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Signed out, auth form has focus
    Auth,
    /// Dashboard, list has focus
    Normal,
    /// Typing a new task description
    ComposingTask,
    /// Task detail modal is open
    TaskModal,
}

/// Severity bucket for priority/importance badges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn from_score(score: i64) -> Self {
        if score >= 4 {
            Level::High
        } else if score >= 3 {
            Level::Medium
        } else {
            Level::Low
        }
    }
}
