//! Task Entity
//!
//! Follow-up activities (calls, emails, meetings) with priority and status.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Priority::ALL.into_iter().find(|p| p.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Scheduled,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Scheduled,
        TaskStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Scheduled => "scheduled",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        TaskStatus::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Scheduled => "Scheduled",
            TaskStatus::Completed => "Completed",
        }
    }
}

/// Kind of activity, drives the icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    Call,
    Email,
    Meeting,
    #[default]
    Task,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [TaskKind::Call, TaskKind::Email, TaskKind::Meeting, TaskKind::Task];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Call => "call",
            TaskKind::Email => "email",
            TaskKind::Meeting => "meeting",
            TaskKind::Task => "task",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        TaskKind::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskKind::Call => "📞",
            TaskKind::Email => "📧",
            TaskKind::Meeting => "🤝",
            TaskKind::Task => "📋",
        }
    }
}

/// Default assignee for newly created tasks
pub const DEFAULT_ASSIGNEE: &str = "You";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Due date, `YYYY-MM-DD` when entered through the form
    pub due_date: String,
    pub assignee: String,
    /// Related contact name
    pub contact: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u32, title: impl Into<String>, priority: Priority, due_date: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            priority,
            status: TaskStatus::Pending,
            due_date: due_date.into(),
            assignee: DEFAULT_ASSIGNEE.to_string(),
            contact: String::new(),
            kind: TaskKind::default(),
            completed: false,
        }
    }

    /// Flip completion. Completing sets status to completed, reopening to pending.
    pub fn toggled(&self) -> Self {
        let completed = !self.completed;
        Self {
            completed,
            status: if completed { TaskStatus::Completed } else { TaskStatus::Pending },
            ..self.clone()
        }
    }
}

impl Entity for Task {
    fn id(&self) -> u32 {
        self.id
    }
}
