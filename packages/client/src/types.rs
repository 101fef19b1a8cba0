//! Payload models returned by the Todoist REST API
//!
//! The service owns these shapes; the client passes them through without
//! asserting anything beyond what its own arguments set. Fields that the
//! service may omit carry defaults so older payloads still deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_inbox_project: bool,
    #[serde(default)]
    pub view_style: String,
    #[serde(default)]
    pub url: String,
}

/// A section inside a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: u64,
    pub project_id: u64,
    pub name: String,
    #[serde(default)]
    pub order: i32,
}

/// An active task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub project_id: u64,
    pub section_id: Option<u64>,
    pub parent_id: Option<u64>,
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub priority: u8,
    pub due: Option<Due>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub comment_count: u32,
    pub created_at: DateTime<Utc>,
    pub creator_id: Option<u64>,
    pub assignee_id: Option<u64>,
    pub assigner_id: Option<u64>,
}

/// Due date information attached to a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Due {
    /// Human-readable representation, e.g. "tomorrow at 12"
    #[serde(default)]
    pub string: String,
    /// Calendar date in `YYYY-MM-DD` format
    pub date: String,
    #[serde(default)]
    pub is_recurring: bool,
    pub datetime: Option<DateTime<Utc>>,
    pub timezone: Option<String>,
}

/// A label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_favorite: bool,
}

/// A comment on a project or a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub content: String,
    pub project_id: Option<u64>,
    pub task_id: Option<u64>,
    pub posted_at: DateTime<Utc>,
    pub attachment: Option<Attachment>,
}

/// A file attached to a comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub resource_type: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub file_url: Option<String>,
}
