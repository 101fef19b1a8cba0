//! Request arguments for endpoint operations
//!
//! Optional fields stay off the wire entirely; the service applies its own
//! defaults for anything not sent.

use serde::Serialize;

/// Optional parameters for creating a project
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateProjectArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_style: Option<String>,
}

/// Optional parameters for creating a section
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSectionArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// Optional parameters for creating a task
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTaskArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Task priority from 1 (normal) to 4 (urgent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
}

/// Parameters for updating a task; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
}

/// Filter for listing active tasks, rendered as a query string
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub project_id: Option<u64>,
    pub section_id: Option<u64>,
    pub label: Option<String>,
    /// Query in the service's filter syntax, e.g. "today | overdue"
    pub filter: Option<String>,
    pub lang: Option<String>,
    pub ids: Option<Vec<u64>>,
}

impl TaskFilter {
    /// Render the filter as query pairs; unset fields produce no pair.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(project_id) = self.project_id {
            query.push(("project_id", project_id.to_string()));
        }
        if let Some(section_id) = self.section_id {
            query.push(("section_id", section_id.to_string()));
        }
        if let Some(label) = &self.label {
            query.push(("label", label.clone()));
        }
        if let Some(filter) = &self.filter {
            query.push(("filter", filter.clone()));
        }
        if let Some(lang) = &self.lang {
            query.push(("lang", lang.clone()));
        }
        if let Some(ids) = &self.ids {
            let joined = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            query.push(("ids", joined));
        }
        query
    }
}
