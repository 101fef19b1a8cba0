//! Task endpoints

use async_trait::async_trait;
use serde::Serialize;

use crate::api::{CreateTaskArgs, TaskFilter, UpdateTaskArgs};
use crate::client::TodoistClient;
use crate::error::{TodoistError, TodoistResult};
use crate::types::Task;
use crate::validation::{validate_id, validate_text};

#[derive(Serialize)]
struct NewTask<'a> {
    content: &'a str,
    #[serde(flatten)]
    args: &'a CreateTaskArgs,
}

/// Task operations
#[async_trait]
pub trait Tasks {
    /// Get active tasks matching the filter
    async fn get_all_tasks(&self, filter: &TaskFilter) -> TodoistResult<Vec<Task>>;

    /// Create a new task
    async fn create_task(&self, content: &str, args: &CreateTaskArgs) -> TodoistResult<Task>;

    /// Get a single active task
    async fn get_task(&self, task_id: u64) -> TodoistResult<Task>;

    /// Update a task; unset fields are left untouched
    async fn update_task(&self, task_id: u64, args: &UpdateTaskArgs) -> TodoistResult<()>;

    /// Close (complete) a task
    async fn close_task(&self, task_id: u64) -> TodoistResult<()>;

    /// Reopen a previously closed task
    async fn reopen_task(&self, task_id: u64) -> TodoistResult<()>;

    /// Delete a task
    async fn delete_task(&self, task_id: u64) -> TodoistResult<()>;
}

#[async_trait]
impl Tasks for TodoistClient {
    async fn get_all_tasks(&self, filter: &TaskFilter) -> TodoistResult<Vec<Task>> {
        let response = self.get("tasks", &filter.to_query()).await?;
        let tasks = self.read_json(response).await?;
        Ok(tasks.unwrap_or_default())
    }

    async fn create_task(&self, content: &str, args: &CreateTaskArgs) -> TodoistResult<Task> {
        let content = validate_text(content, "task content")?;
        let body = NewTask {
            content: &content,
            args,
        };
        let response = self.post("tasks", &body).await?;
        self.read_json(response)
            .await?
            .ok_or_else(|| TodoistError::InvalidResponse("expected a task payload".into()))
    }

    async fn get_task(&self, task_id: u64) -> TodoistResult<Task> {
        validate_id(task_id, "task ID")?;
        let response = self.get(&format!("tasks/{}", task_id), &[]).await?;
        self.read_json(response)
            .await?
            .ok_or_else(|| TodoistError::InvalidResponse("expected a task payload".into()))
    }

    async fn update_task(&self, task_id: u64, args: &UpdateTaskArgs) -> TodoistResult<()> {
        validate_id(task_id, "task ID")?;
        let response = self.post(&format!("tasks/{}", task_id), args).await?;
        self.expect_no_content(response).await
    }

    async fn close_task(&self, task_id: u64) -> TodoistResult<()> {
        validate_id(task_id, "task ID")?;
        let response = self.post_empty(&format!("tasks/{}/close", task_id)).await?;
        self.expect_no_content(response).await
    }

    async fn reopen_task(&self, task_id: u64) -> TodoistResult<()> {
        validate_id(task_id, "task ID")?;
        let response = self
            .post_empty(&format!("tasks/{}/reopen", task_id))
            .await?;
        self.expect_no_content(response).await
    }

    async fn delete_task(&self, task_id: u64) -> TodoistResult<()> {
        validate_id(task_id, "task ID")?;
        let response = self.delete(&format!("tasks/{}", task_id)).await?;
        self.expect_no_content(response).await
    }
}
