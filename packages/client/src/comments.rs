//! Comment endpoints
//!
//! Comments hang off either a project or a task; [`CommentThread`] names the
//! parent and renders to the matching `project_id`/`task_id` field.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::TodoistClient;
use crate::error::{TodoistError, TodoistResult};
use crate::types::Comment;
use crate::validation::{validate_id, validate_text};

/// The parent a comment thread belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentThread {
    Project(u64),
    Task(u64),
}

impl CommentThread {
    fn query_key(self) -> &'static str {
        match self {
            CommentThread::Project(_) => "project_id",
            CommentThread::Task(_) => "task_id",
        }
    }

    fn id(self) -> u64 {
        match self {
            CommentThread::Project(id) | CommentThread::Task(id) => id,
        }
    }

    fn validated(self) -> TodoistResult<Self> {
        match self {
            CommentThread::Project(id) => validate_id(id, "project ID").map(CommentThread::Project),
            CommentThread::Task(id) => validate_id(id, "task ID").map(CommentThread::Task),
        }
    }
}

#[derive(Serialize)]
struct NewComment<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    task_id: Option<u64>,
    content: &'a str,
}

impl<'a> NewComment<'a> {
    fn for_thread(thread: CommentThread, content: &'a str) -> Self {
        match thread {
            CommentThread::Project(id) => Self {
                project_id: Some(id),
                task_id: None,
                content,
            },
            CommentThread::Task(id) => Self {
                project_id: None,
                task_id: Some(id),
                content,
            },
        }
    }
}

#[derive(Serialize)]
struct CommentContent<'a> {
    content: &'a str,
}

/// Comment operations
#[async_trait]
pub trait Comments {
    /// Get all comments on a project or task
    async fn get_all_comments(&self, thread: CommentThread) -> TodoistResult<Vec<Comment>>;

    /// Alias for [`get_all_comments`](Comments::get_all_comments) on a project
    async fn get_all_comments_by_project(&self, project_id: u64) -> TodoistResult<Vec<Comment>> {
        self.get_all_comments(CommentThread::Project(project_id))
            .await
    }

    /// Alias for [`get_all_comments`](Comments::get_all_comments) on a task
    async fn get_all_comments_by_task(&self, task_id: u64) -> TodoistResult<Vec<Comment>> {
        self.get_all_comments(CommentThread::Task(task_id)).await
    }

    /// Create a new comment on a project or task
    async fn create_comment(
        &self,
        thread: CommentThread,
        content: &str,
    ) -> TodoistResult<Comment>;

    /// Alias for [`create_comment`](Comments::create_comment) on a project
    async fn create_comment_for_project(
        &self,
        project_id: u64,
        content: &str,
    ) -> TodoistResult<Comment> {
        self.create_comment(CommentThread::Project(project_id), content)
            .await
    }

    /// Alias for [`create_comment`](Comments::create_comment) on a task
    async fn create_comment_for_task(
        &self,
        task_id: u64,
        content: &str,
    ) -> TodoistResult<Comment> {
        self.create_comment(CommentThread::Task(task_id), content)
            .await
    }

    /// Get a single comment
    async fn get_comment(&self, comment_id: u64) -> TodoistResult<Comment>;

    /// Update a comment's content
    async fn update_comment(&self, comment_id: u64, content: &str) -> TodoistResult<()>;

    /// Delete a comment
    async fn delete_comment(&self, comment_id: u64) -> TodoistResult<()>;
}

#[async_trait]
impl Comments for TodoistClient {
    async fn get_all_comments(&self, thread: CommentThread) -> TodoistResult<Vec<Comment>> {
        let thread = thread.validated()?;
        let query = [(thread.query_key(), thread.id().to_string())];
        let response = self.get("comments", &query).await?;
        let comments = self.read_json(response).await?;
        Ok(comments.unwrap_or_default())
    }

    async fn create_comment(
        &self,
        thread: CommentThread,
        content: &str,
    ) -> TodoistResult<Comment> {
        let thread = thread.validated()?;
        let content = validate_text(content, "comment content")?;
        let response = self
            .post("comments", &NewComment::for_thread(thread, &content))
            .await?;
        self.read_json(response)
            .await?
            .ok_or_else(|| TodoistError::InvalidResponse("expected a comment payload".into()))
    }

    async fn get_comment(&self, comment_id: u64) -> TodoistResult<Comment> {
        validate_id(comment_id, "comment ID")?;
        let response = self.get(&format!("comments/{}", comment_id), &[]).await?;
        self.read_json(response)
            .await?
            .ok_or_else(|| TodoistError::InvalidResponse("expected a comment payload".into()))
    }

    async fn update_comment(&self, comment_id: u64, content: &str) -> TodoistResult<()> {
        validate_id(comment_id, "comment ID")?;
        let content = validate_text(content, "comment content")?;
        let response = self
            .post(
                &format!("comments/{}", comment_id),
                &CommentContent { content: &content },
            )
            .await?;
        self.expect_no_content(response).await
    }

    async fn delete_comment(&self, comment_id: u64) -> TodoistResult<()> {
        validate_id(comment_id, "comment ID")?;
        let response = self.delete(&format!("comments/{}", comment_id)).await?;
        self.expect_no_content(response).await
    }
}
