//! Label endpoints

use async_trait::async_trait;
use serde::Serialize;

use crate::client::TodoistClient;
use crate::error::{TodoistError, TodoistResult};
use crate::types::Label;
use crate::validation::{validate_id, validate_text};

#[derive(Serialize)]
struct LabelName<'a> {
    name: &'a str,
}

/// Label operations
#[async_trait]
pub trait Labels {
    /// Get all labels. An empty answer from the service yields an empty list.
    async fn get_all_labels(&self) -> TodoistResult<Vec<Label>>;

    /// Create a new label
    async fn create_label(&self, name: &str) -> TodoistResult<Label>;

    /// Get a single label
    async fn get_label(&self, label_id: u64) -> TodoistResult<Label>;

    /// Update (rename) a label
    async fn update_label(&self, label_id: u64, name: &str) -> TodoistResult<()>;

    /// Alias for [`update_label`](Labels::update_label)
    async fn rename_label(&self, label_id: u64, name: &str) -> TodoistResult<()> {
        self.update_label(label_id, name).await
    }

    /// Delete a label
    async fn delete_label(&self, label_id: u64) -> TodoistResult<()>;
}

#[async_trait]
impl Labels for TodoistClient {
    async fn get_all_labels(&self) -> TodoistResult<Vec<Label>> {
        let response = self.get("labels", &[]).await?;
        let labels = self.read_json(response).await?;
        Ok(labels.unwrap_or_default())
    }

    async fn create_label(&self, name: &str) -> TodoistResult<Label> {
        let name = validate_text(name, "label name")?;
        let response = self.post("labels", &LabelName { name: &name }).await?;
        self.read_json(response)
            .await?
            .ok_or_else(|| TodoistError::InvalidResponse("expected a label payload".into()))
    }

    async fn get_label(&self, label_id: u64) -> TodoistResult<Label> {
        validate_id(label_id, "label ID")?;
        let response = self.get(&format!("labels/{}", label_id), &[]).await?;
        self.read_json(response)
            .await?
            .ok_or_else(|| TodoistError::InvalidResponse("expected a label payload".into()))
    }

    async fn update_label(&self, label_id: u64, name: &str) -> TodoistResult<()> {
        validate_id(label_id, "label ID")?;
        let name = validate_text(name, "label name")?;
        let response = self
            .post(&format!("labels/{}", label_id), &LabelName { name: &name })
            .await?;
        self.expect_no_content(response).await
    }

    async fn delete_label(&self, label_id: u64) -> TodoistResult<()> {
        validate_id(label_id, "label ID")?;
        let response = self.delete(&format!("labels/{}", label_id)).await?;
        self.expect_no_content(response).await
    }
}
