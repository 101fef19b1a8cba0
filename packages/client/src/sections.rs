//! Section endpoints

use async_trait::async_trait;
use serde::Serialize;

use crate::api::CreateSectionArgs;
use crate::client::TodoistClient;
use crate::error::{TodoistError, TodoistResult};
use crate::types::Section;
use crate::validation::{validate_id, validate_text};

#[derive(Serialize)]
struct SectionName<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct NewSection<'a> {
    name: &'a str,
    project_id: u64,
    #[serde(flatten)]
    args: &'a CreateSectionArgs,
}

/// Section operations
#[async_trait]
pub trait Sections {
    /// Get all sections, optionally limited to one project
    async fn get_all_sections(&self, project_id: Option<u64>) -> TodoistResult<Vec<Section>>;

    /// Create a new section inside a project
    async fn create_section(
        &self,
        name: &str,
        project_id: u64,
        args: &CreateSectionArgs,
    ) -> TodoistResult<Section>;

    /// Get a single section
    async fn get_section(&self, section_id: u64) -> TodoistResult<Section>;

    /// Update (rename) a section
    async fn update_section(&self, section_id: u64, name: &str) -> TodoistResult<()>;

    /// Delete a section
    async fn delete_section(&self, section_id: u64) -> TodoistResult<()>;
}

#[async_trait]
impl Sections for TodoistClient {
    async fn get_all_sections(&self, project_id: Option<u64>) -> TodoistResult<Vec<Section>> {
        let mut query = Vec::new();
        if let Some(project_id) = project_id {
            validate_id(project_id, "project ID")?;
            query.push(("project_id", project_id.to_string()));
        }
        let response = self.get("sections", &query).await?;
        let sections = self.read_json(response).await?;
        Ok(sections.unwrap_or_default())
    }

    async fn create_section(
        &self,
        name: &str,
        project_id: u64,
        args: &CreateSectionArgs,
    ) -> TodoistResult<Section> {
        let name = validate_text(name, "section name")?;
        validate_id(project_id, "project ID")?;
        let body = NewSection {
            name: &name,
            project_id,
            args,
        };
        let response = self.post("sections", &body).await?;
        self.read_json(response)
            .await?
            .ok_or_else(|| TodoistError::InvalidResponse("expected a section payload".into()))
    }

    async fn get_section(&self, section_id: u64) -> TodoistResult<Section> {
        validate_id(section_id, "section ID")?;
        let response = self.get(&format!("sections/{}", section_id), &[]).await?;
        self.read_json(response)
            .await?
            .ok_or_else(|| TodoistError::InvalidResponse("expected a section payload".into()))
    }

    async fn update_section(&self, section_id: u64, name: &str) -> TodoistResult<()> {
        validate_id(section_id, "section ID")?;
        let name = validate_text(name, "section name")?;
        let response = self
            .post(
                &format!("sections/{}", section_id),
                &SectionName { name: &name },
            )
            .await?;
        self.expect_no_content(response).await
    }

    async fn delete_section(&self, section_id: u64) -> TodoistResult<()> {
        validate_id(section_id, "section ID")?;
        let response = self.delete(&format!("sections/{}", section_id)).await?;
        self.expect_no_content(response).await
    }
}
