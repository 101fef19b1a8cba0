//! Project endpoints

use async_trait::async_trait;
use serde::Serialize;

use crate::api::CreateProjectArgs;
use crate::client::TodoistClient;
use crate::error::{TodoistError, TodoistResult};
use crate::types::Project;
use crate::validation::{validate_id, validate_text};

#[derive(Serialize)]
struct ProjectName<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct NewProject<'a> {
    name: &'a str,
    #[serde(flatten)]
    args: &'a CreateProjectArgs,
}

/// Project operations
#[async_trait]
pub trait Projects {
    /// Get all projects. An empty answer from the service yields an empty list.
    async fn get_all_projects(&self) -> TodoistResult<Vec<Project>>;

    /// Create a new project
    async fn create_project(
        &self,
        name: &str,
        args: &CreateProjectArgs,
    ) -> TodoistResult<Project>;

    /// Get a single project
    async fn get_project(&self, project_id: u64) -> TodoistResult<Project>;

    /// Update (rename) a project
    async fn update_project(&self, project_id: u64, name: &str) -> TodoistResult<()>;

    /// Alias for [`update_project`](Projects::update_project)
    async fn rename_project(&self, project_id: u64, name: &str) -> TodoistResult<()> {
        self.update_project(project_id, name).await
    }

    /// Delete a project
    async fn delete_project(&self, project_id: u64) -> TodoistResult<()>;
}

#[async_trait]
impl Projects for TodoistClient {
    async fn get_all_projects(&self) -> TodoistResult<Vec<Project>> {
        let response = self.get("projects", &[]).await?;
        let projects = self.read_json(response).await?;
        Ok(projects.unwrap_or_default())
    }

    async fn create_project(
        &self,
        name: &str,
        args: &CreateProjectArgs,
    ) -> TodoistResult<Project> {
        let name = validate_text(name, "project name")?;
        let response = self
            .post("projects", &NewProject { name: &name, args })
            .await?;
        self.read_json(response)
            .await?
            .ok_or_else(|| TodoistError::InvalidResponse("expected a project payload".into()))
    }

    async fn get_project(&self, project_id: u64) -> TodoistResult<Project> {
        validate_id(project_id, "project ID")?;
        let response = self.get(&format!("projects/{}", project_id), &[]).await?;
        self.read_json(response)
            .await?
            .ok_or_else(|| TodoistError::InvalidResponse("expected a project payload".into()))
    }

    async fn update_project(&self, project_id: u64, name: &str) -> TodoistResult<()> {
        validate_id(project_id, "project ID")?;
        let name = validate_text(name, "project name")?;
        let response = self
            .post(
                &format!("projects/{}", project_id),
                &ProjectName { name: &name },
            )
            .await?;
        self.expect_no_content(response).await
    }

    async fn delete_project(&self, project_id: u64) -> TodoistResult<()> {
        validate_id(project_id, "project ID")?;
        let response = self.delete(&format!("projects/{}", project_id)).await?;
        self.expect_no_content(response).await
    }
}
