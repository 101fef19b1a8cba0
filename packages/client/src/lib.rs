//! Todoist REST API Client
//!
//! Exposes the operations of the Todoist REST API (projects, sections,
//! tasks, labels, comments) as method calls. Each endpoint group is a
//! capability trait implemented on [`TodoistClient`]; bring the traits you
//! need into scope and call away.
//!
//! ```no_run
//! use todoist_client::{Projects, TodoistClient};
//!
//! # async fn run() -> todoist_client::TodoistResult<()> {
//! let client = TodoistClient::new("0123456789abcdef0123456789abcdef01234567")?;
//! for project in client.get_all_projects().await? {
//!     println!("{}: {}", project.id, project.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod comments;
pub mod config;
pub mod error;
pub mod labels;
pub mod projects;
pub mod sections;
pub mod tasks;
pub mod types;
mod validation;

// Re-export commonly used types and traits
pub use api::{CreateProjectArgs, CreateSectionArgs, CreateTaskArgs, TaskFilter, UpdateTaskArgs};
pub use client::TodoistClient;
pub use comments::{CommentThread, Comments};
pub use config::ClientConfig;
pub use error::{TodoistError, TodoistResult};
pub use labels::Labels;
pub use projects::Projects;
pub use sections::Sections;
pub use tasks::Tasks;
pub use types::*;
