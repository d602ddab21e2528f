//! gha-workflows
//!
//! Compiles authored GitHub Actions workflows (anchors, aliases, merge keys)
//! into the plain YAML GitHub accepts, with an optional comment header.

pub mod cli;
pub mod etl;
pub mod settings;
pub mod storage;
pub mod transform;
pub mod workflow;

// Re-exports for convenience
pub use etl::{Extractor, Loader, Pipeline, Transformer};
pub use settings::{Settings, SettingsError, ValidatedSettings};
pub use storage::{PackageManifest, WorkflowReader, WorkflowWriter};
pub use transform::{Header, WorkflowFormatter};
pub use workflow::{RenderedWorkflow, WorkflowSource};
