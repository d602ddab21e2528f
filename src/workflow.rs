//! Workflow items passed between pipeline stages

use std::path::{Path, PathBuf};

/// A workflow file as read from disk, before any parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSource {
    /// Path the workflow was read from
    pub path: PathBuf,
    /// Raw file contents
    pub raw: String,
}

impl WorkflowSource {
    pub fn new(path: impl AsRef<Path>, raw: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            raw: raw.into(),
        }
    }
}

/// A compiled workflow ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWorkflow {
    /// Path of the source it was compiled from, used to name the output file
    pub source: PathBuf,
    /// Final file contents, always ending in a single newline
    pub text: String,
}
