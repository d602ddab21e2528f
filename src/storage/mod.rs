//! File system storage operations
//!
//! This module handles all file I/O:
//! - Reading workflow sources from a file or directory
//! - Writing compiled workflows to the destination
//! - Discovering settings in the project's `package.json`

mod directory;
mod manifest;

pub use directory::{WorkflowReader, WorkflowWriter};
pub use manifest::{MANIFEST_FILE, MANIFEST_KEY, PackageManifest};
