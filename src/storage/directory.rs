//! Workflow files on disk

use crate::etl::{Extractor, Loader};
use crate::workflow::{RenderedWorkflow, WorkflowSource};
use eyre::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// Read workflow sources from a single file or a directory of files
pub struct WorkflowReader {
    path: PathBuf,
}

impl WorkflowReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// List the files this reader will read, sorted by name
    ///
    /// Only regular files directly inside a directory source are included.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.path.is_dir() {
            return Ok(vec![self.path.clone()]);
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.path)
            .with_context(|| format!("Failed to read directory: {}", self.path.display()))?
        {
            let path = entry
                .with_context(|| {
                    format!("Failed to read directory entry in: {}", self.path.display())
                })?
                .path();
            if path.is_file() {
                files.push(path);
            } else {
                log::debug!("Skipping {}, not a file", path.display());
            }
        }
        files.sort();

        Ok(files)
    }

    /// Read every workflow source
    pub fn read_all(&self) -> Result<Vec<WorkflowSource>> {
        self.list()?
            .into_iter()
            .map(|path| {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))?;
                Ok(WorkflowSource { path, raw })
            })
            .collect()
    }
}

impl Extractor for WorkflowReader {
    type Item = WorkflowSource;

    async fn extract(&self) -> Result<Vec<Self::Item>> {
        self.read_all()
    }
}

/// Write compiled workflows to a destination directory or file
pub struct WorkflowWriter {
    path: PathBuf,
}

impl WorkflowWriter {
    /// Create a writer, creating the destination as a directory if it does not exist
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            log::debug!("Creating destination {}", path.display());
            std::fs::create_dir_all(&path).with_context(|| {
                format!("Failed to create destination directory: {}", path.display())
            })?;
        }
        Ok(Self { path })
    }

    /// Where a workflow compiled from `source` is written
    ///
    /// A directory destination receives a file named after the source; any
    /// other destination is written directly.
    pub fn target_path(&self, source: &Path) -> PathBuf {
        match (self.path.is_dir(), source.file_name()) {
            (true, Some(name)) => self.path.join(name),
            _ => self.path.clone(),
        }
    }

    /// Write compiled workflows, returning how many were written
    pub fn write_all(&self, items: &[RenderedWorkflow]) -> Result<usize> {
        let mut count = 0;

        for item in items {
            let target = self.target_path(&item.source);
            std::fs::write(&target, &item.text)
                .with_context(|| format!("Failed to write file: {}", target.display()))?;
            log::info!(
                "Compiled {} → {}",
                item.source.display().bright_black(),
                target.display().bright_black()
            );
            count += 1;
        }

        Ok(count)
    }

    /// The destination path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Loader for WorkflowWriter {
    type Item = RenderedWorkflow;

    async fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
        self.write_all(&items)
    }
}
