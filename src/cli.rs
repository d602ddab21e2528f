//! CLI helper functions

use crate::{
    etl::Pipeline,
    settings::{Settings, ValidatedSettings},
    storage::{PackageManifest, WorkflowReader, WorkflowWriter},
    transform::WorkflowFormatter,
};
use eyre::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// Resolve settings from flags and the nearest `package.json` above `working_dir`
pub fn resolve_settings(cli: Settings, working_dir: impl AsRef<Path>) -> Result<Settings> {
    Ok(match PackageManifest::discover(working_dir)? {
        Some(manifest) => cli.overlay(manifest),
        None => cli,
    })
}

/// Compile workflows from the source to the destination
///
/// Pipeline: WorkflowReader → WorkflowFormatter → WorkflowWriter
///
/// Returns the number of workflow files written.
pub async fn compile_workflows(settings: &ValidatedSettings) -> Result<usize> {
    log::info!(
        "Compiling {} {} into {}",
        match settings.is_directory_source() {
            true => "directory",
            false => "file",
        }
        .cyan(),
        settings.source().display().bright_black(),
        settings.destination().display().bright_black()
    );

    let reader = WorkflowReader::new(settings.source());
    let formatter = WorkflowFormatter::new(settings.header.clone());
    let writer = WorkflowWriter::new(settings.destination())?;

    let count = Pipeline::new(reader, formatter, writer).run().await?;

    log::info!("✓ Compiled {} workflow(s)", count.cyan());
    Ok(count)
}
