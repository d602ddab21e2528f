//! Settings resolution for a compile run
//!
//! Settings come from command-line flags and, when present, the `gha-workflows`
//! section of the project's `package.json`. Manifest values win key by key.

use crate::storage::PackageManifest;
use crate::transform::Header;
use std::fmt;
use std::path::{Path, PathBuf};

/// Settings as given, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub header: Option<Header>,
}

/// Settings that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSettings {
    /// Existing workflow file or directory
    pub source: PathBuf,
    /// Output file or directory, created when missing
    pub destination: PathBuf,
    pub header: Option<Header>,
}

/// Fatal problems with the resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The source is unset or does not exist
    SourceNotFound(Option<PathBuf>),
    /// No destination was given anywhere
    MissingDestination,
}

impl SettingsError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SettingsError::SourceNotFound(_) => 1,
            SettingsError::MissingDestination => 2,
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::SourceNotFound(Some(path)) => {
                write!(f, "Source file/folder not found: {}", path.display())
            }
            SettingsError::SourceNotFound(None) => {
                write!(f, "Source file/folder not found: no source given")
            }
            SettingsError::MissingDestination => {
                write!(f, "A destination must be specified, none given.")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

impl Settings {
    /// Build settings from command-line values
    pub fn from_cli(
        source: Option<PathBuf>,
        destination: Option<PathBuf>,
        comments: Option<String>,
    ) -> Self {
        Self {
            source,
            destination,
            header: comments.map(Header::Text),
        }
    }

    /// Layer manifest values over these settings
    ///
    /// Each key set in the manifest replaces the corresponding value here.
    pub fn overlay(self, manifest: PackageManifest) -> Self {
        Self {
            source: manifest.source.or(self.source),
            destination: manifest.destination.or(self.destination),
            header: manifest.comments.or(self.header),
        }
    }

    /// Check the source exists and a destination was given
    ///
    /// The source is checked first, so a run missing both reports the source.
    pub fn validate(self) -> Result<ValidatedSettings, SettingsError> {
        let source = match self.source {
            Some(path) if path.exists() => path,
            other => return Err(SettingsError::SourceNotFound(other)),
        };

        let destination = self
            .destination
            .ok_or(SettingsError::MissingDestination)?;

        Ok(ValidatedSettings {
            source,
            destination,
            header: self.header,
        })
    }
}

impl ValidatedSettings {
    /// Whether the source is a directory of workflows
    pub fn is_directory_source(&self) -> bool {
        self.source.is_dir()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
