//! Project manifest (`package.json`) settings
//!
//! A project can pin its settings under the `gha-workflows` key:
//!
//! ```json
//! {
//!   "name": "my-project",
//!   "gha-workflows": {
//!     "source": ".github/workflows-src",
//!     "destination": ".github/workflows",
//!     "comments": ["Generated by gha-workflows", "Edit .github/workflows-src instead"]
//!   }
//! }
//! ```

use crate::transform::Header;
use eyre::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest file name searched for
pub const MANIFEST_FILE: &str = "package.json";

/// Key holding this tool's settings inside the manifest
pub const MANIFEST_KEY: &str = "gha-workflows";

/// The `gha-workflows` section of a project manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub comments: Option<Header>,
}

impl PackageManifest {
    /// Find the nearest manifest, starting at `start` and walking up to the root
    pub fn find(start: impl AsRef<Path>) -> Option<PathBuf> {
        start
            .as_ref()
            .ancestors()
            .map(|dir| dir.join(MANIFEST_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Read the `gha-workflows` section from a manifest file
    ///
    /// A manifest without the section yields an empty (all `None`) section.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse manifest: {}", path.display()))
    }

    /// Parse the `gha-workflows` section out of manifest JSON
    pub fn parse(content: &str) -> Result<Self> {
        let mut manifest: serde_json::Value =
            serde_json::from_str(content).context("Invalid JSON")?;

        match manifest.get_mut(MANIFEST_KEY).map(serde_json::Value::take) {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(section) => serde_json::from_value(section)
                .with_context(|| format!("Invalid \"{}\" section", MANIFEST_KEY)),
        }
    }

    /// Discover and read the nearest manifest, if there is one
    pub fn discover(start: impl AsRef<Path>) -> Result<Option<Self>> {
        match Self::find(start) {
            Some(path) => {
                log::debug!("Using manifest {}", path.display());
                Self::read(&path).map(Some)
            }
            None => {
                log::debug!("No {} found", MANIFEST_FILE);
                Ok(None)
            }
        }
    }
}
