//! Extractor trait for reading items from a source

use eyre::Result;

/// Extractor trait for extracting items from a source
///
/// # Example
/// ```no_run
/// use gha_workflows::etl::Extractor;
/// use eyre::Result;
/// use std::path::PathBuf;
///
/// struct ListingExtractor {
///     dir: PathBuf,
/// }
///
/// impl Extractor for ListingExtractor {
///     type Item = PathBuf;
///
///     async fn extract(&self) -> Result<Vec<Self::Item>> {
///         let mut paths = Vec::new();
///         for entry in std::fs::read_dir(&self.dir)? {
///             paths.push(entry?.path());
///         }
///         Ok(paths)
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// The type of items extracted
    type Item: Send;

    /// Extract items from the source
    ///
    /// # Errors
    /// Returns an error if the source cannot be read
    fn extract(&self) -> impl std::future::Future<Output = Result<Vec<Self::Item>>> + Send;
}
