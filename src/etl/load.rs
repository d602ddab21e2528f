//! Loader trait for writing items to a destination

use eyre::Result;

/// Loader trait for loading items to a destination
///
/// # Example
/// ```no_run
/// use gha_workflows::etl::Loader;
/// use eyre::Result;
/// use std::path::PathBuf;
///
/// struct FileLoader {
///     target: PathBuf,
/// }
///
/// impl Loader for FileLoader {
///     type Item = String;
///
///     async fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
///         std::fs::write(&self.target, items.concat())?;
///         Ok(items.len())
///     }
/// }
/// ```
pub trait Loader: Send + Sync {
    /// The type of items to load
    type Item: Send;

    /// Load items to the destination
    ///
    /// Returns the number of items written
    fn load(&self, items: Vec<Self::Item>)
    -> impl std::future::Future<Output = Result<usize>> + Send;
}
