//! Transformer trait for mapping items between pipeline stages

use eyre::Result;

/// Transformer trait for transforming items
///
/// # Example
/// ```
/// use gha_workflows::etl::Transformer;
/// use eyre::Result;
///
/// struct Trim;
///
/// impl Transformer for Trim {
///     type Input = String;
///     type Output = String;
///
///     fn transform(&self, input: Self::Input) -> Result<Self::Output> {
///         Ok(input.trim().to_string())
///     }
/// }
///
/// let out = Trim.transform_many(vec![" a ".into(), "b\n".into()]).unwrap();
/// assert_eq!(out, vec!["a", "b"]);
/// ```
pub trait Transformer: Send + Sync {
    /// Input item type
    type Input: Send;

    /// Output item type after transformation
    type Output: Send;

    /// Transform a single item
    ///
    /// # Errors
    /// Returns an error if the item cannot be transformed
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;

    /// Transform multiple items, stopping at the first failure
    fn transform_many(&self, inputs: Vec<Self::Input>) -> Result<Vec<Self::Output>> {
        inputs.into_iter().map(|i| self.transform(i)).collect()
    }
}
