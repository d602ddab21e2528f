//! Pipeline orchestration for extract, transform and load stages

use super::{Extractor, Loader, Transformer};
use eyre::Result;

/// Pipeline that runs an extractor, a transformer and a loader in sequence
///
/// # Type Parameters
/// - `E`: Extractor type
/// - `T`: Transformer type (must transform from E::Item)
/// - `L`: Loader type (must load T::Output)
///
/// # Example
/// ```no_run
/// use gha_workflows::etl::Pipeline;
/// use gha_workflows::storage::{WorkflowReader, WorkflowWriter};
/// use gha_workflows::transform::WorkflowFormatter;
///
/// # async fn example() -> eyre::Result<()> {
/// let pipeline = Pipeline::new(
///     WorkflowReader::new(".github/workflows-src"),
///     WorkflowFormatter::new(None),
///     WorkflowWriter::new(".github/workflows")?,
/// );
///
/// let count = pipeline.run().await?;
/// println!("Compiled {} workflows", count);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<E, T, L> {
    extractor: E,
    transformer: T,
    loader: L,
}

impl<E, T, L> Pipeline<E, T, L>
where
    E: Extractor,
    T: Transformer<Input = E::Item>,
    L: Loader<Item = T::Output>,
{
    /// Create a new pipeline
    pub fn new(extractor: E, transformer: T, loader: L) -> Self {
        Self {
            extractor,
            transformer,
            loader,
        }
    }

    /// Run the pipeline
    ///
    /// Returns the number of items loaded. Any stage failing aborts the run.
    pub async fn run(&self) -> Result<usize> {
        log::debug!("Extracting from source...");
        let items = self.extractor.extract().await?;
        log::debug!("Extracted {} items", items.len());

        if items.is_empty() {
            log::warn!("Nothing to compile, source is empty");
            return Ok(0);
        }

        log::debug!("Transforming items...");
        let transformed = self.transformer.transform_many(items)?;

        log::debug!("Loading to destination...");
        let count = self.loader.load(transformed).await?;
        log::debug!("Loaded {} items", count);

        Ok(count)
    }
}
