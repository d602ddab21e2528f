//! Extract, transform and load abstractions
//!
//! Workflow compilation is a three-stage pass: an [`Extractor`] reads workflow
//! sources, a [`Transformer`] renders each one, and a [`Loader`] writes the
//! results out. [`Pipeline`] wires the three together.

mod extract;
mod load;
mod pipeline;
mod transform;

pub use extract::Extractor;
pub use load::Loader;
pub use pipeline::Pipeline;
pub use transform::Transformer;
