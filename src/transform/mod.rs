//! Workflow transformations
//!
//! Comment headers and the YAML re-serialization that turns an authored
//! workflow into the compiled one.

mod header;
mod yaml_formatter;

pub use header::Header;
pub use yaml_formatter::WorkflowFormatter;
