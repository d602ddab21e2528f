//! Workflow YAML compiler
//!
//! Parses an authored workflow and re-serializes it as plain YAML: merge keys
//! applied, aliases written out in full, no line wrapping, and an optional
//! comment header on top.

use super::Header;
use crate::etl::Transformer;
use crate::workflow::{RenderedWorkflow, WorkflowSource};
use eyre::{Context, Result};
use serde_yaml::Value;

/// Transformer that compiles workflow sources into their final text
///
/// The output is `"{header}\n\n{yaml}"` trimmed of surrounding whitespace with
/// exactly one trailing newline, so a missing header leaves no leading blank lines.
///
/// # Example
///
/// ```
/// use gha_workflows::transform::{Header, WorkflowFormatter};
///
/// let formatter = WorkflowFormatter::new(Some(Header::from("Generated file")));
/// let text = formatter.format("name: CI\n").unwrap();
/// assert_eq!(text, "# Generated file\n\nname: CI\n");
/// ```
///
/// # Error Handling
///
/// A workflow that fails to parse is an error carrying the file path, and the
/// run stops before anything is written.
#[derive(Debug, Clone, Default)]
pub struct WorkflowFormatter {
    header: Option<Header>,
}

impl WorkflowFormatter {
    /// Create a formatter with an optional comment header
    pub fn new(header: Option<Header>) -> Self {
        Self { header }
    }

    /// Parse a YAML document and re-serialize it
    ///
    /// Merge keys (`<<`) are expanded into their surrounding mapping. The
    /// serializer never emits anchors, so aliased nodes come out in full.
    /// Input without any document (empty, or only comments) compiles to an
    /// empty string.
    pub fn compile_yaml(raw: &str) -> Result<String> {
        if serde_yaml::Deserializer::from_str(raw).next().is_none() {
            return Ok(String::new());
        }

        let mut parsed: Value = serde_yaml::from_str(raw).context("Invalid workflow YAML")?;
        Self::expand_merges(&mut parsed).context("Failed to apply YAML merge keys")?;

        serde_yaml::to_string(&parsed).context("Failed to serialize workflow YAML")
    }

    /// Apply merge keys bottom-up
    ///
    /// A merge source can itself contain `<<` (an anchor built from another
    /// anchor), so nested values are merged before the mapping that holds them.
    fn expand_merges(value: &mut Value) -> Result<(), serde_yaml::Error> {
        match value {
            Value::Mapping(mapping) => {
                for child in mapping.values_mut() {
                    Self::expand_merges(child)?;
                }
            }
            Value::Sequence(sequence) => {
                for child in sequence.iter_mut() {
                    Self::expand_merges(child)?;
                }
            }
            Value::Tagged(tagged) => Self::expand_merges(&mut tagged.value)?,
            _ => return Ok(()),
        }

        value.apply_merge()
    }

    /// Compile raw workflow text into the final output
    pub fn format(&self, raw: &str) -> Result<String> {
        let body = Self::compile_yaml(raw)?;
        let header = self
            .header
            .as_ref()
            .map(Header::render)
            .unwrap_or_default();

        let combined = format!("{}\n\n{}", header, body);
        Ok(format!("{}\n", combined.trim()))
    }
}

impl Transformer for WorkflowFormatter {
    type Input = WorkflowSource;
    type Output = RenderedWorkflow;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        log::debug!("Compiling {}", input.path.display());
        let text = self
            .format(&input.raw)
            .with_context(|| format!("Failed to compile workflow: {}", input.path.display()))?;

        Ok(RenderedWorkflow {
            source: input.path,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKFLOW: &str = "\
name: CI
on:
  push:
    branches: [main]
jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - run: cargo test
";

    fn parse(text: &str) -> serde_yaml::Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_no_header_is_plain_yaml() {
        let formatter = WorkflowFormatter::new(None);
        let output = formatter.format(WORKFLOW).unwrap();

        let expected = serde_yaml::to_string(&parse(WORKFLOW)).unwrap();
        assert_eq!(output, format!("{}\n", expected.trim()));
        assert!(!output.starts_with('\n'));
        assert!(output.ends_with('\n'));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn test_header_prepended_with_blank_line() {
        let formatter = WorkflowFormatter::new(Some(Header::from("a\nb")));
        let output = formatter.format(WORKFLOW).unwrap();

        assert!(output.starts_with("# a\n# b\n\n"));
        let body = output.strip_prefix("# a\n# b\n\n").unwrap();
        assert_eq!(parse(body), parse(WORKFLOW));
    }

    #[test]
    fn test_empty_header_behaves_like_none() {
        let with_empty = WorkflowFormatter::new(Some(Header::from(""))).format(WORKFLOW);
        let without = WorkflowFormatter::new(None).format(WORKFLOW);
        assert_eq!(with_empty.unwrap(), without.unwrap());
    }

    #[test]
    fn test_roundtrip_preserves_content() {
        let output = WorkflowFormatter::new(Some(Header::from("generated")))
            .format(WORKFLOW)
            .unwrap();
        assert_eq!(parse(&output), parse(WORKFLOW));
    }

    #[test]
    fn test_idempotent() {
        let formatter = WorkflowFormatter::new(Some(Header::from("generated")));
        let first = formatter.format(WORKFLOW).unwrap();
        let second = WorkflowFormatter::new(None).format(&first).unwrap();
        let body = first.strip_prefix("# generated\n\n").unwrap();
        assert_eq!(second, body);
    }

    #[test]
    fn test_aliases_expanded() {
        let input = "\
defaults: &defaults
  runs-on: ubuntu-latest
jobs:
  build: *defaults
";
        let output = WorkflowFormatter::new(None).format(input).unwrap();
        assert!(!output.contains('&'));
        assert!(!output.contains('*'));

        let value = parse(&output);
        assert_eq!(value["jobs"]["build"]["runs-on"], "ubuntu-latest");
    }

    #[test]
    fn test_merge_keys_applied() {
        let input = "\
x-job: &job
  runs-on: ubuntu-latest
  timeout-minutes: 10
jobs:
  lint:
    <<: *job
    timeout-minutes: 5
";
        let output = WorkflowFormatter::new(None).format(input).unwrap();
        assert!(!output.contains("<<"));

        let value = parse(&output);
        assert_eq!(value["jobs"]["lint"]["runs-on"], "ubuntu-latest");
        assert_eq!(value["jobs"]["lint"]["timeout-minutes"], 5);
    }

    #[test]
    fn test_nested_merge_keys_applied() {
        let input = "\
base: &base
  runs-on: ubuntu-latest
mid: &mid
  <<: *base
  timeout-minutes: 10
jobs:
  lint:
    <<: *mid
    name: lint
";
        let output = WorkflowFormatter::new(None).format(input).unwrap();
        assert!(!output.contains("<<"), "{}", output);

        let value = parse(&output);
        let lint = &value["jobs"]["lint"];
        assert_eq!(lint["name"], "lint");
        assert_eq!(lint["runs-on"], "ubuntu-latest");
        assert_eq!(lint["timeout-minutes"], 10);
        assert_eq!(value["mid"]["runs-on"], "ubuntu-latest");
    }

    #[test]
    fn test_merge_keys_inside_sequences() {
        let input = "\
step: &step
  shell: bash
steps:
  - <<: *step
    run: make
";
        let output = WorkflowFormatter::new(None).format(input).unwrap();
        assert!(!output.contains("<<"));
        assert_eq!(parse(&output)["steps"][0]["shell"], "bash");
    }

    #[test]
    fn test_empty_file_compiles_to_empty_body() {
        let formatter = WorkflowFormatter::new(None);
        assert_eq!(formatter.format("").unwrap(), "\n");
        assert_eq!(formatter.format("# comment only\n").unwrap(), "\n");
    }

    #[test]
    fn test_empty_file_keeps_header() {
        let formatter = WorkflowFormatter::new(Some(Header::from("a\nb")));
        assert_eq!(formatter.format("").unwrap(), "# a\n# b\n");
        assert_eq!(formatter.format("# comment only\n").unwrap(), "# a\n# b\n");
    }

    #[test]
    fn test_long_lines_not_wrapped() {
        let command = format!("echo {}", "word ".repeat(60).trim_end());
        let input = format!("steps:\n  - run: {}\n", command);
        let output = WorkflowFormatter::new(None).format(&input).unwrap();

        assert!(output.lines().any(|line| line.contains(&command)));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let result = WorkflowFormatter::new(None).format("jobs: [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_transform_keeps_source_path() {
        let formatter = WorkflowFormatter::new(None);
        let rendered = formatter
            .transform(WorkflowSource::new("src/ci.yml", "name: CI\n"))
            .unwrap();
        assert_eq!(rendered.source, std::path::PathBuf::from("src/ci.yml"));
        assert_eq!(rendered.text, "name: CI\n");
    }

    #[test]
    fn test_transform_error_names_file() {
        let formatter = WorkflowFormatter::new(None);
        let err = formatter
            .transform(WorkflowSource::new("broken.yml", "a: [b"))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("broken.yml"));
    }
}
