//! Component-level metadata: type, status and the specification itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldSpec;
use crate::error::{DocsError, DocsResult};

/// Category of a pluggable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Buffers messages between inputs and the pipeline.
    Buffer,
    /// Key/value cache resource.
    Cache,
    /// Message source.
    Input,
    /// Metrics exporter.
    Metrics,
    /// Message sink.
    Output,
    /// Message transformer.
    Processor,
    /// Rate limit resource.
    RateLimit,
    /// Byte stream scanner.
    Scanner,
    /// Tracing exporter.
    Tracer,
}

impl ComponentType {
    /// Identifier used as the nesting key of configuration examples.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buffer => "buffer",
            Self::Cache => "cache",
            Self::Input => "input",
            Self::Metrics => "metrics",
            Self::Output => "output",
            Self::Processor => "processor",
            Self::RateLimit => "rate_limit",
            Self::Scanner => "scanner",
            Self::Tracer => "tracer",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stability of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Covered by the compatibility guarantees of major releases.
    #[default]
    Stable,
    /// Mostly stable; breaking changes remain possible.
    Beta,
    /// Subject to change or removal at any time.
    Experimental,
    /// Scheduled for removal.
    Deprecated,
}

impl Status {
    /// Front matter value of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Beta => "beta",
            Self::Experimental => "experimental",
            Self::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled configuration example shown in the examples section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedExample {
    /// Tab title.
    pub title: String,
    /// Prose shown above the example config.
    #[serde(default)]
    pub summary: String,
    /// YAML config, shown verbatim.
    #[serde(default)]
    pub config: String,
}

impl AnnotatedExample {
    /// Creates an example from its title, summary and YAML config.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        config: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            config: config.into(),
        }
    }
}

/// Declarative description of one configurable component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Component name, as used in configs.
    pub name: String,
    /// Component category.
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Stability of the component.
    #[serde(default)]
    pub status: Status,
    /// Single paragraph summary.
    #[serde(default)]
    pub summary: String,
    /// Long form description in markdown.
    #[serde(default)]
    pub description: String,
    /// Categories listed in the front matter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Markdown appended at the end of the document.
    #[serde(default)]
    pub footnotes: String,
    /// Titled configuration examples.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<AnnotatedExample>,
    /// Version the component was introduced in.
    #[serde(default)]
    pub version: String,
    /// Root of the configuration field tree.
    pub config: FieldSpec,
}

impl ComponentSpec {
    /// Creates a stable component with the given configuration fields.
    #[must_use]
    pub fn new(name: impl Into<String>, component_type: ComponentType, config: FieldSpec) -> Self {
        Self {
            name: name.into(),
            component_type,
            status: Status::Stable,
            summary: String::new(),
            description: String::new(),
            categories: Vec::new(),
            footnotes: String::new(),
            examples: Vec::new(),
            version: String::new(),
            config,
        }
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends categories.
    #[must_use]
    pub fn with_categories<S: Into<String>>(
        mut self,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    /// Sets the footnotes.
    #[must_use]
    pub fn with_footnotes(mut self, footnotes: impl Into<String>) -> Self {
        self.footnotes = footnotes.into();
        self
    }

    /// Appends an annotated example.
    #[must_use]
    pub fn with_example(mut self, example: AnnotatedExample) -> Self {
        self.examples.push(example);
        self
    }

    /// Records the version the component was introduced in.
    #[must_use]
    pub fn at_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Checks the metadata preconditions of document rendering.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Validation`] when the summary contains an empty
    /// line or when two sibling fields share a name.
    pub fn validate(&self) -> DocsResult<()> {
        if self.summary.contains("\n\n") || self.summary.contains("\r\n\r\n") {
            return Err(DocsError::validation(
                self.component_type,
                &self.name,
                "summary contains empty lines",
            ));
        }
        if let Some(path) = self.config.find_duplicate_child() {
            return Err(DocsError::validation(
                self.component_type,
                &self.name,
                format!("field '{path}' is declared more than once"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected successes"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn component(summary: &str) -> ComponentSpec {
        ComponentSpec::new(
            "http_client",
            ComponentType::Output,
            FieldSpec::root([FieldSpec::string("url")]),
        )
        .with_summary(summary)
    }

    #[rstest]
    #[case("Sends messages to an HTTP server.")]
    #[case("Sends messages.\nOne per request.")]
    #[case("")]
    fn single_paragraph_summaries_pass(#[case] summary: &str) {
        assert!(component(summary).validate().is_ok());
    }

    #[rstest]
    #[case("First paragraph.\n\nSecond paragraph.")]
    #[case("First paragraph.\r\n\r\nSecond paragraph.")]
    fn blank_lines_in_summary_are_rejected(#[case] summary: &str) {
        let err = component(summary)
            .validate()
            .expect_err("summary with blank line must fail");
        assert_eq!(
            err.to_string(),
            "output component 'http_client' is invalid: summary contains empty lines"
        );
    }

    #[rstest]
    fn duplicate_fields_are_rejected() {
        let spec = ComponentSpec::new(
            "kafka",
            ComponentType::Input,
            FieldSpec::root([FieldSpec::string("topic"), FieldSpec::string("topic")]),
        );
        let err = spec.validate().expect_err("duplicate field must fail");
        assert!(matches!(err, DocsError::Validation { .. }));
    }

    #[rstest]
    #[case(ComponentType::RateLimit, "rate_limit")]
    #[case(ComponentType::Processor, "processor")]
    fn component_types_render_snake_case(#[case] ty: ComponentType, #[case] expected: &str) {
        assert_eq!(ty.to_string(), expected);
        assert_eq!(
            serde_json::to_value(ty).ok(),
            Some(serde_json::Value::from(expected))
        );
    }
}
