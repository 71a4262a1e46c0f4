//! Markdown document generator for component specifications.
//!
//! Produces an MDX page made of front matter, a status banner, the example
//! config views, a field reference and the annotated examples.

#![allow(
    clippy::format_push_string,
    reason = "markdown templating uses format! for clarity"
)]

mod fields;
mod sections;

use serde::Serialize;
use tracing::debug;

use crate::config::RenderConfig;
use crate::error::DocsResult;
use crate::example::generate_example_configs;
use crate::spec::ComponentSpec;

/// Renders the documentation page of `spec`.
///
/// `example` is the component's full example config; it feeds the common and
/// advanced config views shown near the top of the page. The field reference
/// is placed ahead of the examples when it lists at most
/// `config.inline_field_limit` fields and after them otherwise.
///
/// # Errors
///
/// Returns [`crate::DocsError::Validation`] when the summary contains an empty
/// line or a field is declared twice, [`crate::DocsError::Encoding`] when
/// `example` cannot be encoded, and [`crate::DocsError::Serialization`] when
/// YAML output fails.
pub fn render_markdown<T>(
    spec: &ComponentSpec,
    example: &T,
    config: &RenderConfig,
) -> DocsResult<String>
where
    T: Serialize + ?Sized,
{
    spec.validate()?;

    let configs = generate_example_configs(
        spec.component_type,
        &spec.config,
        config.nest,
        example,
        &config.examples,
    )?;
    let fields = spec.config.flatten_children_for_docs()?;
    let inline_fields = !fields.is_empty() && fields.len() <= config.inline_field_limit;
    debug!(
        component = %spec.name,
        component_type = %spec.component_type,
        fields = fields.len(),
        inline_fields,
        "rendering component markdown"
    );

    let mut content = String::with_capacity(4096);
    content.push_str(&sections::front_matter(spec)?);
    content.push_str(sections::GENERATED_NOTICE);
    content.push_str(&sections::status_banner(spec.status));
    content.push_str(&sections::introduction(&spec.summary, &spec.version));
    content.push_str(&sections::config_section(&configs));
    content.push_str(&sections::description_section(&spec.description));

    if inline_fields {
        content.push_str(&fields::fields_section(&fields));
    }
    content.push_str(&sections::examples_section(&spec.examples));
    if fields.len() > config.inline_field_limit {
        content.push_str(&fields::fields_section(&fields));
    }

    content.push_str(&sections::footnotes_section(&spec.footnotes));
    Ok(content)
}

impl ComponentSpec {
    /// Renders this component's documentation page as UTF-8 bytes.
    ///
    /// Uses [`RenderConfig::default`] apart from `nest`.
    ///
    /// # Errors
    ///
    /// See [`render_markdown`].
    pub fn as_markdown<T>(&self, nest: bool, example: &T) -> DocsResult<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let config = RenderConfig {
            nest,
            ..RenderConfig::default()
        };
        render_markdown(self, example, &config).map(String::into_bytes)
    }
}
