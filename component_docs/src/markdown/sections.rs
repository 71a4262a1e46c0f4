//! Section content generators for component documents.
//!
//! Each function returns a complete block, including its trailing blank
//! line, or an empty string when the section has nothing to show.

use crate::error::{DocsError, DocsResult};
use crate::example::ConfigPair;
use crate::spec::{AnnotatedExample, ComponentSpec, Status};

/// Comment and imports emitted after the front matter.
pub const GENERATED_NOTICE: &str = "<!--
     THIS FILE IS AUTOGENERATED!

     To make changes please edit the component specification it was generated from.
-->

import Tabs from '@theme/Tabs';
import TabItem from '@theme/TabItem';

";

/// Generates the YAML front matter block.
pub fn front_matter(spec: &ComponentSpec) -> DocsResult<String> {
    let mut output = format!(
        "---\ntitle: {}\ntype: {}\nstatus: {}\n",
        spec.name, spec.component_type, spec.status
    );
    if !spec.categories.is_empty() {
        let categories = serde_json::to_string(&spec.categories)
            .map_err(|err| DocsError::Encoding {
                source: <serde_yaml::Error as serde::ser::Error>::custom(err),
            })?;
        output.push_str(&format!("categories: {categories}\n"));
    }
    output.push_str("---\n\n");
    Ok(output)
}

/// Generates the admonition warning readers about an unstable component.
pub fn status_banner(status: Status) -> String {
    let (kind, title, body) = match status {
        Status::Stable => return String::new(),
        Status::Beta => (
            "caution",
            "BETA",
            "This component is mostly stable but breaking changes could still be made outside of major version releases if a fundamental problem with the component is found.",
        ),
        Status::Experimental => (
            "caution",
            "EXPERIMENTAL",
            "This component is experimental and therefore subject to change or removal outside of major version releases.",
        ),
        Status::Deprecated => (
            "warning",
            "DEPRECATED",
            "This component is deprecated and will be removed in the next major version release. Please consider moving onto [alternative components](#alternatives).",
        ),
    };
    format!(":::{kind} {title}\n{body}\n:::\n\n")
}

/// Generates the summary paragraph and the version note.
pub fn introduction(summary: &str, version: &str) -> String {
    let mut output = String::new();
    if !summary.is_empty() {
        output.push_str(summary.trim_end());
        output.push_str("\n\n");
    }
    if !version.is_empty() {
        output.push_str(&format!("Introduced in version {version}.\n\n"));
    }
    output
}

/// Generates the example config block, tabbed when the views differ.
pub fn config_section(configs: &ConfigPair) -> String {
    if configs.is_uniform() {
        return format!(
            "{}\n",
            yaml_block("yml", "# Config fields, showing default values", &configs.common)
        );
    }

    let mut output = String::from(concat!(
        "<Tabs defaultValue=\"common\" values={[\n",
        "  { label: 'Common', value: 'common', },\n",
        "  { label: 'Advanced', value: 'advanced', },\n",
        "]}>\n\n",
    ));
    output.push_str("<TabItem value=\"common\">\n\n");
    output.push_str(&yaml_block(
        "yml",
        "# Common config fields, showing default values",
        &configs.common,
    ));
    output.push_str("\n</TabItem>\n<TabItem value=\"advanced\">\n\n");
    output.push_str(&yaml_block(
        "yml",
        "# All config fields, showing default values",
        &configs.advanced,
    ));
    output.push_str("\n</TabItem>\n</Tabs>\n\n");
    output
}

/// Generates the long form description.
pub fn description_section(description: &str) -> String {
    let body = strip_leading_newline(description).trim_end();
    if body.is_empty() {
        return String::new();
    }
    format!("{body}\n\n")
}

/// Generates the tabbed examples section.
pub fn examples_section(examples: &[AnnotatedExample]) -> String {
    let Some(first) = examples.first() else {
        return String::new();
    };

    let mut output = format!(
        "## Examples\n\n<Tabs defaultValue=\"{}\" values={{[\n",
        escape_attribute(&first.title)
    );
    for example in examples {
        let label = escape_single_quoted(&example.title);
        output.push_str(&format!("  {{ label: '{label}', value: '{label}', }},\n"));
    }
    output.push_str("]}>\n\n");

    for example in examples {
        output.push_str(&format!(
            "<TabItem value=\"{}\">\n\n",
            escape_attribute(&example.title)
        ));
        let summary = example.summary.trim();
        if !summary.is_empty() {
            output.push_str(summary);
            output.push_str("\n\n");
        }
        let config = strip_leading_newline(&example.config);
        if !config.trim().is_empty() {
            output.push_str(&format!("```yaml\n{}```\n\n", with_trailing_newline(config)));
        }
        output.push_str("</TabItem>\n");
    }
    output.push_str("</Tabs>\n\n");
    output
}

/// Generates the closing footnotes.
pub fn footnotes_section(footnotes: &str) -> String {
    let body = strip_leading_newline(footnotes).trim_end();
    if body.is_empty() {
        return String::new();
    }
    format!("{body}\n")
}

/// Wraps YAML in a fenced block opened by a comment line.
pub fn yaml_block(lang: &str, comment: &str, yaml: &str) -> String {
    format!("```{lang}\n{comment}\n{}```\n", with_trailing_newline(yaml))
}

fn strip_leading_newline(text: &str) -> &str {
    text.strip_prefix('\n').unwrap_or(text)
}

fn with_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_owned()
    } else {
        format!("{text}\n")
    }
}

fn escape_attribute(text: &str) -> String {
    text.replace('"', "&quot;")
}

fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}
