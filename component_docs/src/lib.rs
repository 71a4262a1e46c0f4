//! Documentation generator for pluggable pipeline components.
//!
//! A component is described by a [`ComponentSpec`]: its name, type, status,
//! prose and a tree of [`FieldSpec`] entries for its configuration. From a
//! spec and a full example config this crate produces two things:
//!
//! - [`generate_example_configs`] renders the example twice as YAML, once
//!   with only the common fields and once with every non-deprecated field.
//!   Keys follow declaration order in both views.
//! - [`ComponentSpec::as_markdown`] and [`render_markdown`] assemble a
//!   complete MDX reference page around those views.
//!
//! ```rust
//! use component_docs::{ComponentSpec, ComponentType, FieldSpec};
//! use serde_json::json;
//!
//! let spec = ComponentSpec::new(
//!     "memory",
//!     ComponentType::Cache,
//!     FieldSpec::root([
//!         FieldSpec::string("default_ttl").with_default("5m"),
//!         FieldSpec::bool("compaction").advanced(),
//!     ]),
//! )
//! .with_summary("Stores key/value pairs in memory.");
//!
//! let page = spec.as_markdown(true, &json!({"compaction": true, "default_ttl": "5m"}))?;
//! assert!(String::from_utf8_lossy(&page).contains("cache:\n  default_ttl: 5m\n"));
//! # Ok::<(), component_docs::DocsError>(())
//! ```

pub mod config;
mod error;
pub mod example;
mod markdown;
pub mod spec;

pub use config::RenderConfig;
pub use error::{DocsError, DocsResult};
pub use example::{
    ConfigPair, ExampleNode, ExampleOptions, FieldFilter, build_ordered_example,
    generate_example_configs,
};
pub use markdown::render_markdown;
pub use spec::{
    AnnotatedExample, ComponentSpec, ComponentType, DocField, FieldKind, FieldSpec, FieldType,
    Status,
};
