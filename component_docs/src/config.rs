//! Layered render configuration.
//!
//! Options are gathered with Figment from built-in defaults, an optional TOML
//! file, and `COMPONENT_DOCS_` prefixed environment variables, in that order
//! of increasing precedence. Nested keys use a double underscore, so
//! `COMPONENT_DOCS_EXAMPLES__TYPE_FIELD=kind` sets `examples.type_field`.

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::DocsResult;
use crate::example::ExampleOptions;

/// Prefix of environment variables read by [`RenderConfig::load`].
pub const ENV_PREFIX: &str = "COMPONENT_DOCS_";

/// Options controlling how a component document is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Wrap example configs under the component type.
    pub nest: bool,
    /// Largest field count whose reference is rendered above the examples.
    /// Longer references follow the examples.
    pub inline_field_limit: usize,
    /// Options passed to the example builder.
    pub examples: ExampleOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            nest: true,
            inline_field_limit: 4,
            examples: ExampleOptions::default(),
        }
    }
}

impl RenderConfig {
    /// Figment seeded with defaults and overridden by the environment.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Figment seeded with defaults, then `path`, then the environment.
    #[must_use]
    pub fn figment_with_file(path: &Utf8Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_std_path()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts a configuration from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DocsError::Config`] when a provider fails or a value
    /// has the wrong type.
    pub fn from_figment(figment: &Figment) -> DocsResult<Self> {
        Ok(figment.extract()?)
    }

    /// Loads defaults overridden by the environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DocsError::Config`] when an environment variable
    /// holds a value of the wrong type.
    pub fn load() -> DocsResult<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Loads defaults overridden by the TOML file at `path`, then the
    /// environment. A missing file is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DocsError::Config`] when the file cannot be parsed or
    /// a value has the wrong type.
    pub fn load_from(path: &Utf8Path) -> DocsResult<Self> {
        tracing::debug!(path = %path, "loading render configuration");
        Self::from_figment(&Self::figment_with_file(path))
    }
}
