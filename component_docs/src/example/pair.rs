//! Generates the common and advanced example config snippets.

use serde::Serialize;
use tracing::debug;

use super::{ExampleNode, ExampleOptions, FieldFilter, order_example};
use crate::error::DocsResult;
use crate::spec::{ComponentType, FieldSpec};

/// YAML snippets of a component's example config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPair {
    /// Fields that are neither advanced nor deprecated.
    pub common: String,
    /// Every field that is not deprecated.
    pub advanced: String,
}

impl ConfigPair {
    /// Returns `true` when hiding advanced fields changes nothing.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.common == self.advanced
    }
}

/// Renders the common and advanced views of `example` as YAML.
///
/// With `nest` set each view is wrapped under a single key named after
/// `component_type`.
///
/// # Errors
///
/// Returns [`crate::DocsError::Encoding`] when `example` cannot be encoded and
/// [`crate::DocsError::Serialization`] when a view cannot be written as YAML.
pub fn generate_example_configs<T>(
    component_type: ComponentType,
    spec: &FieldSpec,
    nest: bool,
    example: &T,
    options: &ExampleOptions,
) -> DocsResult<ConfigPair>
where
    T: Serialize + ?Sized,
{
    let encoded = ExampleNode::encode(example)?;
    let view = |filter: FieldFilter| -> DocsResult<String> {
        let mut ordered = order_example(spec, encoded.clone(), filter, options);
        if nest {
            ordered = ordered.nest(component_type.as_str());
        }
        debug!(
            component_type = %component_type,
            filter = filter.label(),
            nest,
            "rendering example config"
        );
        ordered.to_yaml()
    };

    let advanced = view(FieldFilter::Advanced)?;
    let common = view(FieldFilter::Common)?;
    Ok(ConfigPair { common, advanced })
}
