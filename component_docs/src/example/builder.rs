//! Builds filtered example views ordered by the field specification.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{ExampleNode, FieldFilter};
use crate::error::DocsResult;
use crate::spec::{FieldKind, FieldSpec};

/// Options shaping how an example value is turned into a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleOptions {
    /// Drop the type discriminator key from mappings.
    pub remove_type_field: bool,
    /// Name of the type discriminator key.
    pub type_field: String,
}

impl Default for ExampleOptions {
    fn default() -> Self {
        Self {
            remove_type_field: true,
            type_field: "type".to_owned(),
        }
    }
}

/// Encodes `example` and returns the view selected by `filter`.
///
/// # Errors
///
/// Returns [`crate::DocsError::Encoding`] when `example` cannot be encoded.
pub fn build_ordered_example<T>(
    spec: &FieldSpec,
    example: &T,
    filter: FieldFilter,
    options: &ExampleOptions,
) -> DocsResult<ExampleNode>
where
    T: Serialize + ?Sized,
{
    let node = ExampleNode::encode(example)?;
    Ok(order_example(spec, node, filter, options))
}

/// Filters and reorders an already encoded example against `spec`.
///
/// Mapping keys described by `spec` are kept when `filter` admits their field
/// and are emitted in declared order. Keys `spec` does not describe follow in
/// their original order.
#[must_use]
pub fn order_example(
    spec: &FieldSpec,
    node: ExampleNode,
    filter: FieldFilter,
    options: &ExampleOptions,
) -> ExampleNode {
    let sanitiser = Sanitiser { filter, options };
    match node {
        ExampleNode::Mapping(entries) if spec.kind == FieldKind::Scalar => {
            ExampleNode::Mapping(sanitiser.mapping(entries, spec))
        }
        other => sanitiser.field(other, spec),
    }
}

struct Sanitiser<'a> {
    filter: FieldFilter,
    options: &'a ExampleOptions,
}

impl Sanitiser<'_> {
    /// Walks a value holding `field`'s kind of data.
    fn field(&self, node: ExampleNode, field: &FieldSpec) -> ExampleNode {
        match (field.kind, node) {
            (FieldKind::Scalar, node) => self.element(node, field),
            (FieldKind::Map, ExampleNode::Mapping(entries)) => ExampleNode::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, self.element(value, field)))
                    .collect(),
            ),
            (FieldKind::Array, ExampleNode::Sequence(items)) => ExampleNode::Sequence(
                items
                    .into_iter()
                    .map(|item| self.element(item, field))
                    .collect(),
            ),
            (FieldKind::TwoDArray, ExampleNode::Sequence(rows)) => ExampleNode::Sequence(
                rows.into_iter()
                    .map(|row| match row {
                        ExampleNode::Sequence(items) => ExampleNode::Sequence(
                            items
                                .into_iter()
                                .map(|item| self.element(item, field))
                                .collect(),
                        ),
                        other => other,
                    })
                    .collect(),
            ),
            (_, node) => node,
        }
    }

    /// Walks a single value of `field`'s type.
    fn element(&self, node: ExampleNode, field: &FieldSpec) -> ExampleNode {
        if field.children.is_empty() {
            return node;
        }
        match node {
            ExampleNode::Mapping(entries) => ExampleNode::Mapping(self.mapping(entries, field)),
            other => other,
        }
    }

    fn mapping(
        &self,
        entries: Vec<(String, ExampleNode)>,
        parent: &FieldSpec,
    ) -> Vec<(String, ExampleNode)> {
        let type_field = self.options.type_field.as_str();
        let strip_type = self.options.remove_type_field && parent.child(type_field).is_none();

        let mut declared = Vec::with_capacity(entries.len());
        let mut undeclared = Vec::new();
        for (key, value) in entries {
            if strip_type && key == type_field {
                trace!(key = %key, "removing type field from example");
                continue;
            }
            let Some((position, child)) = parent.indexed_child(&key) else {
                debug!(key = %key, "keeping example key absent from field specification");
                undeclared.push((key, value));
                continue;
            };
            if !self.filter.admits(child) {
                trace!(key = %key, filter = self.filter.label(), "filtering field from example");
                continue;
            }
            let walked = self.field(value, child);
            if !self.filter.accepts(child) && !walked.has_entries() {
                trace!(
                    key = %key,
                    filter = self.filter.label(),
                    "dropping field with no admitted entries"
                );
                continue;
            }
            declared.push((position, (key, walked)));
        }

        declared.sort_by_key(|(position, _)| *position);
        declared
            .into_iter()
            .map(|(_, entry)| entry)
            .chain(undeclared)
            .collect()
    }
}
