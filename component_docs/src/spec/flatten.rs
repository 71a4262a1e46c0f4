//! Flattens a field tree into the list shown in a field reference.

use super::{FieldKind, FieldSpec};
use crate::error::DocsResult;
use crate::example::ExampleNode;

/// One entry of a component's field reference.
#[derive(Debug, Clone, PartialEq)]
pub struct DocField {
    /// Dotted path of the field, with `[]` marking array parents.
    pub full_name: String,
    /// Type shown to readers, such as `string`, `object` or `array`.
    pub type_label: &'static str,
    /// The field itself, with its kind normalized to scalar and its children
    /// removed; they are listed as entries of their own.
    pub spec: FieldSpec,
    /// Default value as compact JSON.
    pub default_marshalled: Option<String>,
    /// Examples as YAML snippets keyed by the field name.
    pub examples_marshalled: Vec<String>,
}

impl DocField {
    fn describe(field: &FieldSpec, path: &str) -> DocsResult<Self> {
        let examples_marshalled = field
            .examples
            .iter()
            .map(|example| {
                ExampleNode::from(example.clone())
                    .nest(field.name.as_str())
                    .to_yaml()
            })
            .collect::<DocsResult<Vec<_>>>()?;

        let mut spec = field.clone();
        spec.kind = FieldKind::Scalar;
        spec.children = Vec::new();

        Ok(Self {
            full_name: format!("{path}{}", field.name),
            type_label: type_label(field),
            default_marshalled: field.default.as_ref().map(ToString::to_string),
            examples_marshalled,
            spec,
        })
    }
}

const fn type_label(field: &FieldSpec) -> &'static str {
    match field.kind {
        FieldKind::Map => "object",
        FieldKind::Array => "array",
        FieldKind::TwoDArray => "two-dimensional array",
        FieldKind::Scalar => field.field_type.as_str(),
    }
}

impl FieldSpec {
    /// Lists every non-deprecated descendant depth first, in declared order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DocsError::Serialization`] when an example value
    /// cannot be written as YAML.
    pub fn flatten_children_for_docs(&self) -> DocsResult<Vec<DocField>> {
        let mut flattened = Vec::new();
        flatten_into(&self.children, "", &mut flattened)?;
        Ok(flattened)
    }
}

fn flatten_into(fields: &[FieldSpec], path: &str, out: &mut Vec<DocField>) -> DocsResult<()> {
    for field in fields.iter().filter(|field| !field.is_deprecated) {
        out.push(DocField::describe(field, path)?);
        if field.children.is_empty() {
            continue;
        }
        let marker = match field.kind {
            FieldKind::Array => "[]",
            FieldKind::TwoDArray => "[][]",
            FieldKind::Scalar | FieldKind::Map => "",
        };
        let nested = format!("{path}{}{marker}.", field.name);
        flatten_into(&field.children, &nested, out)?;
    }
    Ok(())
}
