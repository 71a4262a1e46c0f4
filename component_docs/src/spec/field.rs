//! Field specification tree describing a component's configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scalar type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string.
    #[default]
    String,
    /// Integer number.
    Int,
    /// Floating point number.
    Float,
    /// Boolean flag.
    Bool,
    /// Structured object described by child fields.
    Object,
    /// Any value.
    Unknown,
}

impl FieldType {
    /// Display name used in generated field references.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Object => "object",
            Self::Unknown => "unknown",
        }
    }
}

/// Shape in which values of a field's type are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FieldKind {
    /// A single value.
    #[default]
    #[serde(rename = "scalar")]
    Scalar,
    /// A mapping of arbitrary keys to values.
    #[serde(rename = "map")]
    Map,
    /// A sequence of values.
    #[serde(rename = "array")]
    Array,
    /// A sequence of sequences of values.
    #[serde(rename = "2darray")]
    TwoDArray,
}

/// Declarative description of one configuration field.
///
/// The declared order of a field is its index within the parent's
/// [`FieldSpec::children`]; it never depends on how an example value happens
/// to be ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Key of the field within its parent mapping.
    pub name: String,
    /// Human-readable description rendered in the field reference.
    #[serde(default)]
    pub description: String,
    /// Scalar type of the field's values.
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    /// Arrangement of the field's values.
    #[serde(default)]
    pub kind: FieldKind,
    /// Hidden from the common example view.
    #[serde(default)]
    pub is_advanced: bool,
    /// Hidden from every example view and the field reference.
    #[serde(default)]
    pub is_deprecated: bool,
    /// Holds sensitive values such as credentials.
    #[serde(default)]
    pub is_secret: bool,
    /// Default value, if the field has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Example values shown in the field reference.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
    /// Permitted values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Permitted values paired with a summary of each.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotated_options: Vec<(String, String)>,
    /// Version the field was introduced in.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// Child fields of an object-typed field, in declared order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

impl FieldSpec {
    /// Creates a scalar field of the given type with no metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            field_type,
            kind: FieldKind::Scalar,
            is_advanced: false,
            is_deprecated: false,
            is_secret: false,
            default: None,
            examples: Vec::new(),
            options: Vec::new(),
            annotated_options: Vec::new(),
            version: String::new(),
            children: Vec::new(),
        }
    }

    /// Creates a string field.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    /// Creates an integer field.
    #[must_use]
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int)
    }

    /// Creates a float field.
    #[must_use]
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Float)
    }

    /// Creates a boolean field.
    #[must_use]
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool)
    }

    /// Creates a field accepting any value.
    #[must_use]
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Unknown)
    }

    /// Creates an object field with the given children.
    #[must_use]
    pub fn object(name: impl Into<String>, children: impl IntoIterator<Item = Self>) -> Self {
        Self::new(name, FieldType::Object).with_children(children)
    }

    /// Creates the unnamed root object of a component's configuration.
    #[must_use]
    pub fn root(children: impl IntoIterator<Item = Self>) -> Self {
        Self::object("", children)
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the field as advanced.
    #[must_use]
    pub const fn advanced(mut self) -> Self {
        self.is_advanced = true;
        self
    }

    /// Marks the field as deprecated.
    #[must_use]
    pub const fn deprecated(mut self) -> Self {
        self.is_deprecated = true;
        self
    }

    /// Marks the field as holding secrets.
    #[must_use]
    pub const fn secret(mut self) -> Self {
        self.is_secret = true;
        self
    }

    /// Turns the field into a map of its type.
    #[must_use]
    pub const fn map(mut self) -> Self {
        self.kind = FieldKind::Map;
        self
    }

    /// Turns the field into an array of its type.
    #[must_use]
    pub const fn array(mut self) -> Self {
        self.kind = FieldKind::Array;
        self
    }

    /// Turns the field into a two-dimensional array of its type.
    #[must_use]
    pub const fn two_d_array(mut self) -> Self {
        self.kind = FieldKind::TwoDArray;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Appends example values.
    #[must_use]
    pub fn with_examples<V: Into<Value>>(mut self, examples: impl IntoIterator<Item = V>) -> Self {
        self.examples.extend(examples.into_iter().map(Into::into));
        self
    }

    /// Appends permitted values.
    #[must_use]
    pub fn with_options<S: Into<String>>(mut self, options: impl IntoIterator<Item = S>) -> Self {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }

    /// Appends permitted values together with a summary of each.
    #[must_use]
    pub fn with_annotated_options<K, S>(mut self, options: impl IntoIterator<Item = (K, S)>) -> Self
    where
        K: Into<String>,
        S: Into<String>,
    {
        self.annotated_options.extend(
            options
                .into_iter()
                .map(|(value, summary)| (value.into(), summary.into())),
        );
        self
    }

    /// Records the version the field was introduced in.
    #[must_use]
    pub fn at_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Appends child fields in declared order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the child named `name`, if declared.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.indexed_child(name).map(|(_, child)| child)
    }

    /// Looks up a direct child by name along with its declaration position.
    #[must_use]
    pub fn indexed_child(&self, name: &str) -> Option<(usize, &Self)> {
        self.children
            .iter()
            .enumerate()
            .find(|(_, child)| child.name == name)
    }

    /// Returns the dotted path of the first child name declared twice among
    /// its siblings, searching depth first.
    #[must_use]
    pub fn find_duplicate_child(&self) -> Option<String> {
        for (index, child) in self.children.iter().enumerate() {
            let repeated = self
                .children
                .iter()
                .skip(index + 1)
                .any(|sibling| sibling.name == child.name);
            if repeated {
                return Some(child.name.clone());
            }
            if let Some(nested) = child.find_duplicate_child() {
                return Some(format!("{}.{nested}", child.name));
            }
        }
        None
    }
}
