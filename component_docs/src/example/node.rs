//! Ordered, tagged tree that example configs are encoded into.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;
use serde_yaml::Number;

use crate::error::{DocsError, DocsResult};

/// A generic example value whose mappings keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleNode {
    /// Absent value.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar, including non-finite floats.
    Number(Number),
    /// String scalar.
    String(String),
    /// Sequence of values.
    Sequence(Vec<Self>),
    /// Mapping from keys to values, in order.
    Mapping(Vec<(String, Self)>),
}

impl ExampleNode {
    /// Encodes any serializable value into a node tree.
    ///
    /// Struct fields and map entries keep the order in which `value`
    /// serializes them. `NaN` and infinities are kept and later written as
    /// `.nan`, `.inf` and `-.inf`. Enum variants carrying data become a
    /// single-entry mapping keyed by the variant name.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Encoding`] when `value` fails to serialize or uses
    /// a mapping key that is not a scalar.
    pub fn encode<T>(value: &T) -> DocsResult<Self>
    where
        T: Serialize + ?Sized,
    {
        serde_yaml::to_value(value)
            .map_err(|source| DocsError::Encoding { source })
            .and_then(Self::from_yaml)
    }

    fn from_yaml(value: serde_yaml::Value) -> DocsResult<Self> {
        use serde_yaml::Value as Yaml;

        Ok(match value {
            Yaml::Null => Self::Null,
            Yaml::Bool(flag) => Self::Bool(flag),
            Yaml::Number(number) => Self::Number(number),
            Yaml::String(text) => Self::String(text),
            Yaml::Sequence(items) => Self::Sequence(
                items
                    .into_iter()
                    .map(Self::from_yaml)
                    .collect::<DocsResult<_>>()?,
            ),
            Yaml::Mapping(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, item)| Ok((mapping_key(key)?, Self::from_yaml(item)?)))
                    .collect::<DocsResult<_>>()?,
            ),
            Yaml::Tagged(tagged) => {
                let variant = tagged.tag.to_string();
                Self::from_yaml(tagged.value)?.nest(variant.trim_start_matches('!'))
            }
        })
    }

    /// Wraps the node in a single-entry mapping under `key`.
    #[must_use]
    pub fn nest(self, key: impl Into<String>) -> Self {
        Self::Mapping(vec![(key.into(), self)])
    }

    /// Returns the entries of a mapping node.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&[(String, Self)]> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the items of a sequence node.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up `key` in a mapping node.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping()?
            .iter()
            .find_map(|(name, value)| (name == key).then_some(value))
    }

    /// Keys of a mapping node in order; empty for every other node.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.as_mapping()
            .into_iter()
            .flatten()
            .map(|(key, _)| key.as_str())
    }

    /// Returns `true` when a mapping entry exists anywhere in the tree.
    #[must_use]
    pub fn has_entries(&self) -> bool {
        match self {
            Self::Mapping(entries) => !entries.is_empty(),
            Self::Sequence(items) => items.iter().any(Self::has_entries),
            _ => false,
        }
    }

    /// Serializes the node to block-style YAML.
    ///
    /// Nested mappings are indented by two spaces. Sequence items start at
    /// the indentation of the key that holds them, as in `key:\n- item`.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Serialization`] when the YAML emitter rejects the
    /// tree.
    pub fn to_yaml(&self) -> DocsResult<String> {
        serde_yaml::to_string(self).map_err(|source| DocsError::Serialization { source })
    }
}

fn mapping_key(key: serde_yaml::Value) -> DocsResult<String> {
    match key {
        serde_yaml::Value::String(text) => Ok(text),
        serde_yaml::Value::Bool(flag) => Ok(flag.to_string()),
        serde_yaml::Value::Number(number) => Ok(number.to_string()),
        other => Err(DocsError::Encoding {
            source: serde_yaml::Error::custom(format!(
                "mapping keys must be strings, numbers or booleans, found {other:?}"
            )),
        }),
    }
}

impl From<Value> for ExampleNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => Self::Number(
                number
                    .as_u64()
                    .map(Number::from)
                    .or_else(|| number.as_i64().map(Number::from))
                    .unwrap_or_else(|| Number::from(number.as_f64().unwrap_or(f64::NAN))),
            ),
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for ExampleNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => number.serialize(serializer),
            Self::String(text) => serializer.serialize_str(text),
            Self::Sequence(items) => serializer.collect_seq(items),
            Self::Mapping(entries) => {
                serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
            }
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected successes"
)]
mod tests {
    use super::*;
    use anyhow::{Result, ensure};
    use rstest::rstest;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Output {
        url: String,
        verb: String,
        retries: u8,
    }

    #[rstest]
    fn struct_fields_keep_declaration_order() -> Result<()> {
        let node = ExampleNode::encode(&Output {
            url: "http://localhost".to_owned(),
            verb: "POST".to_owned(),
            retries: 3,
        })?;
        let keys: Vec<_> = node.keys().collect();
        ensure!(keys == ["url", "verb", "retries"], "unexpected order {keys:?}");
        Ok(())
    }

    #[rstest]
    fn json_objects_keep_insertion_order() -> Result<()> {
        let value: Value = serde_json::from_str(r#"{"c": 3, "a": 1, "b": 2}"#)?;
        let node = ExampleNode::from(value);
        let keys: Vec<_> = node.keys().collect();
        ensure!(keys == ["c", "a", "b"], "unexpected order {keys:?}");
        Ok(())
    }

    #[rstest]
    fn non_string_keys_fail_to_encode() {
        let mut map = BTreeMap::new();
        map.insert(vec![1_u8], "value");
        let err = ExampleNode::encode(&map).expect_err("sequence keys are unsupported");
        assert!(matches!(err, DocsError::Encoding { .. }));
    }

    #[rstest]
    fn nested_nodes_render_block_yaml() -> Result<()> {
        let node = ExampleNode::Mapping(vec![
            ("label".to_owned(), ExampleNode::String(String::new())),
            (
                "addresses".to_owned(),
                ExampleNode::Sequence(vec![ExampleNode::String("localhost".to_owned())]),
            ),
            (
                "tls".to_owned(),
                ExampleNode::Mapping(vec![("enabled".to_owned(), ExampleNode::Bool(false))]),
            ),
            ("limit".to_owned(), ExampleNode::Null),
        ]);
        let yaml = node.to_yaml()?;
        ensure!(
            yaml == "label: ''\naddresses:\n- localhost\ntls:\n  enabled: false\nlimit: null\n",
            "unexpected yaml:\n{yaml}"
        );
        Ok(())
    }

    #[rstest]
    #[case(f64::NAN, "ratio: .nan\n")]
    #[case(f64::INFINITY, "ratio: .inf\n")]
    #[case(f64::NEG_INFINITY, "ratio: -.inf\n")]
    fn non_finite_floats_survive_encoding(#[case] ratio: f64, #[case] expected: &str) -> Result<()> {
        let node = ExampleNode::encode(&BTreeMap::from([("ratio", ratio)]))?;
        let yaml = node.to_yaml()?;
        ensure!(yaml == expected, "unexpected yaml:\n{yaml}");
        Ok(())
    }

    #[derive(Serialize)]
    enum Codec {
        Lines,
        Chunker { size: u32 },
    }

    #[rstest]
    fn enum_variants_encode_like_json() -> Result<()> {
        let node = ExampleNode::encode(&[Codec::Lines, Codec::Chunker { size: 10 }])?;
        let yaml = node.to_yaml()?;
        ensure!(
            yaml == "- Lines\n- Chunker:\n    size: 10\n",
            "unexpected yaml:\n{yaml}"
        );
        Ok(())
    }

    #[rstest]
    fn integer_keys_become_strings() -> Result<()> {
        let node = ExampleNode::encode(&BTreeMap::from([(8080_u16, "http")]))?;
        ensure!(node.keys().eq(["8080"]), "unexpected keys {:?}", node.keys().collect::<Vec<_>>());
        Ok(())
    }

    #[rstest]
    #[case(ExampleNode::Null, false)]
    #[case(ExampleNode::Mapping(Vec::new()), false)]
    #[case(ExampleNode::Sequence(vec![ExampleNode::Mapping(Vec::new())]), false)]
    #[case(ExampleNode::Bool(true).nest("enabled"), true)]
    #[case(ExampleNode::Sequence(vec![ExampleNode::Bool(true).nest("a")]), true)]
    fn entries_are_found_at_any_depth(#[case] node: ExampleNode, #[case] expected: bool) {
        assert_eq!(node.has_entries(), expected);
    }

    #[rstest]
    fn nest_wraps_under_single_key() {
        let node = ExampleNode::Bool(true).nest("input");
        assert_eq!(node.keys().collect::<Vec<_>>(), ["input"]);
        assert_eq!(node.get("input"), Some(&ExampleNode::Bool(true)));
    }
}
