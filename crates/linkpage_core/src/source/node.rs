//! YAML document tree that keeps every mapping pair.
//!
//! `serde_yaml::Value` refuses a mapping with a repeated key while parsing.
//! A link file that repeats a description (or a header) is still valid YAML
//! here; the repeat is reported later by the taxonomy merge.

use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess,
};
use std::fmt;

/// Parsed YAML node. Mappings are pair lists in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNode {
    Null,
    Bool(bool),
    /// Number in its YAML text form.
    Number(String),
    String(String),
    Sequence(Vec<YamlNode>),
    Mapping(Vec<(YamlNode, YamlNode)>),
}

impl YamlNode {
    /// Text of a scalar node; `None` for null and collections.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Bool(flag) => Some(flag.to_string()),
            Self::Number(text) | Self::String(text) => Some(text.clone()),
            Self::Null | Self::Sequence(_) | Self::Mapping(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "list",
            Self::Mapping(_) => "mapping",
        }
    }
}

impl<'de> Deserialize<'de> for YamlNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> de::Visitor<'de> for NodeVisitor {
    type Value = YamlNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(YamlNode::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(YamlNode::Number(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(YamlNode::Number(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(YamlNode::Number(serde_yaml::Number::from(value).to_string()))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(YamlNode::String(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(YamlNode::String(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(YamlNode::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(YamlNode::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        YamlNode::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        if let Some(size_hint) = seq.size_hint() {
            items.reserve(size_hint);
        }
        while let Some(item) = seq.next_element::<YamlNode>()? {
            items.push(item);
        }
        Ok(YamlNode::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs = Vec::new();
        if let Some(size_hint) = map.size_hint() {
            pairs.reserve(size_hint);
        }
        while let Some(pair) = map.next_entry::<YamlNode, YamlNode>()? {
            pairs.push(pair);
        }
        Ok(YamlNode::Mapping(pairs))
    }

    // Custom tags (`!foo value`) arrive as enums; the tag itself is dropped.
    fn visit_enum<A>(self, data: A) -> Result<Self::Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (_tag, variant) = data.variant::<String>()?;
        variant.newtype_variant::<YamlNode>()
    }
}

#[cfg(test)]
mod tests {
    use super::YamlNode;

    fn parse(text: &str) -> YamlNode {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn repeated_keys_are_kept_in_document_order() {
        let node = parse("a: 1\na: 2\nb: x\n");
        assert_eq!(
            node,
            YamlNode::Mapping(vec![
                (YamlNode::String("a".into()), YamlNode::Number("1".into())),
                (YamlNode::String("a".into()), YamlNode::Number("2".into())),
                (YamlNode::String("b".into()), YamlNode::String("x".into())),
            ])
        );
    }

    #[test]
    fn scalars_and_nulls() {
        let node = parse("- true\n- 42\n- ~\n- text\n");
        assert_eq!(
            node,
            YamlNode::Sequence(vec![
                YamlNode::Bool(true),
                YamlNode::Number("42".into()),
                YamlNode::Null,
                YamlNode::String("text".into()),
            ])
        );
        assert_eq!(YamlNode::Bool(false).scalar_text().as_deref(), Some("false"));
        assert_eq!(YamlNode::Null.scalar_text(), None);
    }

    #[test]
    fn empty_document_is_null() {
        assert_eq!(parse(""), YamlNode::Null);
    }
}
