use std::fmt;
use thiserror::Error;

/// The value side of one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// `name="text"`; the text may be empty.
    Text(String),
    /// `name` written with no `=`, like `disabled`.
    Bare,
}

/// Insertion-ordered attribute mapping; names are unique.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributeMap(Vec<(String, AttributeValue)>);

impl AttributeMap {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// The concrete text of `name`, or the empty string when the attribute
    /// is missing or bare.
    pub fn text(&self, name: &str) -> &str {
        match self.get(name) {
            Some(AttributeValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Insert or replace. A replaced name keeps its original position; a new
    /// name goes to the back.
    pub fn set(&mut self, name: impl Into<String>, value: AttributeValue) {
        let name = name.into();
        if let Some(slot) = self.0.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One parsed start tag. `raw_text` is the exact `<...>` substring the
/// record was built from; `attributes` never contains the node name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    pub node_name: String,
    pub raw_text: String,
    pub attributes: AttributeMap,
}

impl fmt::Display for ElementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

/// The input could not be identified as a single tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedTag {
    #[error("tag is not delimited by '<' and '>'")]
    MissingDelimiters,
    #[error("tag has no content between '<' and '>'")]
    EmptyTag,
}

/// Attribute emission order for [`serialize`]. Names not listed here keep
/// their discovery order after these.
pub const CANONICAL_ORDER: [&str; 6] = ["id", "name", "value", "type", "disabled", "class"];

/// Render `record` as tag text with attributes in canonical order. Total:
/// a record with no attributes serializes to `<name>`.
pub fn serialize(record: &ElementRecord) -> String {
    let mut out = String::from("<");
    out.push_str(&record.node_name);
    for name in CANONICAL_ORDER {
        if let Some(value) = record.attributes.get(name) {
            push_attribute(&mut out, name, value);
        }
    }
    for (name, value) in record.attributes.iter() {
        if !CANONICAL_ORDER.contains(&name) {
            push_attribute(&mut out, name, value);
        }
    }
    out.push('>');
    out
}

fn push_attribute(out: &mut String, name: &str, value: &AttributeValue) {
    out.push(' ');
    out.push_str(name);
    if let AttributeValue::Text(text) = value {
        out.push_str("=\"");
        out.push_str(text);
        out.push('"');
    }
}

#[cfg(test)]
#[test]
fn test_set_keeps_position() {
    let mut attributes = AttributeMap::empty();
    attributes.set("type", AttributeValue::Text("radio".into()));
    attributes.set("name", AttributeValue::Text("a".into()));
    attributes.set("type", AttributeValue::Text("checkbox".into()));
    let names: Vec<&str> = attributes.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["type", "name"]);
    assert_eq!(attributes.text("type"), "checkbox");
}

mod classes;
mod parsing;

pub use classes::{add_class, remove_class};
pub use parsing::{parse_tag, scan_tags};
