//! Restricted metadata parser for frontmatter blocks.
//!
//! This is deliberately not YAML. The grammar is line-oriented:
//! - blank lines and `#` comments are skipped;
//! - `key: value` binds a scalar (one layer of matching quotes stripped);
//! - `key:` opens an empty list and makes it the current list target;
//! - `- value` appends to the current list target, if any.
//!
//! Every other line is ignored. Nested mappings, block scalars, anchors and
//! flow sequences are unsupported and parse as nothing. The parser never
//! fails.

use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Value bound to a metadata key.
///
/// The parser only produces `Scalar` items inside a `List`; the recursive
/// shape leaves room for richer producers and lets validation reject them.
pub enum MetaValue {
    Scalar(String),
    List(Vec<MetaValue>),
}

impl MetaValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            MetaValue::Scalar(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[MetaValue]> {
        match self {
            MetaValue::List(items) => Some(items),
            MetaValue::Scalar(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered key/value mapping. A repeated key replaces the earlier value but
/// keeps its original position.
pub struct Metadata {
    entries: Vec<(String, MetaValue)>,
}

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: MetaValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_item(&mut self, key: &str, item: String) {
        if let Some((_, MetaValue::List(items))) =
            self.entries.iter_mut().find(|(k, _)| k == key)
        {
            items.push(MetaValue::Scalar(item));
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
/// Classification of a single frontmatter line.
enum Line<'a> {
    Skip,
    Scalar { key: &'a str, value: &'a str },
    ListOpen { key: &'a str },
    Item(&'a str),
    Unrecognized,
}

fn key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-z0-9_-]+):(.*)$").expect("static regex"))
}

fn item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*-\s+(.*)$").expect("static regex"))
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Skip;
    }
    if let Some(caps) = key_re().captures(line) {
        let key = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str()).trim();
        return if value.is_empty() {
            Line::ListOpen { key }
        } else {
            Line::Scalar { key, value }
        };
    }
    if let Some(caps) = item_re().captures(line) {
        let value = caps.get(1).map_or("", |m| m.as_str()).trim();
        if !value.is_empty() {
            return Line::Item(value);
        }
    }
    Line::Unrecognized
}

/// Strip one layer of surrounding matching single or double quotes.
pub fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a frontmatter block into ordered metadata.
pub fn parse(block: &str) -> Metadata {
    let mut meta = Metadata::default();
    let mut list_target: Option<&str> = None;
    for raw in block.lines() {
        match classify(raw) {
            Line::Skip | Line::Unrecognized => {}
            Line::Scalar { key, value } => {
                meta.insert(key, MetaValue::Scalar(unquote(value).to_string()));
                list_target = None;
            }
            Line::ListOpen { key } => {
                meta.insert(key, MetaValue::List(Vec::new()));
                list_target = Some(key);
            }
            Line::Item(value) => {
                if let Some(key) = list_target {
                    meta.push_item(key, unquote(value).to_string());
                }
            }
        }
    }
    meta
}
