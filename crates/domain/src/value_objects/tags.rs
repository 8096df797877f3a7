//! Free-form OpenStreetMap tags
//!
//! Tag columns are stored as hstore-formatted text, e.g.
//! `"amenity"=>"parking","fee"=>"no","operator"=>NULL`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const ARROW: &[u8] = b"=>";
const NULL_TOKEN: &[u8] = b"NULL";

/// Key to optional value mapping decoded from an hstore string
///
/// Keys are kept sorted so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(BTreeMap<String, Option<String>>);

impl Tags {
    /// Create an empty tag set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an hstore-formatted string
    ///
    /// Grammar: `"key"=>"value"` or `"key"=>NULL`, pairs separated by commas.
    /// Backslash escapes inside quotes are decoded. Fragments that do not
    /// form a pair are skipped, so this never fails. A repeated key keeps the
    /// last value.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let bytes = input.as_bytes();
        let mut entries = BTreeMap::new();
        let mut pos = 0;

        while pos < bytes.len() {
            if let Some((key, value, next)) = parse_pair(bytes, pos) {
                entries.insert(key, value);
                pos = next;
            } else {
                pos += 1;
            }
        }

        Self(entries)
    }

    /// Parse an optional column value; `None` yields an empty tag set
    #[must_use]
    pub fn parse_opt(input: Option<&str>) -> Self {
        input.map_or_else(Self::new, Self::parse)
    }

    /// Look up a tag. The outer `Option` is presence, the inner one is NULL.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.0.get(key).map(Option::as_deref)
    }

    /// Number of tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no tags were decoded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Option<String>>> for Tags {
    fn from(map: BTreeMap<String, Option<String>>) -> Self {
        Self(map)
    }
}

/// Try to read one `"key"=>value` pair starting at `pos`
fn parse_pair(bytes: &[u8], pos: usize) -> Option<(String, Option<String>, usize)> {
    let (key, after_key) = parse_quoted(bytes, pos)?;
    if key.is_empty() || !bytes[after_key..].starts_with(ARROW) {
        return None;
    }

    let value_start = after_key + ARROW.len();
    if bytes.get(value_start) == Some(&b'"') {
        let (value, next) = parse_quoted(bytes, value_start)?;
        Some((key, Some(value), next))
    } else if bytes[value_start..].starts_with(NULL_TOKEN) {
        Some((key, None, value_start + NULL_TOKEN.len()))
    } else {
        None
    }
}

/// Read a double-quoted string starting at `pos`, returning it and the index after the closing quote
fn parse_quoted(bytes: &[u8], pos: usize) -> Option<(String, usize)> {
    if bytes.get(pos) != Some(&b'"') {
        return None;
    }

    let mut buf = Vec::new();
    let mut i = pos + 1;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'\\' if i + 1 < bytes.len() => {
                buf.push(bytes[i + 1]);
                i += 2;
            },
            b'"' => return String::from_utf8(buf).ok().map(|s| (s, i + 1)),
            _ => {
                buf.push(b);
                i += 1;
            },
        }
    }

    // Unterminated
    None
}
