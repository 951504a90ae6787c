//! Struct member serialization tags (`json:"name,omitempty" xml:"n"`).

use std::sync::LazyLock;

use regex::Regex;

/// Whole-tag shape: space separated `key:"quoted value"` pairs.
static RE_TAG_WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:[^\s:"]+:"(?:[^"\\]|\\.)*"\s*)*$"#).unwrap()
});

static RE_TAG_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([^\s:"]+):"((?:[^"\\]|\\.)*)""#).unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub key: String,
    pub name: String,
    pub options: Vec<String>,
}

/// Parse a tag into its entries, or `None` when the tag is malformed.
pub fn parse_tag(tag: &str) -> Option<Vec<TagEntry>> {
    if !RE_TAG_WELL_FORMED.is_match(tag) {
        return None;
    }

    let entries = RE_TAG_PAIR
        .captures_iter(tag)
        .map(|caps| {
            let value = unquote(&caps[2]);
            let mut parts = value.split(',');
            let name = parts.next().unwrap_or_default().to_string();
            TagEntry {
                key: caps[1].to_string(),
                name,
                options: parts.map(String::from).collect(),
            }
        })
        .collect();
    Some(entries)
}

/// Explicit wire name from the `json` key. Malformed tags, a missing key, an
/// empty name and the `-` skip marker all yield `None`.
pub fn json_name(tag: &str) -> Option<String> {
    parse_tag(tag)?
        .into_iter()
        .find(|e| e.key == "json")
        .map(|e| e.name)
        .filter(|name| !name.is_empty() && name != "-")
}

fn unquote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}
