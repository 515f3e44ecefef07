//! Front matter blocks at the top of content files.
//!
//! Two block styles are accepted:
//!
//! ```text
//! ---                      +++
//! title: Hello             title = "Hello"
//! tags: [rust, web]        tags = ["rust", "web"]
//! ---                      +++
//! ```
//!
//! Either block may hold nested values; they end up in [`Frontmatter::extra`].

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    content::date::{ContentDate, parse_date},
    foundation::error::{FolioError, FolioResult},
};

pub const YAML_FENCE: &str = "---";
pub const TOML_FENCE: &str = "+++";

/// Keys deserialized into `String` fields of [`Frontmatter`].
const TEXT_FIELDS: [&str; 4] = ["title", "description", "date", "category"];

/// Metadata of one content record.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frontmatter {
    /// File stem; always set by the loader, never taken from the file.
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Any other keys, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Frontmatter {
    /// Build from parsed key/value pairs; `slug` overrides any `slug` key.
    ///
    /// Number and boolean values of the text fields are taken as their
    /// literal text (`title: 1984`), and null values count as absent.
    pub fn from_fields(slug: &str, mut fields: BTreeMap<String, Value>) -> FolioResult<Self> {
        for key in TEXT_FIELDS {
            let Some(value) = fields.remove(key) else {
                continue;
            };
            let value = match value {
                Value::Null => continue,
                Value::Number(_) | Value::Bool(_) => Value::String(value.to_string()),
                other => other,
            };
            fields.insert(key.to_owned(), value);
        }
        fields.insert("slug".to_owned(), Value::String(slug.to_owned()));
        let obj = fields.into_iter().collect::<serde_json::Map<_, _>>();
        serde_json::from_value(Value::Object(obj))
            .map_err(|e| FolioError::serde(format!("front matter of '{slug}': {e}")))
    }

    pub fn parsed_date(&self) -> Option<ContentDate> {
        self.date.as_deref().and_then(parse_date)
    }

    /// `tags` as a list of strings (a single string counts as one tag).
    pub fn tags(&self) -> Vec<String> {
        match self.extra.get("tags") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }
}

/// Front matter fields and the remaining body of a content file.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'a> {
    pub fields: BTreeMap<String, Value>,
    pub body: &'a str,
}

/// Split `source` into front matter fields and body.
///
/// A file without a leading fence has no front matter; an opening fence
/// without a closing one is an error.
pub fn split_document(source: &str) -> FolioResult<Document<'_>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let first_line = source.lines().next().unwrap_or("").trim_end();
    let fence = match first_line {
        YAML_FENCE => YAML_FENCE,
        TOML_FENCE => TOML_FENCE,
        _ => {
            return Ok(Document {
                fields: BTreeMap::new(),
                body: source,
            });
        }
    };

    let after_open = &source[first_line_len(source)..];
    let mut offset = 0usize;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == fence {
            let block = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            let fields = if fence == TOML_FENCE {
                parse_toml_block(block)?
            } else {
                parse_yaml_block(block)?
            };
            return Ok(Document { fields, body });
        }
        offset += line.len();
    }
    Err(FolioError::content(format!(
        "front matter opened with '{fence}' is never closed"
    )))
}

fn first_line_len(source: &str) -> usize {
    source.find('\n').map_or(source.len(), |i| i + 1)
}

/// Parse a `+++` block with the TOML parser.
pub fn parse_toml_block(block: &str) -> FolioResult<BTreeMap<String, Value>> {
    let table: toml::Table = block
        .parse()
        .map_err(|e| FolioError::content(format!("invalid TOML front matter: {e}")))?;
    Ok(table
        .into_iter()
        .map(|(k, v)| (k, toml_to_json(v)))
        .collect())
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(t) => Value::Object(
            t.into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Parse a `---` block as YAML; the top level must be a mapping.
pub fn parse_yaml_block(block: &str) -> FolioResult<BTreeMap<String, Value>> {
    let blank = block.lines().all(|l| {
        let l = l.trim();
        l.is_empty() || l.starts_with('#')
    });
    if blank {
        return Ok(BTreeMap::new());
    }
    let fields: Option<BTreeMap<String, Value>> = serde_yaml::from_str(block)
        .map_err(|e| FolioError::content(format!("invalid YAML front matter: {e}")))?;
    Ok(fields.unwrap_or_default())
}

#[cfg(test)]
#[path = "../../tests/unit/content/frontmatter.rs"]
mod tests;
