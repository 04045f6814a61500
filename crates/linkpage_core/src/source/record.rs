//! Typed raw record parsed from one link file.
//!
//! Accepted section value shapes:
//! - mapping `description: url`
//! - sequence of one-pair mappings `- description: url`
//! - sequence of pairs `- [description, url]`
//! - null (section with no links yet)

use crate::model::entry::Entry;
use crate::source::diagnostic::render_yaml_error;
use crate::source::node::YamlNode;
use crate::source::{SourceError, SourceResult};

/// Origin label used for records that did not come from a file.
pub const MEMORY_ORIGIN: &str = "<memory>";

/// One header and its entries, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub header: String,
    pub entries: Vec<Entry>,
}

/// All sections from one source, tagged with where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub origin: String,
    pub sections: Vec<RawSection>,
}

impl RawRecord {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            sections: Vec::new(),
        }
    }

    /// Appends one section; convenient for building records in code.
    pub fn with_section<D, U>(
        mut self,
        header: impl Into<String>,
        entries: impl IntoIterator<Item = (D, U)>,
    ) -> Self
    where
        D: Into<String>,
        U: Into<String>,
    {
        self.sections.push(RawSection {
            header: header.into(),
            entries: entries
                .into_iter()
                .map(|(description, url)| Entry::new(description, url))
                .collect(),
        });
        self
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|section| section.entries.len()).sum()
    }

    /// Parses YAML link-file text.
    ///
    /// Repeated headers and repeated descriptions are kept as separate
    /// sections and entries so that the merge can report them.
    ///
    /// # Errors
    /// - `SourceError::Yaml` when the text is not YAML (with a caret snippet
    ///   when the parser knows the location).
    /// - `SourceError::InvalidShape` when the document is not a mapping of
    ///   headers to one of the accepted link shapes.
    pub fn from_yaml_str(origin: impl Into<String>, text: &str) -> SourceResult<Self> {
        let origin = origin.into();
        let document: YamlNode = match serde_yaml::from_str(text) {
            Ok(node) => node,
            Err(source) => {
                let snippet = render_yaml_error(&origin, text, &source);
                return Err(SourceError::Yaml {
                    origin,
                    source,
                    snippet,
                });
            }
        };

        let pairs = match document {
            YamlNode::Null => return Ok(Self::new(origin)),
            YamlNode::Mapping(pairs) => pairs,
            other => {
                return Err(SourceError::InvalidShape {
                    origin,
                    header: None,
                    detail: format!("top level must be a mapping, found {}", other.kind()),
                })
            }
        };

        let mut record = Self::new(origin);
        for (key, value) in &pairs {
            let Some(header) = key.scalar_text() else {
                return Err(SourceError::InvalidShape {
                    origin: record.origin,
                    header: None,
                    detail: format!("section header must be a scalar, found {}", key.kind()),
                });
            };
            let entries = match parse_entries(value) {
                Ok(entries) => entries,
                Err(detail) => {
                    return Err(SourceError::InvalidShape {
                        origin: record.origin,
                        header: Some(header),
                        detail,
                    })
                }
            };
            record.sections.push(RawSection { header, entries });
        }
        Ok(record)
    }
}

fn parse_entries(value: &YamlNode) -> Result<Vec<Entry>, String> {
    match value {
        YamlNode::Null => Ok(Vec::new()),
        YamlNode::Mapping(pairs) => pairs
            .iter()
            .map(|(description, url)| entry_from_pair(description, url))
            .collect(),
        YamlNode::Sequence(items) => items.iter().map(entry_from_item).collect(),
        other => Err(format!(
            "expected a mapping or list of links, found {}",
            other.kind()
        )),
    }
}

fn entry_from_item(item: &YamlNode) -> Result<Entry, String> {
    match item {
        YamlNode::Mapping(pairs) => match pairs.as_slice() {
            [(description, url)] => entry_from_pair(description, url),
            _ => Err(format!(
                "list item must hold exactly one `description: url` pair, found {}",
                pairs.len()
            )),
        },
        YamlNode::Sequence(pair) => match pair.as_slice() {
            [description, url] => entry_from_pair(description, url),
            _ => Err(format!(
                "list item must be a [description, url] pair, found {} elements",
                pair.len()
            )),
        },
        other => Err(format!("unsupported list item: {}", other.kind())),
    }
}

fn entry_from_pair(description: &YamlNode, url: &YamlNode) -> Result<Entry, String> {
    let description = description
        .scalar_text()
        .ok_or_else(|| format!("description must be a scalar, found {}", description.kind()))?;
    let url = match url {
        YamlNode::Null => return Err(format!("link `{description}` has no url")),
        other => other.scalar_text().ok_or_else(|| {
            format!("url of `{description}` must be a scalar, found {}", other.kind())
        })?,
    };
    Ok(Entry { description, url })
}
