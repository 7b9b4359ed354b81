//! Outline description.
//!
//! An [`Outline`] is static input: the ordered entries the assembler walks.
//! It deserializes from JSON so that a different report can be produced
//! with the same builders.

use crate::error::{Error, Result};
use crate::model::{CellValue, HeadingLevel, Metadata, TitlePage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_true() -> bool {
    true
}

fn default_level() -> HeadingLevel {
    HeadingLevel::One
}

fn default_hang() -> f32 {
    0.5
}

/// Ordered list of entries making up one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Document metadata; unset fields are filled from the title page
    #[serde(default)]
    pub metadata: Option<Metadata>,

    /// Entries in document order
    pub entries: Vec<Entry>,
}

impl Outline {
    /// Create an outline from entries.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            metadata: None,
            entries,
        }
    }

    /// Set metadata and return self.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Parse an outline from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Outline(e.to_string()))
    }

    /// Read and parse an outline file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| match e {
            Error::Outline(msg) => Error::Outline(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Serialize the outline as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Outline(e.to_string()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the outline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One outline entry. Each entry maps to one builder call, or to a short
/// fixed sequence of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    /// Title page composite
    TitlePage(TitlePage),

    /// Heading
    Heading {
        /// Heading text
        text: String,
        /// Heading level
        #[serde(default = "default_level")]
        level: HeadingLevel,
    },

    /// Body paragraph
    Paragraph {
        /// Paragraph text
        text: String,
        /// First-line indent flag
        #[serde(default = "default_true")]
        indent: bool,
    },

    /// Bullet list, one block per item
    Bullets {
        /// Items in order
        items: Vec<String>,
        /// Indent in inches; the builder default when absent
        #[serde(default)]
        indent: Option<f32>,
    },

    /// Table; the first row is the header
    Table {
        /// Rows of cell values
        rows: Vec<Vec<CellValue>>,
    },

    /// Reference list, one hanging-indent paragraph per entry
    References {
        /// Reference entries in order
        entries: Vec<String>,
        /// Hanging indent in inches
        #[serde(default = "default_hang")]
        hang: f32,
    },

    /// Detail expansion over groups of items
    Expansion(Expansion),

    /// `count` paragraphs from a template, `{n}` replaced by 1..=count
    Repeat {
        /// Paragraph template
        template: String,
        /// Number of paragraphs
        count: u32,
    },

    /// Forced page break
    PageBreak,
}

impl Entry {
    /// Level 1 heading.
    pub fn heading(text: impl Into<String>) -> Self {
        Entry::Heading {
            text: text.into(),
            level: HeadingLevel::One,
        }
    }

    /// Heading at the given level.
    pub fn heading_at(text: impl Into<String>, level: HeadingLevel) -> Self {
        Entry::Heading {
            text: text.into(),
            level,
        }
    }

    /// Indented body paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Entry::Paragraph {
            text: text.into(),
            indent: true,
        }
    }

    /// Bullet list at the default indent.
    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Entry::Bullets {
            items: items.into_iter().map(Into::into).collect(),
            indent: None,
        }
    }

    /// Table from rows of anything convertible to a cell value.
    pub fn table<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        Entry::Table {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Short name of the entry kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::TitlePage(_) => "title_page",
            Entry::Heading { .. } => "heading",
            Entry::Paragraph { .. } => "paragraph",
            Entry::Bullets { .. } => "bullets",
            Entry::Table { .. } => "table",
            Entry::References { .. } => "references",
            Entry::Expansion(_) => "expansion",
            Entry::Repeat { .. } => "repeat",
            Entry::PageBreak => "page_break",
        }
    }
}

/// Detail expansion: for each group, a level 2 heading, the items as
/// bullets, then one elaboration paragraph per item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expansion {
    /// Groups in order
    pub groups: Vec<DetailGroup>,

    /// Elaboration template; `{item}` is replaced by the item text
    pub template: String,
}

/// A titled group of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailGroup {
    /// Group heading; no heading is emitted when absent
    #[serde(default)]
    pub title: Option<String>,

    /// Items in order
    pub items: Vec<String>,
}

impl DetailGroup {
    /// Create a titled group.
    pub fn new<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: Some(title.into()),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a group without a heading.
    pub fn untitled<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: None,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let json = r#"{
            "entries": [
                {"type": "heading", "text": "Intro"},
                {"type": "paragraph", "text": "Body"},
                {"type": "bullets", "items": ["a", "b"], "indent": 0.0},
                {"type": "table", "rows": [["Tier", "Count"], ["Web", 3]]},
                {"type": "page_break"}
            ]
        }"#;
        let outline = Outline::from_json(json).unwrap();

        assert_eq!(outline.len(), 5);
        assert_eq!(outline.entries[0], Entry::heading("Intro"));
        assert_eq!(outline.entries[1], Entry::paragraph("Body"));
        assert_eq!(
            outline.entries[2],
            Entry::Bullets {
                items: vec!["a".into(), "b".into()],
                indent: Some(0.0)
            }
        );
        match &outline.entries[3] {
            Entry::Table { rows } => assert_eq!(rows[1][1], CellValue::Integer(3)),
            other => panic!("unexpected entry {:?}", other),
        }
        assert_eq!(outline.entries[4], Entry::PageBreak);
    }

    #[test]
    fn test_from_json_rejects_bad_level() {
        let json = r#"{"entries": [{"type": "heading", "text": "x", "level": 4}]}"#;
        assert!(matches!(Outline::from_json(json), Err(Error::Outline(_))));
    }

    #[test]
    fn test_from_json_rejects_unknown_type() {
        let json = r#"{"entries": [{"type": "image", "src": "x.png"}]}"#;
        assert!(matches!(Outline::from_json(json), Err(Error::Outline(_))));
    }

    #[test]
    fn test_to_json_round_trip() {
        let outline = Outline::new(vec![
            Entry::heading_at("Runbook", HeadingLevel::Two),
            Entry::Expansion(Expansion {
                groups: vec![DetailGroup::new("Checks", ["ELB", "ASG"])],
                template: "Detail: {item}".into(),
            }),
            Entry::Repeat {
                template: "[Step {n}]".into(),
                count: 3,
            },
        ])
        .with_metadata(Metadata::titled("Report"));

        let json = outline.to_json().unwrap();
        assert_eq!(Outline::from_json(&json).unwrap(), outline);
    }

    #[test]
    fn test_from_file_missing() {
        let result = Outline::from_file("/nonexistent/outline.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
