//! Document-level types.

use super::{Block, StyleSheet};
use crate::error::{Error, Result};
use crate::stats::DocumentStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An assembled document: one style sheet and an ordered block sequence.
///
/// Documents are produced by [`DocumentBuilder`](crate::compose::DocumentBuilder);
/// the block sequence is read-only once built. A deserialized document must
/// carry a valid style sheet, and its tables are checked as they are read.
///
/// `Document` is not `Clone`: persisting consumes it, so one document
/// yields at most one artifact.
///
/// ```compile_fail
/// fn require_clone<T: Clone>() {}
/// require_clone::<reportforge::Document>();
/// ```
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Default style inherited by every block
    style: StyleSheet,

    /// Blocks in outline order
    blocks: Vec<Block>,
}

impl Document {
    pub(crate) fn new(style: StyleSheet, metadata: Metadata) -> Self {
        Self {
            metadata,
            style,
            blocks: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub(crate) fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    /// The document's style sheet.
    pub fn style(&self) -> &StyleSheet {
        &self.style
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Count blocks by kind.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::from_document(self)
    }
}

/// Serialized form of a [`Document`].
#[derive(Deserialize)]
struct RawDocument {
    metadata: Metadata,
    style: StyleSheet,
    blocks: Vec<Block>,
}

impl TryFrom<RawDocument> for Document {
    type Error = Error;

    fn try_from(raw: RawDocument) -> Result<Self> {
        raw.style.validate()?;
        let mut doc = Document::new(raw.style, raw.metadata);
        doc.extend(raw.blocks);
        Ok(doc)
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Institution or affiliation
    pub institution: Option<String>,

    /// Subject or course label
    pub subject: Option<String>,

    /// Display date as written on the title page
    pub date: Option<String>,

    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Stamp the creation time with the current time.
    pub fn created_now(mut self) -> Self {
        self.created = Some(Utc::now());
        self
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if let Some(ref institution) = self.institution {
            lines.push(format!("institution: \"{}\"", escape_yaml(institution)));
        }
        if let Some(ref subject) = self.subject {
            lines.push(format!("subject: \"{}\"", escape_yaml(subject)));
        }
        if let Some(ref date) = self.date {
            lines.push(format!("date: \"{}\"", escape_yaml(date)));
        }
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
