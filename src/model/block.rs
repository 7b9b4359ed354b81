//! Block-level types.

use super::{Alignment, Length, Paragraph, Table, TextStyle, TitlePage};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Glyph prefixed to every bullet item.
pub const BULLET_GLYPH: char = '•';

/// A content block in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Title page composite (ends with its own page break)
    Title(TitlePage),

    /// A leveled heading
    Heading(Heading),

    /// A body paragraph
    Paragraph(Paragraph),

    /// One bullet list entry
    BulletItem(BulletItem),

    /// A table
    Table(Table),

    /// A forced page break
    PageBreak,
}

impl Block {
    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a bullet item.
    pub fn is_bullet(&self) -> bool {
        matches!(self, Block::BulletItem(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Title(title) => title.plain_text(),
            Block::Heading(h) => h.text.clone(),
            Block::Paragraph(p) => p.plain_text(),
            Block::BulletItem(item) => item.line(),
            Block::Table(t) => t.plain_text(),
            Block::PageBreak => String::new(),
        }
    }
}

/// Heading level. Only three levels exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    /// Centered bold
    One,
    /// Left-aligned bold
    Two,
    /// Left-aligned bold italic
    Three,
}

impl HeadingLevel {
    /// Numeric level (1-3).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::One => 1,
            HeadingLevel::Two => 2,
            HeadingLevel::Three => 3,
        }
    }

    /// Alignment used for this level.
    pub fn alignment(self) -> Alignment {
        match self {
            HeadingLevel::One => Alignment::Center,
            HeadingLevel::Two | HeadingLevel::Three => Alignment::Left,
        }
    }

    /// Emphasis used for this level.
    pub fn emphasis(self) -> TextStyle {
        TextStyle {
            bold: true,
            italic: self == HeadingLevel::Three,
            font_size: None,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(HeadingLevel::One),
            2 => Ok(HeadingLevel::Two),
            3 => Ok(HeadingLevel::Three),
            other => Err(Error::InvalidHeadingLevel(other)),
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> u8 {
        level.as_u8()
    }
}

/// A heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text
    pub text: String,

    /// Heading level
    pub level: HeadingLevel,
}

impl Heading {
    /// Create a new heading.
    pub fn new(text: impl Into<String>, level: HeadingLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    /// Alignment derived from the level.
    pub fn alignment(&self) -> Alignment {
        self.level.alignment()
    }

    /// Emphasis derived from the level.
    pub fn emphasis(&self) -> TextStyle {
        self.level.emphasis()
    }
}

/// A single bullet list entry, rendered as its own indented line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletItem {
    /// Item text (without the glyph)
    pub text: String,

    /// Left indent of the line
    pub indent: Length,

    /// Bullet glyph
    pub marker: char,
}

impl BulletItem {
    /// Create a bullet item with the standard glyph.
    pub fn new(text: impl Into<String>, indent: Length) -> Self {
        Self {
            text: text.into(),
            indent,
            marker: BULLET_GLYPH,
        }
    }

    /// The rendered line: glyph, one space, then the text.
    pub fn line(&self) -> String {
        format!("{} {}", self.marker, self.text)
    }
}
