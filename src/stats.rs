//! Block statistics for an assembled document.

use crate::model::{Block, Document, HeadingLevel};
use serde::{Deserialize, Serialize};

/// Counts of the blocks in a document, by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of title page composites
    pub title_pages: u32,

    /// Number of headings, all levels
    pub heading_count: u32,

    /// Headings per level (index 0 = level 1)
    pub headings_by_level: [u32; 3],

    /// Number of body paragraphs
    pub paragraph_count: u32,

    /// Number of bullet items
    pub bullet_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Total rows across all tables
    pub table_row_count: u32,

    /// Number of explicit page breaks (title page breaks excluded)
    pub page_break_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in doc.blocks() {
            stats.add_block(block);
        }
        stats
    }

    /// Account for one block.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Title(_) => self.title_pages += 1,
            Block::Heading(h) => self.add_heading(h.level),
            Block::Paragraph(_) => self.paragraph_count += 1,
            Block::BulletItem(_) => self.bullet_count += 1,
            Block::Table(t) => {
                self.table_count += 1;
                self.table_row_count += t.row_count() as u32;
            }
            Block::PageBreak => self.page_break_count += 1,
        }
        self.count_text(&block.plain_text());
    }

    /// Increment heading counts.
    pub fn add_heading(&mut self, level: HeadingLevel) {
        self.heading_count += 1;
        self.headings_by_level[level.as_u8() as usize - 1] += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.title_pages
            + self.heading_count
            + self.paragraph_count
            + self.bullet_count
            + self.table_count
            + self.page_break_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &DocumentStats) {
        self.title_pages += other.title_pages;
        self.heading_count += other.heading_count;
        for (mine, theirs) in self
            .headings_by_level
            .iter_mut()
            .zip(other.headings_by_level)
        {
            *mine += theirs;
        }
        self.paragraph_count += other.paragraph_count;
        self.bullet_count += other.bullet_count;
        self.table_count += other.table_count;
        self.table_row_count += other.table_row_count;
        self.page_break_count += other.page_break_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
