//! Document model types.
//!
//! This module defines the in-memory representation that block builders
//! produce and backends consume. It is format-agnostic: the same document
//! can be serialized as DOCX, Markdown, plain text or JSON.

mod block;
mod document;
mod paragraph;
mod style;
mod table;
mod title;

pub use block::{Block, BulletItem, Heading, HeadingLevel, BULLET_GLYPH};
pub use document::{Document, Metadata};
pub use paragraph::{Alignment, Paragraph, ParagraphStyle, TextRun, TextStyle};
pub use style::{Length, LineSpacing, StyleSheet, MAX_INCHES};
pub use table::{CellValue, Table, TableCell, TableRow};
pub use title::TitlePage;
