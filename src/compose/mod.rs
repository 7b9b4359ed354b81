//! Document composition.
//!
//! [`DocumentBuilder`] is the only way to produce a [`Document`]. Creating
//! it installs the style sheet, so every block appended afterwards inherits
//! the same defaults. Finishing or saving consumes the builder, so nothing
//! can be appended after the document has been handed off.
//!
//! # Example
//!
//! ```
//! use reportforge::compose::DocumentBuilder;
//! use reportforge::model::{HeadingLevel, StyleSheet};
//!
//! fn main() -> reportforge::Result<()> {
//!     let mut builder = DocumentBuilder::new(StyleSheet::default())?;
//!     builder
//!         .heading("Executive Summary", HeadingLevel::One)
//!         .paragraph("This report documents the design.")
//!         .bullets(["Secure", "Scalable"]);
//!     builder.table([["Tier", "Components"], ["Web", "ELB, ASG"]])?;
//!
//!     let doc = builder.finish();
//!     assert_eq!(doc.block_count(), 5);
//!     Ok(())
//! }
//! ```

pub mod blocks;

pub use blocks::DEFAULT_INDENT;

use crate::backend::DocumentBackend;
use crate::error::Result;
use crate::model::{CellValue, Document, HeadingLevel, Length, Metadata, StyleSheet, TitlePage};
use crate::persist::{persist, PersistReport};
use std::path::Path;

/// Builder session for a single document.
#[derive(Debug)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    /// Start a document with the given default style.
    ///
    /// Fails if the style cannot serve as a document default; no document
    /// is created in that case.
    pub fn new(style: StyleSheet) -> Result<Self> {
        style.validate()?;
        log::debug!(
            "Initialized style '{}': {} {}pt, {:?} spacing",
            style.name,
            style.font_name,
            style.font_size,
            style.line_spacing
        );
        Ok(Self {
            doc: Document::new(style, Metadata::default()),
        })
    }

    /// Set document metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.doc.metadata = metadata;
        self
    }

    /// Append the title page composite.
    ///
    /// Metadata fields that are still unset are filled from the title page.
    pub fn title_page(&mut self, title: TitlePage) -> &mut Self {
        let meta = &mut self.doc.metadata;
        meta.title
            .get_or_insert_with(|| title.title.replace('\n', " "));
        meta.author.get_or_insert_with(|| title.author.clone());
        meta.institution
            .get_or_insert_with(|| title.institution.clone());
        meta.subject.get_or_insert_with(|| title.course.clone());
        meta.date.get_or_insert_with(|| title.date.clone());

        self.doc.push(blocks::title_page(title));
        self
    }

    /// Append a heading.
    pub fn heading(&mut self, text: impl Into<String>, level: HeadingLevel) -> &mut Self {
        self.doc.push(blocks::heading(text, level));
        self
    }

    /// Append a body paragraph with the default first-line indent.
    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.paragraph_with_indent(text, true)
    }

    /// Append a body paragraph, first-line indented only if `indent` is set.
    pub fn paragraph_with_indent(&mut self, text: impl Into<String>, indent: bool) -> &mut Self {
        self.doc.push(blocks::paragraph(text, indent));
        self
    }

    /// Append a paragraph with a hanging indent.
    pub fn hanging_paragraph(&mut self, text: impl Into<String>, hang: Length) -> &mut Self {
        self.doc.push(blocks::hanging_paragraph(text, hang));
        self
    }

    /// Append one bullet item per entry, at the default indent.
    pub fn bullets<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets_indented(items, DEFAULT_INDENT)
    }

    /// Append one bullet item per entry, at the given indent.
    pub fn bullets_indented<I, S>(&mut self, items: I, indent: Length) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = blocks::bullet_list(items, indent);
        log::debug!("Appending {} bullet items", items.len());
        self.doc.extend(items);
        self
    }

    /// Append a table. The first row is the header row.
    ///
    /// Ragged or empty input is refused and leaves the document unchanged.
    pub fn table<R, C>(&mut self, rows: R) -> Result<&mut Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        match blocks::table(rows) {
            Ok(block) => {
                self.doc.push(block);
                Ok(self)
            }
            Err(e) => {
                log::warn!("Refusing table: {}", e);
                Err(e)
            }
        }
    }

    /// Append a forced page break.
    pub fn page_break(&mut self) -> &mut Self {
        self.doc.push(blocks::page_break());
        self
    }

    /// The style every block inherits.
    pub fn style(&self) -> &StyleSheet {
        self.doc.style()
    }

    /// Number of blocks appended so far.
    pub fn block_count(&self) -> usize {
        self.doc.block_count()
    }

    /// Finish the session and return the document.
    pub fn finish(self) -> Document {
        log::debug!("Finished document with {} blocks", self.doc.block_count());
        self.doc
    }

    /// Finish the session and persist the document through `backend`.
    pub fn save<P: AsRef<Path>>(
        self,
        path: P,
        backend: &dyn DocumentBackend,
    ) -> Result<PersistReport> {
        persist(self.finish(), path, backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Block, LineSpacing};

    fn builder() -> DocumentBuilder {
        DocumentBuilder::new(StyleSheet::default()).unwrap()
    }

    #[test]
    fn test_invalid_style_rejected() {
        let result = DocumentBuilder::new(StyleSheet::default().with_font(""));
        assert!(matches!(result, Err(Error::InvalidStyle(_))));
    }

    #[test]
    fn test_style_unchanged_by_appends() {
        let mut b = builder();
        let before = b.style().clone();
        for i in 0..50 {
            b.heading(format!("H{}", i), HeadingLevel::Two)
                .paragraph("text")
                .bullets(["a", "b"]);
        }
        let doc = b.finish();
        assert_eq!(doc.style(), &before);
        assert_eq!(doc.style().line_spacing, LineSpacing::Double);
        assert_eq!(doc.block_count(), 200);
    }

    #[test]
    fn test_blocks_appended_in_order() {
        let mut b = builder();
        b.heading("Intro", HeadingLevel::One)
            .paragraph("p1")
            .bullets(["x", "y"])
            .page_break()
            .paragraph_with_indent("p2", false);
        let doc = b.finish();

        let kinds: Vec<&str> = doc
            .blocks()
            .iter()
            .map(|block| match block {
                Block::Heading(_) => "heading",
                Block::Paragraph(_) => "paragraph",
                Block::BulletItem(_) => "bullet",
                Block::PageBreak => "break",
                Block::Table(_) => "table",
                Block::Title(_) => "title",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["heading", "paragraph", "bullet", "bullet", "break", "paragraph"]
        );
    }

    #[test]
    fn test_ragged_table_leaves_document_unchanged() {
        let mut b = builder();
        b.heading("Costs", HeadingLevel::One);
        let result = b.table(vec![vec!["Service", "Cost"], vec!["EC2"]]);
        assert!(matches!(result, Err(Error::RaggedTable { row: 1, .. })));
        assert_eq!(b.block_count(), 1);

        // The caller may skip the bad table and keep going.
        b.paragraph("after");
        assert_eq!(b.block_count(), 2);
    }

    #[test]
    fn test_empty_bullets_append_nothing() {
        let mut b = builder();
        b.bullets(Vec::<&str>::new());
        assert_eq!(b.block_count(), 0);
    }

    #[test]
    fn test_title_page_fills_metadata() {
        let mut b = builder().with_metadata(Metadata::titled("Custom"));
        b.title_page(TitlePage::new("T\nSub", "Author", "Inst", "Course", "Date"));
        let doc = b.finish();

        assert_eq!(doc.metadata.title.as_deref(), Some("Custom"));
        assert_eq!(doc.metadata.author.as_deref(), Some("Author"));
        assert_eq!(doc.metadata.subject.as_deref(), Some("Course"));
        assert!(matches!(doc.blocks()[0], Block::Title(_)));
    }
}
