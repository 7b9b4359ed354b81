//! # reportforge
//!
//! Structured document assembly for long, consistently styled reports.
//!
//! A document is built declaratively: one style sheet installed up front,
//! then headings, paragraphs, bullet lists, tables and page breaks appended
//! in outline order, then a single write through a document backend
//! (DOCX, Markdown, plain text or JSON).
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> reportforge::Result<()> {
//!     // Assemble the built-in report and write it to DEFAULT_OUTPUT_PATH
//!     let report = reportforge::generate_report()?;
//!     println!("{} bytes written to {}", report.bytes, report.path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Consuming builder**: style first, appends next, persist once
//! - **Typed validation**: ragged tables and bad heading levels are refused
//! - **Multiple output formats**: DOCX, Markdown, plain text, JSON
//! - **Data-driven outlines**: assemble any outline loaded from JSON
//! - **Atomic output**: the destination holds the whole file or nothing

pub mod assemble;
pub mod backend;
pub mod compose;
pub mod error;
pub mod model;
pub mod persist;
pub mod stats;

// Re-export commonly used types
pub use assemble::{assemble, capstone_report, DetailGroup, Entry, Expansion, Outline};
pub use backend::{
    BackendRegistry, DocumentBackend, DocxBackend, JsonBackend, JsonFormat, MarkdownBackend,
    OutputFormat, RenderOptions, TableStyle, TextBackend,
};
pub use compose::DocumentBuilder;
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, BulletItem, CellValue, Document, Heading, HeadingLevel, Length,
    LineSpacing, Metadata, Paragraph, StyleSheet, Table, TableCell, TableRow, TextRun, TextStyle,
    TitlePage,
};
pub use persist::{persist, PersistReport};
pub use stats::DocumentStats;

use std::path::Path;

/// Destination of [`generate_report`], relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "Final Project Report_JA.docx";

/// Assemble the built-in capstone report and write it to
/// [`DEFAULT_OUTPUT_PATH`] as DOCX.
///
/// This is the single no-argument entry point: style, assembly and one
/// persistence step, in that order.
pub fn generate_report() -> Result<PersistReport> {
    generate_report_to(DEFAULT_OUTPUT_PATH)
}

/// Assemble the built-in capstone report and write it to `path`.
///
/// The backend is chosen from the path's extension.
///
/// # Example
///
/// ```no_run
/// let report = reportforge::generate_report_to("out/report.md").unwrap();
/// assert_eq!(report.format, reportforge::OutputFormat::Markdown);
/// ```
pub fn generate_report_to<P: AsRef<Path>>(path: P) -> Result<PersistReport> {
    Reportforge::new().assemble()?.save(path)
}

/// Builder for assembling and writing documents.
///
/// # Example
///
/// ```no_run
/// use reportforge::{OutputFormat, Reportforge};
///
/// let report = Reportforge::new()
///     .with_font("Georgia")
///     .with_font_size(11.0)
///     .with_format(OutputFormat::Markdown)
///     .with_frontmatter()
///     .assemble()?
///     .save("report.md")?;
/// # Ok::<(), reportforge::Error>(())
/// ```
pub struct Reportforge {
    outline: Outline,
    style: StyleSheet,
    render_options: RenderOptions,
    format: Option<OutputFormat>,
}

impl Reportforge {
    /// Create a builder for the built-in capstone report.
    pub fn new() -> Self {
        Self {
            outline: capstone_report(),
            style: StyleSheet::default(),
            render_options: RenderOptions::default(),
            format: None,
        }
    }

    /// Assemble a different outline.
    pub fn with_outline(mut self, outline: Outline) -> Self {
        self.outline = outline;
        self
    }

    /// Replace the whole style sheet.
    pub fn with_style(mut self, style: StyleSheet) -> Self {
        self.style = style;
        self
    }

    /// Set the default font family.
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.style = self.style.with_font(name);
        self
    }

    /// Set the default font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.style = self.style.with_font_size(size);
        self
    }

    /// Set render options for the text-like backends.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Force an output format instead of inferring it from the path.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Assemble the outline into a document, stamping the creation time
    /// unless the outline metadata carries one.
    pub fn assemble(self) -> Result<Assembled> {
        let mut document = assemble(&self.outline, self.style)?;
        document
            .metadata
            .created
            .get_or_insert_with(chrono::Utc::now);
        Ok(Assembled {
            document,
            render_options: self.render_options,
            format: self.format,
        })
    }
}

impl Default for Reportforge {
    fn default() -> Self {
        Self::new()
    }
}

/// An assembled document waiting to be written.
pub struct Assembled {
    /// The assembled document
    pub document: Document,
    render_options: RenderOptions,
    format: Option<OutputFormat>,
}

impl Assembled {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        backend::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        backend::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        backend::to_json(&self.document, format)
    }

    /// Block statistics.
    pub fn stats(&self) -> DocumentStats {
        self.document.stats()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Write the document to `path`. Consumes the result, so a document
    /// is written at most once.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<PersistReport> {
        let path = path.as_ref();
        let registry = BackendRegistry::with_options(self.render_options);
        let backend = match self.format {
            Some(format) => registry
                .get(format)
                .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))?,
            None => registry.for_path(path)?,
        };
        persist(self.document, path, backend.as_ref())
    }
}
