//! Plain text backend.

use crate::error::Result;
use crate::model::{Alignment, Block, Document, Length, Paragraph};

use super::{DocumentBackend, OutputFormat};

/// Spaces written per half inch of indentation.
const SPACES_PER_HALF_INCH: usize = 2;

/// Form feed, written for page breaks.
const PAGE_BREAK: char = '\u{c}';

/// Convert a document to plain text.
pub fn to_text(doc: &Document) -> Result<String> {
    let mut output = String::new();

    for block in doc.blocks() {
        match block {
            Block::Title(title) => {
                for p in title.paragraphs() {
                    push_paragraph(&mut output, &p);
                }
                output.push(PAGE_BREAK);
                output.push('\n');
            }
            Block::Heading(h) => {
                output.push_str(&h.text);
                output.push_str("\n\n");
            }
            Block::Paragraph(p) => push_paragraph(&mut output, p),
            Block::BulletItem(item) => {
                output.push_str(&indent(item.indent));
                output.push_str(&item.line());
                output.push('\n');
            }
            Block::Table(t) => {
                output.push_str(&t.plain_text());
                output.push_str("\n\n");
            }
            Block::PageBreak => {
                output.push(PAGE_BREAK);
                output.push('\n');
            }
        }
    }

    Ok(output.trim_end().to_string())
}

fn push_paragraph(output: &mut String, para: &Paragraph) {
    let first = para.style.left_indent.twips() + para.style.first_line_indent.twips();
    let text = para.plain_text();
    if para.style.alignment == Alignment::Left && first > 0 {
        output.push_str(&indent(Length::from_twips(first)));
    }
    output.push_str(&text);
    output.push_str("\n\n");
}

fn indent(length: Length) -> String {
    let half_inches = (length.as_inches() * 2.0).round().max(0.0) as usize;
    " ".repeat(half_inches * SPACES_PER_HALF_INCH)
}

/// Serializes documents as plain text files.
#[derive(Debug, Clone, Default)]
pub struct TextBackend;

impl TextBackend {
    /// Create a new text backend.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentBackend for TextBackend {
    fn name(&self) -> &str {
        "text"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        let mut content = to_text(doc)?;
        content.push('\n');
        Ok(content.into_bytes())
    }
}
