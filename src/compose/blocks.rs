//! Stateless block builders.
//!
//! Each function turns plain inputs into one block (or, for bullet lists,
//! one block per item). None of them touch a document; the
//! [`DocumentBuilder`](super::DocumentBuilder) appends what they return.

use crate::error::Result;
use crate::model::{
    Alignment, Block, BulletItem, CellValue, Heading, HeadingLevel, Length, Paragraph, Table,
    TitlePage,
};

/// Default first-line indent for body paragraphs and default bullet indent.
pub const DEFAULT_INDENT: Length = Length::from_twips(720);

/// Build a heading block. Alignment and emphasis follow from `level`.
pub fn heading(text: impl Into<String>, level: HeadingLevel) -> Block {
    Block::Heading(Heading::new(text, level))
}

/// Build a left-aligned body paragraph, optionally first-line indented.
pub fn paragraph(text: impl Into<String>, indent: bool) -> Block {
    let mut p = Paragraph::with_text(text).align(Alignment::Left);
    if indent {
        p = p.first_line_indent(DEFAULT_INDENT);
    }
    Block::Paragraph(p)
}

/// Build a paragraph with a hanging indent of `hang`, as used for
/// reference lists.
pub fn hanging_paragraph(text: impl Into<String>, hang: Length) -> Block {
    let hang = hang.abs();
    Block::Paragraph(
        Paragraph::with_text(text)
            .align(Alignment::Left)
            .left_indent(hang)
            .first_line_indent(-hang),
    )
}

/// Build one bullet block per item, in input order.
pub fn bullet_list<I, S>(items: I, indent: Length) -> Vec<Block>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items
        .into_iter()
        .map(|item| Block::BulletItem(BulletItem::new(item, indent)))
        .collect()
}

/// Build a table block. The first row becomes the bold header row.
///
/// Ragged or empty input is rejected before any block exists.
pub fn table<R, C>(rows: R) -> Result<Block>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: Into<CellValue>,
{
    Table::from_rows(rows).map(Block::Table)
}

/// Build the title page composite.
pub fn title_page(title: TitlePage) -> Block {
    Block::Title(title)
}

/// Build a forced page break.
pub fn page_break() -> Block {
    Block::PageBreak
}
