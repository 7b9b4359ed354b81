//! Markdown backend.

use crate::error::Result;
use crate::model::{
    Block, BulletItem, Document, Heading, HeadingLevel, Paragraph, Table, TableCell, TextRun,
    TextStyle,
};

use super::{DocumentBackend, OutputFormat, RenderOptions, TableStyle};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options);
    Ok(renderer.render(doc))
}

/// Serializes documents as Markdown files.
#[derive(Debug, Clone, Default)]
pub struct MarkdownBackend {
    options: RenderOptions,
}

impl MarkdownBackend {
    /// Create a new Markdown backend.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl DocumentBackend for MarkdownBackend {
    fn name(&self) -> &str {
        "markdown"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        let mut content = to_markdown(doc, &self.options)?;
        content.push('\n');
        Ok(content.into_bytes())
    }
}

struct MarkdownRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> MarkdownRenderer<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    fn render(&self, doc: &Document) -> String {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        let mut in_list = false;
        for block in doc.blocks() {
            // A list ends with a blank line before the next block.
            if in_list && !block.is_bullet() {
                output.push('\n');
            }
            in_list = block.is_bullet();
            self.render_block(&mut output, block);
        }

        output.trim().to_string()
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Title(title) => {
                for p in title.paragraphs().iter().filter(|p| !p.is_empty()) {
                    self.render_paragraph(output, p);
                }
                self.render_page_break(output);
            }
            Block::Heading(h) => self.render_heading(output, h),
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::BulletItem(item) => self.render_bullet(output, item),
            Block::Table(t) => match self.options.table_style {
                TableStyle::Markdown => self.render_table_markdown(output, t),
                TableStyle::Html => self.render_table_html(output, t),
            },
            Block::PageBreak => self.render_page_break(output),
        }
    }

    fn render_heading(&self, output: &mut String, heading: &Heading) {
        let prefix = "#".repeat(heading.level.as_u8() as usize);
        output.push_str(&prefix);
        output.push(' ');
        let text = self.escape(&heading.text);
        if heading.level == HeadingLevel::Three {
            output.push_str(&format!("***{}***", text));
        } else {
            output.push_str(&text);
        }
        output.push_str("\n\n");
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if para.is_empty() {
            return;
        }
        let mut text = String::new();
        for run in &para.runs {
            self.render_text_run(&mut text, run);
        }
        if self.options.escape_special_chars {
            text = text
                .split('\n')
                .map(escape_block_start)
                .collect::<Vec<_>>()
                .join("\n");
        }
        output.push_str(&text);
        output.push_str("\n\n");
    }

    fn render_bullet(&self, output: &mut String, item: &BulletItem) {
        output.push(self.options.list_marker);
        output.push(' ');
        output.push_str(&self.escape(&item.text));
        output.push('\n');
    }

    fn render_text_run(&self, output: &mut String, run: &TextRun) {
        let text = self.escape(&run.text).replace('\n', "  \n");
        output.push_str(&apply_text_style(&text, &run.style));
    }

    fn render_page_break(&self, output: &mut String) {
        if !self.options.page_break_marker.is_empty() {
            output.push_str(&self.options.page_break_marker);
            output.push_str("\n\n");
        }
    }

    fn render_table_markdown(&self, output: &mut String, table: &Table) {
        for (i, row) in table.rows().iter().enumerate() {
            output.push('|');
            for cell in &row.cells {
                let content = self.escape(&cell.text).replace('\n', " ");
                output.push_str(&format!(" {} |", content.trim()));
            }
            output.push('\n');

            if i + 1 == table.header_rows as usize {
                output.push('|');
                for _ in &row.cells {
                    output.push_str(" --- |");
                }
                output.push('\n');
            }
        }
        output.push('\n');
    }

    fn render_table_html(&self, output: &mut String, table: &Table) {
        output.push_str("<table>\n");

        if !table.header().is_empty() {
            output.push_str("<thead>\n");
            for row in table.header() {
                render_html_row(output, &row.cells, "th");
            }
            output.push_str("</thead>\n");
        }

        output.push_str("<tbody>\n");
        for row in table.body() {
            render_html_row(output, &row.cells, "td");
        }
        output.push_str("</tbody>\n");

        output.push_str("</table>\n\n");
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

fn render_html_row(output: &mut String, cells: &[TableCell], tag: &str) {
    output.push_str("<tr>");
    for cell in cells {
        output.push_str(&format!("<{0}>{1}</{0}>", tag, escape_html(&cell.text)));
    }
    output.push_str("</tr>\n");
}

fn apply_text_style(text: &str, style: &TextStyle) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let mut result = text.to_string();
    if style.italic {
        result = format!("*{}*", result);
    }
    if style.bold {
        result = format!("**{}**", result);
    }
    result
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

/// Escape a line start that would otherwise open a heading, quote, list
/// item or numbered list.
fn escape_block_start(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    if trimmed.starts_with(['#', '>', '-', '+']) {
        return format!("{}\\{}", indent, trimmed);
    }

    let digits = trimmed.len() - trimmed.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let rest = &trimmed[digits..];
    if digits > 0 && rest.starts_with(['.', ')']) {
        return format!("{}{}\\{}", indent, &trimmed[..digits], rest);
    }

    line.to_string()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::DocumentBuilder;
    use crate::model::{StyleSheet, TitlePage};

    fn builder() -> DocumentBuilder {
        DocumentBuilder::new(StyleSheet::default()).unwrap()
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("[link]"), "\\[link\\]");
        assert_eq!(escape_markdown("db_master_password"), "db\\_master\\_password");
    }

    #[test]
    fn test_escape_block_start() {
        assert_eq!(escape_block_start("# note"), "\\# note");
        assert_eq!(escape_block_start("- item"), "\\- item");
        assert_eq!(escape_block_start("> quote"), "\\> quote");
        assert_eq!(escape_block_start("+ plus"), "\\+ plus");
        assert_eq!(escape_block_start("1. Step"), "1\\. Step");
        assert_eq!(escape_block_start("12) Step"), "12\\) Step");
        assert_eq!(escape_block_start("2024 was busy"), "2024 was busy");
        assert_eq!(escape_block_start("Plain text"), "Plain text");
    }

    #[test]
    fn test_paragraph_block_markers_escaped() {
        let mut b = builder();
        b.paragraph_with_indent("1. Step", false)
            .paragraph_with_indent("# note\n- dash", false);
        let md = to_markdown(&b.finish(), &RenderOptions::default()).unwrap();
        assert_eq!(md, "1\\. Step\n\n\\# note  \n\\- dash");

        let mut b = builder();
        b.paragraph_with_indent("1. Step", false);
        let options = RenderOptions::new().with_escaping(false);
        let md = to_markdown(&b.finish(), &options).unwrap();
        assert_eq!(md, "1. Step");
    }

    #[test]
    fn test_render_headings_by_level() {
        let mut b = builder();
        b.heading("Intro", HeadingLevel::One)
            .heading("Runbook", HeadingLevel::Two)
            .heading("Detail", HeadingLevel::Three);
        let md = to_markdown(&b.finish(), &RenderOptions::default()).unwrap();

        assert!(md.contains("# Intro\n"));
        assert!(md.contains("## Runbook\n"));
        assert!(md.ends_with("### ***Detail***"));
    }

    #[test]
    fn test_render_bullets_and_paragraph() {
        let mut b = builder();
        b.bullets(["one", "two"]).paragraph("After the list.");
        let md = to_markdown(&b.finish(), &RenderOptions::default()).unwrap();
        assert_eq!(md, "- one\n- two\n\nAfter the list.");
    }

    #[test]
    fn test_render_table() {
        let mut b = builder();
        b.table([["Service", "Cost"], ["ELB", "~$18"]]).unwrap();
        let md = to_markdown(&b.finish(), &RenderOptions::default()).unwrap();
        assert_eq!(md, "| Service | Cost |\n| --- | --- |\n| ELB | ~$18 |");
    }

    #[test]
    fn test_render_table_html() {
        let mut b = builder();
        b.table([["A", "B"], ["1", "<2>"]]).unwrap();
        let options = RenderOptions::new().with_table_style(TableStyle::Html);
        let md = to_markdown(&b.finish(), &options).unwrap();
        assert!(md.contains("<thead>\n<tr><th>A</th><th>B</th></tr>"));
        assert!(md.contains("<td>&lt;2&gt;</td>"));
    }

    #[test]
    fn test_render_title_and_page_break() {
        let mut b = builder();
        b.title_page(TitlePage::new("Report\nSub", "Author", "Inst", "Course", "Date"))
            .heading("Summary", HeadingLevel::One);
        let md = to_markdown(&b.finish(), &RenderOptions::default()).unwrap();

        assert!(md.starts_with("**Report  \nSub**\n\nAuthor\n\nInst\n\nCourse\n\nDate\n\n\\newpage"));
        assert!(md.ends_with("# Summary"));
    }

    #[test]
    fn test_render_with_frontmatter() {
        let mut b = builder().with_metadata(crate::model::Metadata::titled("Test Doc"));
        b.paragraph("Body");
        let options = RenderOptions::new().with_frontmatter(true);
        let md = to_markdown(&b.finish(), &options).unwrap();
        assert!(md.starts_with("---\ntitle: \"Test Doc\""));
    }

    #[test]
    fn test_backend_render_bytes() {
        let mut b = builder();
        b.paragraph("Hello");
        let bytes = MarkdownBackend::default().render(&b.finish()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Hello\n");
    }
}
