//! DOCX backend: WordprocessingML parts in a zip container.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{DocumentBackend, OutputFormat};
use crate::error::Result;
use crate::model::{
    Alignment, Block, BulletItem, Document, Heading, Metadata, Paragraph, ParagraphStyle,
    StyleSheet, Table, TextRun, TextStyle,
};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Usable text width of a Letter page with 1" margins, in twips.
const TEXT_WIDTH: i32 = 9360;

/// Style id of the grid table style.
const TABLE_GRID: &str = "TableGrid";

/// Serializes documents as `.docx` files.
#[derive(Debug, Clone, Default)]
pub struct DocxBackend;

impl DocxBackend {
    /// Create a new DOCX backend.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentBackend for DocxBackend {
    fn name(&self) -> &str {
        "docx"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Docx
    }

    fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        let parts = [
            ("[Content_Types].xml", content_types_xml().to_string()),
            ("_rels/.rels", rels_xml().to_string()),
            ("docProps/core.xml", core_xml(&doc.metadata)),
            ("word/document.xml", document_xml(doc)),
            ("word/_rels/document.xml.rels", word_rels_xml().to_string()),
            ("word/styles.xml", styles_xml(doc.style())),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let opt = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, xml) in &parts {
            zip.start_file(*name, opt)?;
            zip.write_all(xml.as_bytes())?;
        }

        let cursor = zip.finish()?;
        let bytes = cursor.into_inner();
        log::debug!("DOCX package: {} parts, {} bytes", parts.len(), bytes.len());
        Ok(bytes)
    }
}

fn document_xml(doc: &Document) -> String {
    let mut body = String::new();
    let mut previous_was_table = false;

    for block in doc.blocks() {
        match block {
            Block::Title(title) => {
                for p in title.paragraphs() {
                    write_paragraph(&mut body, &p);
                }
                write_page_break(&mut body);
            }
            Block::Heading(h) => write_heading(&mut body, h),
            Block::Paragraph(p) => write_paragraph(&mut body, p),
            Block::BulletItem(item) => write_bullet(&mut body, item),
            Block::Table(t) => {
                // Adjacent tables would be merged by word processors.
                if previous_was_table {
                    body.push_str("<w:p/>");
                }
                write_table(&mut body, t);
            }
            Block::PageBreak => write_page_break(&mut body),
        }
        previous_was_table = block.is_table();
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}" xmlns:r="{R_NS}">
  <w:body>
    {body}
    <w:sectPr>
      <w:pgSz w:w="12240" w:h="15840"/>
      <w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>
      <w:cols w:space="720"/>
      <w:docGrid w:linePitch="360"/>
    </w:sectPr>
  </w:body>
</w:document>"#
    )
}

fn write_heading(out: &mut String, heading: &Heading) {
    out.push_str("<w:p><w:pPr><w:keepNext/>");
    push_jc(out, heading.alignment());
    out.push_str("</w:pPr>");
    write_run(out, &heading.text, &heading.emphasis());
    out.push_str("</w:p>");
}

fn write_paragraph(out: &mut String, para: &Paragraph) {
    out.push_str("<w:p>");
    write_paragraph_properties(out, &para.style);
    for run in &para.runs {
        write_text_run(out, run);
    }
    out.push_str("</w:p>");
}

fn write_bullet(out: &mut String, item: &BulletItem) {
    let style = ParagraphStyle {
        left_indent: item.indent,
        ..Default::default()
    };
    out.push_str("<w:p>");
    write_paragraph_properties(out, &style);
    write_run(out, &item.line(), &TextStyle::default());
    out.push_str("</w:p>");
}

fn write_paragraph_properties(out: &mut String, style: &ParagraphStyle) {
    out.push_str("<w:pPr>");

    let left = style.left_indent.twips();
    let first = style.first_line_indent.twips();
    if left != 0 || first != 0 {
        out.push_str("<w:ind");
        if left != 0 {
            out.push_str(&format!(r#" w:left="{}""#, left));
        }
        if first > 0 {
            out.push_str(&format!(r#" w:firstLine="{}""#, first));
        } else if first < 0 {
            out.push_str(&format!(r#" w:hanging="{}""#, -first));
        }
        out.push_str("/>");
    }

    push_jc(out, style.alignment);
    out.push_str("</w:pPr>");
}

fn push_jc(out: &mut String, alignment: Alignment) {
    out.push_str(&format!(r#"<w:jc w:val="{}"/>"#, alignment.as_ooxml()));
}

fn write_text_run(out: &mut String, run: &TextRun) {
    write_run(out, &run.text, &run.style);
}

fn write_run(out: &mut String, text: &str, style: &TextStyle) {
    out.push_str("<w:r>");

    if style.bold || style.italic || style.font_size.is_some() {
        out.push_str("<w:rPr>");
        if style.bold {
            out.push_str("<w:b/>");
        }
        if style.italic {
            out.push_str("<w:i/>");
        }
        if let Some(size) = style.font_size {
            let half_points = (size * 2.0).round() as u32;
            out.push_str(&format!(
                r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#,
                half_points
            ));
        }
        out.push_str("</w:rPr>");
    }

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<w:br/>");
        }
        if !line.is_empty() {
            out.push_str(r#"<w:t xml:space="preserve">"#);
            out.push_str(&xml_escape(line));
            out.push_str("</w:t>");
        }
    }

    out.push_str("</w:r>");
}

fn write_page_break(out: &mut String) {
    out.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
}

fn write_table(out: &mut String, table: &Table) {
    let columns = table.column_count().max(1);
    let col_width = TEXT_WIDTH / columns as i32;

    out.push_str("<w:tbl><w:tblPr>");
    if table.grid_lines {
        out.push_str(&format!(r#"<w:tblStyle w:val="{}"/>"#, TABLE_GRID));
    }
    out.push_str(r#"<w:tblW w:w="0" w:type="auto"/>"#);
    push_jc(out, table.alignment);
    if table.grid_lines {
        out.push_str(&table_borders());
    }
    out.push_str(r#"<w:tblLook w:val="04A0"/></w:tblPr><w:tblGrid>"#);
    for _ in 0..columns {
        out.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, col_width));
    }
    out.push_str("</w:tblGrid>");

    for row in table.rows() {
        out.push_str("<w:tr>");
        if row.is_header {
            out.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }
        let emphasis = TextStyle {
            bold: row.is_header,
            ..Default::default()
        };
        for cell in &row.cells {
            out.push_str(&format!(
                r#"<w:tc><w:tcPr><w:tcW w:w="{}" w:type="dxa"/></w:tcPr><w:p>"#,
                col_width
            ));
            write_run(out, &cell.text, &emphasis);
            out.push_str("</w:p></w:tc>");
        }
        out.push_str("</w:tr>");
    }

    out.push_str("</w:tbl>");
}

fn table_borders() -> String {
    let mut borders = String::from("<w:tblBorders>");
    for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        borders.push_str(&format!(
            r#"<w:{} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            edge
        ));
    }
    borders.push_str("</w:tblBorders>");
    borders
}

fn style_id(style: &StyleSheet) -> String {
    style.name.chars().filter(|c| !c.is_whitespace()).collect()
}

fn styles_xml(style: &StyleSheet) -> String {
    let font = xml_escape(&style.font_name);
    let size = style.half_points();
    let spacing = format!(
        r#"<w:spacing w:before="{}" w:after="{}" w:line="{}" w:lineRule="auto"/>"#,
        style.space_before.twips(),
        style.space_after.twips(),
        style.line_spacing.line_value()
    );
    let fonts = format!(
        r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:eastAsia="{0}" w:cs="{0}"/>"#,
        font
    );

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{W_NS}">
  <w:docDefaults>
    <w:rPrDefault><w:rPr>{fonts}<w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr></w:rPrDefault>
    <w:pPrDefault><w:pPr>{spacing}</w:pPr></w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="{id}">
    <w:name w:val="{name}"/>
    <w:qFormat/>
    <w:pPr>{spacing}</w:pPr>
    <w:rPr>{fonts}<w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr>
  </w:style>
  <w:style w:type="table" w:default="1" w:styleId="TableNormal">
    <w:name w:val="Normal Table"/>
    <w:tblPr>
      <w:tblInd w:w="0" w:type="dxa"/>
      <w:tblCellMar>
        <w:top w:w="0" w:type="dxa"/>
        <w:left w:w="108" w:type="dxa"/>
        <w:bottom w:w="0" w:type="dxa"/>
        <w:right w:w="108" w:type="dxa"/>
      </w:tblCellMar>
    </w:tblPr>
  </w:style>
  <w:style w:type="table" w:styleId="{grid}">
    <w:name w:val="Table Grid"/>
    <w:basedOn w:val="TableNormal"/>
    <w:tblPr>{borders}</w:tblPr>
  </w:style>
</w:styles>"#,
        id = xml_escape(&style_id(style)),
        name = xml_escape(&style.name),
        grid = TABLE_GRID,
        borders = table_borders(),
    )
}

fn core_xml(metadata: &Metadata) -> String {
    let mut props = String::new();
    let mut push = |tag: &str, value: &Option<String>| {
        if let Some(v) = value {
            props.push_str(&format!("<{0}>{1}</{0}>", tag, xml_escape(v)));
        }
    };
    push("dc:title", &metadata.title);
    push("dc:creator", &metadata.author);
    push("dc:subject", &metadata.subject);
    push("dc:description", &metadata.institution);

    if let Some(created) = metadata.created {
        props.push_str(&format!(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            created.format("%Y-%m-%dT%H:%M:%SZ")
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">{props}</cp:coreProperties>"#
    )
}

fn content_types_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>"#
}

fn rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#
}

fn word_rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#
}

/// Escape text for XML content and attribute values, dropping characters
/// XML 1.0 cannot represent.
fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {}
            c => out.push(c),
        }
    }
    out
}
