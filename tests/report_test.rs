//! End-to-end tests for the built-in capstone report.

use reportforge::assemble::{assemble, capstone_report};
use reportforge::model::{Alignment, Block, HeadingLevel, LineSpacing, StyleSheet};
use reportforge::{generate_report_to, OutputFormat};
use std::io::Read;

fn capstone() -> reportforge::Document {
    assemble(&capstone_report(), StyleSheet::default()).unwrap()
}

fn heading_index(blocks: &[Block], text: &str) -> usize {
    blocks
        .iter()
        .position(|b| matches!(b, Block::Heading(h) if h.text == text))
        .unwrap_or_else(|| panic!("heading {:?} not found", text))
}

#[test]
fn test_capstone_block_counts() {
    let doc = capstone();
    let stats = doc.stats();

    assert_eq!(doc.block_count(), 210);
    assert_eq!(stats.title_pages, 1);
    assert_eq!(stats.headings_by_level, [29, 4, 0]);
    assert_eq!(stats.paragraph_count, 64);
    assert_eq!(stats.bullet_count, 106);
    assert_eq!(stats.table_count, 5);
    assert_eq!(stats.page_break_count, 1);
    assert_eq!(stats.block_count(), 210);
}

#[test]
fn test_capstone_front_matter() {
    let doc = capstone();
    let blocks = doc.blocks();

    assert!(matches!(blocks[0], Block::Title(_)));
    assert_eq!(blocks[1].plain_text(), "Executive Summary");
    assert!(blocks[2].is_paragraph());
    assert_eq!(blocks[3].plain_text(), "Table of Contents");

    let toc: Vec<&Block> = blocks[4..26].iter().collect();
    assert!(toc.iter().all(|b| b.is_bullet()));
    assert_eq!(toc[0].plain_text(), "• 1. Introduction");
    assert_eq!(toc[21].plain_text(), "• Appendices");
    match toc[0] {
        Block::BulletItem(item) => assert!(item.indent.is_zero()),
        other => panic!("unexpected block {:?}", other),
    }
    assert_eq!(blocks[26], Block::PageBreak);
    assert_eq!(blocks[27].plain_text(), "1. Introduction");
}

#[test]
fn test_capstone_sections_in_order() {
    let doc = capstone();
    let blocks = doc.blocks();

    let mut last = 0;
    for n in 1..=20 {
        let index = blocks
            .iter()
            .position(|b| match b {
                Block::Heading(h) => h.text.starts_with(&format!("{}. ", n)),
                _ => false,
            })
            .unwrap_or_else(|| panic!("section {} missing", n));
        assert!(index > last, "section {} out of order", n);
        last = index;
    }

    let references = heading_index(blocks, "References");
    assert!(references > last);
    for letter in ['A', 'B', 'C', 'D', 'E', 'F'] {
        let prefix = format!("Appendix {}:", letter);
        let index = blocks
            .iter()
            .position(|b| matches!(b, Block::Heading(h) if h.text.starts_with(&prefix)))
            .unwrap_or_else(|| panic!("appendix {} missing", letter));
        assert!(index > references);
    }
}

#[test]
fn test_capstone_requirements_items_distinct() {
    let doc = capstone();
    let blocks = doc.blocks();
    let start = heading_index(blocks, "4. Requirements") + 1;

    let items: Vec<String> = blocks[start..start + 5]
        .iter()
        .map(Block::plain_text)
        .collect();
    assert_eq!(items[3], "• Region: us-east-1");
    assert_eq!(items[4], "• Runtime: PHP 7.4, Aurora MySQL 8.x");
    assert!(blocks[start + 5].is_heading());
}

#[test]
fn test_capstone_references_hanging() {
    let doc = capstone();
    let blocks = doc.blocks();
    let start = heading_index(blocks, "References") + 1;

    for block in &blocks[start..start + 8] {
        match block {
            Block::Paragraph(p) => {
                assert!(p.style.left_indent.twips() > 0);
                assert_eq!(p.style.first_line_indent, -p.style.left_indent);
            }
            other => panic!("unexpected block {:?}", other),
        }
    }
    assert!(blocks[start + 8].is_heading());
}

#[test]
fn test_capstone_expansion_appendix() {
    let doc = capstone();
    let blocks = doc.blocks();
    let start = heading_index(blocks, "Appendix C: Deployment Procedures and Logs (Sample)");
    let end = heading_index(blocks, "Appendix D: Code Excerpts (Summaries)");
    let section = &blocks[start + 2..end];

    // 3 group headings + 20 bullets + 20 elaborations, then the log heading + 20 entries
    assert_eq!(section.len(), 3 + 20 + 20 + 1 + 20);

    let level_two: Vec<String> = section
        .iter()
        .filter_map(|b| match b {
            Block::Heading(h) if h.level == HeadingLevel::Two => Some(h.text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        level_two,
        vec![
            "Runbook: Jenkins Install Flow",
            "Runbook: Destroy Flow (Emergency Cleanup)",
            "Operational Checks",
            "Sample Jenkins Console Output (Annotated)",
        ]
    );

    assert_eq!(
        section[10].plain_text(),
        "Detail: Pre-check: Verify aws-credentials and tf-db-password exist in Jenkins Credentials. \
         \u{2014} Procedure, expected outputs, error handling, and rollback steps."
    );

    let logs = &section[section.len() - 20..];
    assert!(logs[0].plain_text().starts_with("[Step 1] "));
    assert!(logs[19].plain_text().starts_with("[Step 20] "));
}

#[test]
fn test_capstone_risk_register_table() {
    let doc = capstone();
    let blocks = doc.blocks();
    let index = heading_index(blocks, "Appendix E: Risk Register") + 1;

    match &blocks[index] {
        Block::Table(t) => {
            assert_eq!(t.row_count(), 6);
            assert_eq!(t.column_count(), 4);
            assert!(t.rows()[0].is_header);
            assert_eq!(t.alignment, Alignment::Center);
        }
        other => panic!("unexpected block {:?}", other),
    }
}

#[test]
fn test_capstone_style_defaults() {
    let doc = capstone();
    assert_eq!(doc.style().font_name, "Times New Roman");
    assert_eq!(doc.style().font_size, 12.0);
    assert_eq!(doc.style().line_spacing, LineSpacing::Double);
    assert!(doc.style().space_after.is_zero());
}

#[test]
fn test_generate_report_docx() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Final Project Report_JA.docx");

    let report = generate_report_to(&path).unwrap();
    assert_eq!(report.format, OutputFormat::Docx);
    assert!(report.bytes > 0);

    let file = std::fs::File::open(&path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();

    assert!(xml.contains("Executive Summary"));
    assert!(xml.contains("Appendix F: Acceptance Test Cases"));
    assert!(xml.contains("Terraform: Up &amp; running"));
}

#[test]
fn test_generate_report_markdown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.md");

    generate_report_to(&path).unwrap();
    let md = std::fs::read_to_string(&path).unwrap();

    assert!(md.contains("# Executive Summary"));
    assert!(md.contains("## Operational Checks"));
    assert!(md.contains("| ID | Risk | Severity | Mitigation |"));
}
