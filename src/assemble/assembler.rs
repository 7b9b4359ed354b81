//! The document assembler.

use super::outline::{DetailGroup, Entry, Outline};
use crate::compose::DocumentBuilder;
use crate::error::{Error, Result};
use crate::model::{Document, HeadingLevel, Length, StyleSheet};

/// Placeholder for the item text in an elaboration template.
pub const ITEM_PLACEHOLDER: &str = "{item}";

/// Placeholder for the 1-based counter in a repeat template.
pub const COUNTER_PLACEHOLDER: &str = "{n}";

/// Walk `outline` in order and build the document it describes.
///
/// The style is installed before the first entry. A structural-input error
/// in any entry (such as a ragged table) aborts the run.
pub fn assemble(outline: &Outline, style: StyleSheet) -> Result<Document> {
    let mut builder = DocumentBuilder::new(style)?;
    if let Some(metadata) = &outline.metadata {
        builder = builder.with_metadata(metadata.clone());
    }

    for (index, entry) in outline.entries.iter().enumerate() {
        log::debug!("Outline entry {}: {}", index, entry.kind());
        apply(&mut builder, entry)?;
    }

    Ok(builder.finish())
}

fn apply(builder: &mut DocumentBuilder, entry: &Entry) -> Result<()> {
    match entry {
        Entry::TitlePage(title) => {
            builder.title_page(title.clone());
        }
        Entry::Heading { text, level } => {
            builder.heading(text.as_str(), *level);
        }
        Entry::Paragraph { text, indent } => {
            builder.paragraph_with_indent(text.as_str(), *indent);
        }
        Entry::Bullets { items, indent } => match indent {
            Some(inches) => {
                builder.bullets_indented(items, outline_length("bullet indent", *inches)?);
            }
            None => {
                builder.bullets(items);
            }
        },
        Entry::Table { rows } => {
            builder.table(rows)?;
        }
        Entry::References { entries, hang } => {
            let hang = outline_length("hanging indent", *hang)?;
            for reference in entries {
                builder.hanging_paragraph(reference.as_str(), hang);
            }
        }
        Entry::Expansion(expansion) => {
            expand_details(builder, &expansion.groups, &expansion.template);
        }
        Entry::Repeat { template, count } => {
            for n in 1..=*count {
                builder.paragraph(template.replace(COUNTER_PLACEHOLDER, &n.to_string()));
            }
        }
        Entry::PageBreak => {
            builder.page_break();
        }
    }
    Ok(())
}

fn outline_length(what: &str, inches: f32) -> Result<Length> {
    Length::try_inches(inches).ok_or_else(|| {
        Error::Outline(format!("{} out of range: {} inches", what, inches))
    })
}

/// Emit the detail expansion for `groups`.
///
/// For each group: a level 2 heading (when titled), the items as a bullet
/// list, then one indented paragraph per item from `template`.
pub fn expand_details<'a>(
    builder: &'a mut DocumentBuilder,
    groups: &[DetailGroup],
    template: &str,
) -> &'a mut DocumentBuilder {
    for group in groups {
        if let Some(title) = &group.title {
            builder.heading(title.as_str(), HeadingLevel::Two);
        }
        builder.bullets(&group.items);
        for item in &group.items {
            builder.paragraph(template.replace(ITEM_PLACEHOLDER, item));
        }
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::Expansion;
    use crate::model::{Block, Metadata, TitlePage};

    fn kinds(doc: &Document) -> Vec<&'static str> {
        doc.blocks()
            .iter()
            .map(|block| match block {
                Block::Title(_) => "title",
                Block::Heading(_) => "heading",
                Block::Paragraph(_) => "paragraph",
                Block::BulletItem(_) => "bullet",
                Block::Table(_) => "table",
                Block::PageBreak => "break",
            })
            .collect()
    }

    #[test]
    fn test_assemble_preserves_order() {
        let outline = Outline::new(vec![
            Entry::TitlePage(TitlePage::new("T", "A", "I", "C", "D")),
            Entry::heading("Summary"),
            Entry::paragraph("Body"),
            Entry::bullets(["x", "y"]),
            Entry::table([["H1", "H2"], ["a", "b"]]),
            Entry::PageBreak,
        ]);
        let doc = assemble(&outline, StyleSheet::default()).unwrap();

        assert_eq!(
            kinds(&doc),
            vec!["title", "heading", "paragraph", "bullet", "bullet", "table", "break"]
        );
        assert_eq!(doc.metadata.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_assemble_uses_outline_metadata() {
        let outline = Outline::new(vec![Entry::TitlePage(TitlePage::new(
            "T", "A", "I", "C", "D",
        ))])
        .with_metadata(Metadata::titled("Override"));
        let doc = assemble(&outline, StyleSheet::default()).unwrap();
        assert_eq!(doc.metadata.title.as_deref(), Some("Override"));
        assert_eq!(doc.metadata.author.as_deref(), Some("A"));
    }

    #[test]
    fn test_assemble_rejects_ragged_table() {
        let outline = Outline::new(vec![
            Entry::heading("Costs"),
            Entry::table(vec![vec!["a", "b"], vec!["c"]]),
        ]);
        let result = assemble(&outline, StyleSheet::default());
        assert!(matches!(result, Err(Error::RaggedTable { row: 1, .. })));
    }

    #[test]
    fn test_assemble_rejects_invalid_style() {
        let outline = Outline::new(vec![Entry::heading("x")]);
        let result = assemble(&outline, StyleSheet::default().with_font_size(0.0));
        assert!(matches!(result, Err(Error::InvalidStyle(_))));
    }

    #[test]
    fn test_expand_details() {
        let mut builder = DocumentBuilder::new(StyleSheet::default()).unwrap();
        let groups = vec![
            DetailGroup::new("Install", ["init", "plan", "apply"]),
            DetailGroup::new("Destroy", ["destroy"]),
        ];
        expand_details(&mut builder, &groups, "Detail: {item}.");
        let doc = builder.finish();

        // 2 headings + 4 bullets + 4 paragraphs
        assert_eq!(doc.block_count(), 10);
        assert_eq!(
            kinds(&doc),
            vec![
                "heading", "bullet", "bullet", "bullet", "paragraph", "paragraph", "paragraph",
                "heading", "bullet", "paragraph"
            ]
        );
        match &doc.blocks()[0] {
            Block::Heading(h) => assert_eq!(h.level, HeadingLevel::Two),
            other => panic!("unexpected block {:?}", other),
        }
        assert_eq!(doc.blocks()[5].plain_text(), "Detail: plan.");
    }

    #[test]
    fn test_expansion_untitled_group() {
        let outline = Outline::new(vec![Entry::Expansion(Expansion {
            groups: vec![DetailGroup::untitled(["AT-01", "AT-02"])],
            template: "Validation steps for {item}.".into(),
        })]);
        let doc = assemble(&outline, StyleSheet::default()).unwrap();
        assert_eq!(kinds(&doc), vec!["bullet", "bullet", "paragraph", "paragraph"]);
        assert_eq!(doc.blocks()[3].plain_text(), "Validation steps for AT-02.");
    }

    #[test]
    fn test_repeat_numbers_from_one() {
        let outline = Outline::new(vec![Entry::Repeat {
            template: "[Step {n}] log".into(),
            count: 3,
        }]);
        let doc = assemble(&outline, StyleSheet::default()).unwrap();
        let texts: Vec<String> = doc.blocks().iter().map(Block::plain_text).collect();
        assert_eq!(texts, vec!["[Step 1] log", "[Step 2] log", "[Step 3] log"]);
    }

    #[test]
    fn test_references_hanging_indent() {
        let outline = Outline::new(vec![Entry::References {
            entries: vec!["Fowler, M. (2002).".into()],
            hang: 0.5,
        }]);
        let doc = assemble(&outline, StyleSheet::default()).unwrap();
        match &doc.blocks()[0] {
            Block::Paragraph(p) => {
                assert_eq!(p.style.left_indent, Length::inches(0.5));
                assert_eq!(p.style.first_line_indent, -Length::inches(0.5));
            }
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_lengths_rejected() {
        let json = r#"{"entries": [{"type": "references", "entries": ["x"], "hang": -1e10}]}"#;
        let outline = Outline::from_json(json).unwrap();
        let result = assemble(&outline, StyleSheet::default());
        assert!(matches!(result, Err(Error::Outline(ref msg)) if msg.contains("hanging indent")));

        let outline = Outline::new(vec![Entry::Bullets {
            items: vec!["a".into()],
            indent: Some(f32::INFINITY),
        }]);
        assert!(matches!(
            assemble(&outline, StyleSheet::default()),
            Err(Error::Outline(_))
        ));
    }

    #[test]
    fn test_negative_hang_normalized() {
        let outline = Outline::new(vec![Entry::References {
            entries: vec!["Ref".into()],
            hang: -0.5,
        }]);
        let doc = assemble(&outline, StyleSheet::default()).unwrap();
        match &doc.blocks()[0] {
            Block::Paragraph(p) => assert_eq!(p.style.left_indent, Length::inches(0.5)),
            other => panic!("unexpected block {:?}", other),
        }
    }
}
