//! Title page composite.

use super::{Alignment, Paragraph, TextRun, TextStyle};
use serde::{Deserialize, Serialize};

fn default_spacer_lines() -> usize {
    6
}

fn default_title_size() -> f32 {
    16.0
}

/// The title page: spacer lines, a centered bold title, then centered
/// metadata lines. It always ends with a forced page break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitlePage {
    /// Title text; `\n` separates title lines
    pub title: String,

    /// Author line
    pub author: String,

    /// Institution or affiliation line
    pub institution: String,

    /// Course or label line
    pub course: String,

    /// Date line
    pub date: String,

    /// Blank lines above the title
    #[serde(default = "default_spacer_lines")]
    pub spacer_lines: usize,

    /// Title font size in points
    #[serde(default = "default_title_size")]
    pub title_size: f32,
}

impl TitlePage {
    /// Create a title page with the default spacing and title size.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        institution: impl Into<String>,
        course: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            institution: institution.into(),
            course: course.into(),
            date: date.into(),
            spacer_lines: default_spacer_lines(),
            title_size: default_title_size(),
        }
    }

    /// The metadata lines in display order.
    pub fn metadata_lines(&self) -> [&str; 4] {
        [&self.author, &self.institution, &self.course, &self.date]
    }

    /// Lower the title page into the paragraphs it is made of.
    ///
    /// The trailing page break is not included; renderers emit it after
    /// these paragraphs.
    pub fn paragraphs(&self) -> Vec<Paragraph> {
        let mut out = Vec::with_capacity(self.spacer_lines + 6);

        out.extend((0..self.spacer_lines).map(|_| Paragraph::new()));

        let mut title = Paragraph::new().align(Alignment::Center);
        title.add_run(TextRun::styled(
            self.title.clone(),
            TextStyle {
                bold: true,
                italic: false,
                font_size: Some(self.title_size),
            },
        ));
        out.push(title);

        out.push(Paragraph::new().align(Alignment::Center));

        for line in self.metadata_lines() {
            out.push(Paragraph::with_text(line).align(Alignment::Center));
        }

        out
    }

    /// Get plain text content of the title page.
    pub fn plain_text(&self) -> String {
        let mut lines = vec![self.title.clone()];
        lines.extend(self.metadata_lines().iter().map(|l| l.to_string()));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TitlePage {
        TitlePage::new(
            "Final Report\nSubtitle",
            "A. Author",
            "Institute",
            "Capstone Project",
            "November 29, 2025",
        )
    }

    #[test]
    fn test_title_page_layout() {
        let paragraphs = sample().paragraphs();
        // 6 spacers + title + blank + 4 metadata lines
        assert_eq!(paragraphs.len(), 12);
        assert!(paragraphs[..6].iter().all(|p| p.is_empty()));

        let title = &paragraphs[6];
        assert_eq!(title.style.alignment, Alignment::Center);
        assert!(title.runs[0].style.bold);
        assert_eq!(title.runs[0].style.font_size, Some(16.0));
        assert_eq!(title.plain_text(), "Final Report\nSubtitle");

        assert!(paragraphs[7].is_empty());
        assert_eq!(paragraphs[7].style.alignment, Alignment::Center);
        assert_eq!(paragraphs[8].plain_text(), "A. Author");
        assert_eq!(paragraphs[11].plain_text(), "November 29, 2025");
        assert!(paragraphs[8..]
            .iter()
            .all(|p| p.style.alignment == Alignment::Center));
    }

    #[test]
    fn test_title_page_defaults_from_json() {
        let json = r#"{"title":"T","author":"A","institution":"I","course":"C","date":"D"}"#;
        let page: TitlePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.spacer_lines, 6);
        assert_eq!(page.title_size, 16.0);
    }
}
