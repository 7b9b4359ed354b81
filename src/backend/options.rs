//! Rendering options for the text-based backends.

/// Options for rendering document content as Markdown, text or JSON.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with metadata (Markdown)
    pub include_frontmatter: bool,

    /// Marker written for page breaks (Markdown)
    pub page_break_marker: String,

    /// Character to use for list markers (Markdown)
    pub list_marker: char,

    /// Escape special Markdown characters
    pub escape_special_chars: bool,

    /// How tables are written (Markdown)
    pub table_style: TableStyle,

    /// JSON output layout
    pub json_format: JsonFormat,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the page break marker.
    pub fn with_page_break_marker(mut self, marker: impl Into<String>) -> Self {
        self.page_break_marker = marker.into();
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Set the table style.
    pub fn with_table_style(mut self, style: TableStyle) -> Self {
        self.table_style = style;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            page_break_marker: "\\newpage".to_string(),
            list_marker: '-',
            escape_special_chars: true,
            table_style: TableStyle::Markdown,
            json_format: JsonFormat::Pretty,
        }
    }
}

/// How tables are written in Markdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Pipe tables
    #[default]
    Markdown,
    /// HTML table tags (keeps header emphasis explicit)
    Html,
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}
