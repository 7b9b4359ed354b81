//! Document backends.
//!
//! A backend turns an assembled [`Document`] into the bytes of one output
//! artifact. Backends are registered in a [`BackendRegistry`] and looked
//! up by [`OutputFormat`] or by file extension.
//!
//! # Example
//!
//! ```
//! use reportforge::backend::{BackendRegistry, OutputFormat};
//!
//! let registry = BackendRegistry::with_defaults();
//! let backend = registry.for_path("report.md").unwrap();
//! assert_eq!(backend.format(), OutputFormat::Markdown);
//! ```

mod docx;
mod json;
mod markdown;
mod options;
mod text;

pub use docx::DocxBackend;
pub use json::{to_json, JsonBackend};
pub use markdown::{to_markdown, MarkdownBackend};
pub use options::{JsonFormat, RenderOptions, TableStyle};
pub use text::{to_text, TextBackend};

use crate::error::{Error, Result};
use crate::model::Document;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Output format of a backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Office Open XML word-processing document
    #[default]
    Docx,

    /// Markdown
    Markdown,

    /// Plain text
    Text,

    /// JSON structure
    Json,
}

impl OutputFormat {
    /// All formats, in registration order.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Docx,
        OutputFormat::Markdown,
        OutputFormat::Text,
        OutputFormat::Json,
    ];

    /// Canonical file extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// MIME type of the output.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }

    /// Resolve a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "docx" => Some(OutputFormat::Docx),
            "md" | "markdown" => Some(OutputFormat::Markdown),
            "txt" | "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Resolve a format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s).ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}

/// Trait for document backends.
///
/// Implement this trait to serialize documents into a new format.
pub trait DocumentBackend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the format this backend produces.
    fn format(&self) -> OutputFormat;

    /// Render the whole document into the bytes of one artifact.
    fn render(&self, doc: &Document) -> Result<Vec<u8>>;
}

/// Registry for document backends.
pub struct BackendRegistry {
    backends: HashMap<OutputFormat, Arc<dyn DocumentBackend>>,
}

impl BackendRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Create a registry with the built-in backends.
    pub fn with_defaults() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create a registry with the built-in backends using `options`.
    pub fn with_options(options: RenderOptions) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DocxBackend::new()));
        registry.register(Arc::new(MarkdownBackend::new(options.clone())));
        registry.register(Arc::new(TextBackend::new()));
        registry.register(Arc::new(JsonBackend::new(options.json_format)));
        registry
    }

    /// Register a backend, replacing any backend for the same format.
    pub fn register(&mut self, backend: Arc<dyn DocumentBackend>) {
        self.backends.insert(backend.format(), backend);
    }

    /// Get the backend for a format.
    pub fn get(&self, format: OutputFormat) -> Option<Arc<dyn DocumentBackend>> {
        self.backends.get(&format).cloned()
    }

    /// Get the backend for a file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentBackend>> {
        OutputFormat::from_extension(ext).and_then(|format| self.get(format))
    }

    /// Get the backend for a destination path, by its extension.
    pub fn for_path<P: AsRef<Path>>(&self, path: P) -> Result<Arc<dyn DocumentBackend>> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(format!("{} has no extension", path.display())))?;

        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
    }

    /// Check if a format is registered.
    pub fn supports(&self, format: OutputFormat) -> bool {
        self.backends.contains_key(&format)
    }

    /// Registered formats, in canonical order.
    pub fn formats(&self) -> Vec<OutputFormat> {
        OutputFormat::ALL
            .into_iter()
            .filter(|f| self.supports(*f))
            .collect()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_extension("DOCX"), Some(OutputFormat::Docx));
        assert_eq!(
            OutputFormat::from_extension("markdown"),
            Some(OutputFormat::Markdown)
        );
        assert_eq!(OutputFormat::from_extension("pdf"), None);
        assert_eq!(
            OutputFormat::from_path(Path::new("out/report.TXT")),
            Some(OutputFormat::Text)
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "odt".parse::<OutputFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_registry_new() {
        let registry = BackendRegistry::new();
        assert!(!registry.supports(OutputFormat::Docx));
        assert!(registry.formats().is_empty());
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = BackendRegistry::with_defaults();
        assert_eq!(registry.formats(), OutputFormat::ALL.to_vec());
        assert_eq!(
            registry.get_by_extension("md").unwrap().format(),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn test_registry_for_path() {
        let registry = BackendRegistry::with_defaults();
        assert_eq!(
            registry.for_path("Final Report.docx").unwrap().name(),
            "docx"
        );
        assert!(matches!(
            registry.for_path("report"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            registry.for_path("report.pdf"),
            Err(Error::UnsupportedFormat(_))
        ));
    }
}
