//! JSON backend.

use crate::error::{Error, Result};
use crate::model::Document;

use super::{DocumentBackend, JsonFormat, OutputFormat};

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Serializes documents as JSON files.
#[derive(Debug, Clone, Default)]
pub struct JsonBackend {
    format: JsonFormat,
}

impl JsonBackend {
    /// Create a new JSON backend.
    pub fn new(format: JsonFormat) -> Self {
        Self { format }
    }
}

impl DocumentBackend for JsonBackend {
    fn name(&self) -> &str {
        "json"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        to_json(doc, self.format).map(String::into_bytes)
    }
}
