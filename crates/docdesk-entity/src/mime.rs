//! Mime categorisation inferred from file extensions.

use serde::{Deserialize, Serialize};

/// Coarse mime category used for icon selection and preview routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeCategory {
    /// Raster or vector image.
    Image,
    /// PDF document.
    Pdf,
    /// Office-style document.
    Document,
    /// Compressed archive.
    Archive,
    /// Plain-text material.
    Text,
    /// Anything unrecognized.
    File,
}

impl MimeCategory {
    /// Infer the category from a lowercase file extension.
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some("png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "svg") => Self::Image,
            Some("pdf") => Self::Pdf,
            Some("doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "odt" | "ods") => {
                Self::Document
            }
            Some("zip" | "rar" | "7z" | "tar" | "gz") => Self::Archive,
            Some("txt" | "md" | "csv" | "json" | "log") => Self::Text,
            _ => Self::File,
        }
    }

    /// Whether this category can be shown inline (image or PDF).
    pub fn is_inline_previewable(&self) -> bool {
        matches!(self, Self::Image | Self::Pdf)
    }
}
