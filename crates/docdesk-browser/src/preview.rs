//! Preview routing for file entries.
//!
//! Whether a file opens inline or downloads directly is a pure function
//! of its mime category; navigation state plays no part.

use serde::{Deserialize, Serialize};

use docdesk_core::traits::DocumentUrls;
use docdesk_entity::item::FileEntry;
use docdesk_entity::mime::MimeCategory;

/// How a file should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewMode {
    /// Render the image inline.
    InlineImage,
    /// Embed the PDF inline.
    InlinePdf,
    /// Hand the URL to the browser as a download.
    DownloadOnly,
}

/// A resolved preview decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    /// Presentation mode.
    pub mode: PreviewMode,
    /// URL of the original file bytes.
    pub url: String,
}

/// Decide how to present a file and which URL serves it.
///
/// Images and PDFs resolve to an inline mode with the full-resolution
/// original; everything else is download-only. Thumbnails for grid
/// display come from [`FileEntry::thumbnail_url`].
pub fn resolve(entry: &FileEntry, urls: &dyn DocumentUrls) -> Preview {
    let mode = match entry.mime_category {
        MimeCategory::Image => PreviewMode::InlineImage,
        MimeCategory::Pdf => PreviewMode::InlinePdf,
        _ => PreviewMode::DownloadOnly,
    };
    Preview {
        mode,
        url: urls.download_url(entry.id, entry.parent_id),
    }
}
