//! Upload limit configuration.

use serde::{Deserialize, Serialize};

/// Client-side upload limits.
///
/// The size ceiling is enforced before any network call is issued; an
/// oversized file is rejected with a validation error rather than a
/// failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum upload size in bytes (default 10 MiB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}
