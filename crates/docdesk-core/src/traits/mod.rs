//! Core traits defined in `docdesk-core` and implemented by other crates.

pub mod document_service;

pub use document_service::{
    CreateFolderRequest, DeleteRequest, DocumentService, DocumentUrls, UploadOutcome,
    UploadRequest,
};
