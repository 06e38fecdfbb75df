//! # docdesk-client
//!
//! HTTP implementation of the [`DocumentService`] contract against the
//! back-office REST API. The browser core never sees this crate; it is
//! wired in by the host application.
//!
//! [`DocumentService`]: docdesk_core::traits::DocumentService

pub mod http;

pub use http::HttpDocumentService;
