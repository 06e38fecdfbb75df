//! Reqwest-backed document service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use docdesk_core::config::service::ServiceConfig;
use docdesk_core::error::AppError;
use docdesk_core::result::AppResult;
use docdesk_core::traits::{
    CreateFolderRequest, DeleteRequest, DocumentService, DocumentUrls, UploadOutcome,
    UploadRequest,
};
use docdesk_core::types::{NodeId, TreeNode};

/// Document service backed by the back-office REST API.
#[derive(Debug, Clone)]
pub struct HttpDocumentService {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpDocumentService {
    /// Build a client from endpoint configuration.
    pub fn new(config: &ServiceConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to build HTTP client: {e}"))
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        let response = self
            .authorized(req)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Request failed: {e}")))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => AppError::not_found(service_message(&detail, status)),
            StatusCode::CONFLICT => AppError::conflict(service_message(&detail, status)),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::validation(service_message(&detail, status))
            }
            _ => AppError::external_service(service_message(&detail, status)),
        })
    }
}

/// Pull a human-readable message out of an error body, falling back to
/// the status line.
fn service_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| format!("Document service returned {status}"))
}

impl DocumentUrls for HttpDocumentService {
    fn download_url(&self, node_id: NodeId, parent_id: Option<NodeId>) -> String {
        match parent_id {
            Some(parent) => self.url(&format!(
                "/api/documents/{node_id}/download?parentId={parent}"
            )),
            None => self.url(&format!("/api/documents/{node_id}/download")),
        }
    }

    fn thumbnail_url(&self, node_id: NodeId, parent_id: Option<NodeId>) -> String {
        match parent_id {
            Some(parent) => self.url(&format!(
                "/api/documents/{node_id}/thumbnail?parentId={parent}"
            )),
            None => self.url(&format!("/api/documents/{node_id}/thumbnail")),
        }
    }
}

#[async_trait]
impl DocumentService for HttpDocumentService {
    async fn list_tree(&self) -> AppResult<Vec<TreeNode>> {
        let response = self
            .send(self.client.get(self.url("/api/documents/tree")))
            .await?;
        let tree: Vec<TreeNode> = response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("Malformed tree response: {e}")))?;
        debug!(roots = tree.len(), "Fetched document tree");
        Ok(tree)
    }

    async fn create_folder(&self, req: CreateFolderRequest) -> AppResult<()> {
        self.send(
            self.client
                .post(self.url("/api/documents/folders"))
                .json(&req),
        )
        .await?;
        Ok(())
    }

    async fn upload(&self, req: UploadRequest) -> AppResult<UploadOutcome> {
        let form = Form::new()
            .part("file", Part::bytes(req.data.to_vec()).file_name(req.file_name.clone()))
            .text("targetFolderId", req.target_folder_id.to_string())
            .text("overwriteConfirmed", req.overwrite_confirmed.to_string());

        let result = self
            .send(
                self.client
                    .post(self.url("/api/documents/files"))
                    .multipart(form),
            )
            .await;

        match result {
            Ok(_) => Ok(UploadOutcome::Completed),
            // The service answers 409 when a file with the same name
            // exists and the overwrite flag was not set.
            Err(e) if e.kind == docdesk_core::error::ErrorKind::Conflict => {
                Ok(UploadOutcome::ConfirmOverwrite)
            }
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, req: DeleteRequest) -> AppResult<()> {
        let mut url = self.url(&format!(
            "/api/documents/{}?isFile={}",
            req.node_id, req.is_file
        ));
        if let Some(parent) = req.parent_id {
            url.push_str(&format!("&parentId={parent}"));
        }
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
