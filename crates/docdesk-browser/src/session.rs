//! The browser session: one mounted document browser.
//!
//! Owns the tree snapshot, the navigator, and the fetch generation
//! counter. All state transitions are synchronous; the only suspension
//! points are the tree fetch and the mutation calls on the document
//! service. There is no optimistic local mutation: folder/file changes
//! become visible only once a refetched tree reflects them, so displayed
//! state always matches server state.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info};

use docdesk_core::config::upload::UploadConfig;
use docdesk_core::error::AppError;
use docdesk_core::result::AppResult;
use docdesk_core::traits::{
    CreateFolderRequest, DeleteRequest, DocumentService, UploadOutcome, UploadRequest,
};
use docdesk_core::types::{NodeId, TreeNode};
use docdesk_entity::item::{FileEntry, FileItem};
use docdesk_entity::view::ViewMode;

use crate::index::TreeIndex;
use crate::navigator::{Breadcrumb, Column, ColumnNavigator};
use crate::preview::{self, Preview};
use crate::reconcile;

/// One live browser instance bound to a document service.
pub struct BrowserSession<S: DocumentService> {
    service: Arc<S>,
    upload_limits: UploadConfig,
    index: TreeIndex,
    navigator: ColumnNavigator,
    /// Generation of the most recently issued tree fetch.
    issued_generation: u64,
    /// Generation of the snapshot currently applied.
    applied_generation: u64,
}

impl<S: DocumentService> BrowserSession<S> {
    /// Fetch the initial tree and open the browser at the partitioned
    /// root.
    pub async fn connect(
        service: Arc<S>,
        upload_limits: UploadConfig,
        view: ViewMode,
    ) -> AppResult<Self> {
        let nodes = service.list_tree().await?;
        let index = TreeIndex::build(&nodes)?;
        let navigator = ColumnNavigator::new(view, &index);
        info!(nodes = index.len(), %view, "Browser session connected");
        Ok(Self {
            service,
            upload_limits,
            index,
            navigator,
            issued_generation: 1,
            applied_generation: 1,
        })
    }

    /// The open columns, root first.
    pub fn columns(&self) -> &[Column] {
        self.navigator.columns()
    }

    /// The breadcrumb trail, root sentinel first.
    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        self.navigator.breadcrumbs()
    }

    /// The active view partition.
    pub fn view(&self) -> ViewMode {
        self.navigator.view()
    }

    /// The implicit upload target: the deepest open folder, if any.
    ///
    /// The host application uses this to enable or disable its upload
    /// action.
    pub fn current_folder_id(&self) -> Option<NodeId> {
        self.navigator.current_folder_id()
    }

    /// Open a folder from the given column.
    pub fn descend(&mut self, item: &FileItem, at_column: usize) {
        self.navigator.descend(item, at_column, &self.index);
    }

    /// Jump to a breadcrumb entry.
    pub fn jump_to_breadcrumb(&mut self, index_pos: usize) {
        self.navigator.jump_to_breadcrumb(index_pos, &self.index);
    }

    /// Switch the view partition.
    pub fn switch_view(&mut self, view: ViewMode) {
        self.navigator.switch_view(view, &self.index);
    }

    /// Decide how to present a file.
    pub fn preview(&self, entry: &FileEntry) -> Preview {
        preview::resolve(entry, self.service.as_ref())
    }

    /// Thumbnail URL for grid display, for inline-previewable files only.
    pub fn thumbnail_url(&self, entry: &FileEntry) -> Option<String> {
        entry.thumbnail_url(self.service.as_ref())
    }

    /// Issue a new fetch generation.
    ///
    /// Every tree fetch is stamped before the request goes out; a
    /// response whose stamp is older than the latest issued one has been
    /// superseded and must be discarded (last-write-wins by issuance
    /// order, not response arrival order).
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_generation += 1;
        self.issued_generation
    }

    /// Apply a fetched tree snapshot, reconciling navigation state.
    ///
    /// Returns `false` when the snapshot was superseded and discarded.
    pub fn apply_snapshot(&mut self, generation: u64, nodes: &[TreeNode]) -> AppResult<bool> {
        if generation < self.issued_generation || generation <= self.applied_generation {
            debug!(
                generation,
                latest = self.issued_generation,
                "Discarding superseded tree snapshot"
            );
            return Ok(false);
        }
        let index = TreeIndex::build(nodes)?;
        self.index = index;
        self.applied_generation = generation;
        let survived = reconcile::reconcile(&mut self.navigator, &self.index);
        debug!(
            generation,
            nodes = self.index.len(),
            survived, "Applied tree snapshot"
        );
        Ok(true)
    }

    /// Refetch the tree and reconcile navigation against it.
    ///
    /// On failure the columns and breadcrumbs are left untouched so the
    /// user can retry without losing position.
    pub async fn refresh(&mut self) -> AppResult<()> {
        let generation = self.begin_fetch();
        let nodes = self.service.list_tree().await?;
        self.apply_snapshot(generation, &nodes)?;
        Ok(())
    }

    /// Create a top-level folder and refresh.
    pub async fn create_folder(&mut self, name: &str, is_public: bool) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }
        self.service
            .create_folder(CreateFolderRequest {
                name: name.to_string(),
                is_public,
            })
            .await?;
        info!(name, is_public, "Folder created");
        self.refresh().await
    }

    /// Upload one file into the deepest open folder.
    ///
    /// Oversized files are rejected before any network call. A name
    /// conflict comes back as [`UploadOutcome::ConfirmOverwrite`]; the
    /// caller decides and re-issues with `overwrite_confirmed` set.
    pub async fn upload(
        &mut self,
        file_name: &str,
        data: Bytes,
        overwrite_confirmed: bool,
    ) -> AppResult<UploadOutcome> {
        let Some(target_folder_id) = self.current_folder_id() else {
            return Err(AppError::validation("Select a folder before uploading"));
        };
        if file_name.trim().is_empty() {
            return Err(AppError::validation("File name cannot be empty"));
        }
        if data.len() as u64 > self.upload_limits.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.upload_limits.max_upload_size_bytes
            )));
        }

        let outcome = self
            .service
            .upload(UploadRequest {
                file_name: file_name.to_string(),
                data,
                target_folder_id,
                overwrite_confirmed,
            })
            .await?;

        match outcome {
            UploadOutcome::Completed => {
                info!(file_name, folder = %target_folder_id, "Upload completed");
                self.refresh().await?;
            }
            UploadOutcome::ConfirmOverwrite => {
                debug!(file_name, "Upload needs overwrite confirmation");
            }
        }
        Ok(outcome)
    }

    /// Delete a file or folder and refresh.
    ///
    /// If the deleted folder was open, reconciliation snaps navigation to
    /// its deepest surviving ancestor.
    pub async fn delete(&mut self, item: &FileItem) -> AppResult<()> {
        self.service
            .delete(DeleteRequest {
                node_id: item.id(),
                parent_id: item.parent_id(),
                is_file: !item.is_folder(),
            })
            .await?;
        info!(node = %item.id(), name = item.name(), "Node deleted");
        self.refresh().await
    }
}
