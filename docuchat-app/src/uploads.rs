//! Upload coordinator
//!
//! Manages the visible document list. Uploads in a batch run strictly
//! one at a time; a single failure does not abort the batch. Entries added
//! after a successful upload are tagged [`FileStatus::Optimistic`] and are
//! superseded by the authoritative server list fetched once per batch.
//!
//! Removal is split into two explicit operations instead of the original
//! UI's conflated one: [`hide_locally`] touches only local state, while
//! [`delete_remote`] calls the backend delete endpoint and reconciles.
//!
//! [`hide_locally`]: UploadCoordinator::hide_locally
//! [`delete_remote`]: UploadCoordinator::delete_remote

use std::path::{Path, PathBuf};
use std::sync::Arc;

use docuchat_client::RagBackend;
use docuchat_core::{DocuChatResult, FileStatus, Notice, UploadedFile};
use tracing::{debug, info, warn};

pub struct UploadCoordinator {
    backend: Arc<dyn RagBackend>,
    files: Vec<UploadedFile>,
    notices: Vec<Notice>,
    next_id: u64,
    uploading: bool,
}

impl UploadCoordinator {
    pub fn new(backend: Arc<dyn RagBackend>) -> Self {
        Self {
            backend,
            files: Vec::new(),
            notices: Vec::new(),
            next_id: 0,
            uploading: false,
        }
    }

    /// Accept a set of dropped or picked files for upload.
    ///
    /// Non-PDF files are rejected locally with a [`Notice::PdfOnly`] and
    /// never reach the network. The accepted files are uploaded
    /// sequentially; after the whole batch has been attempted the list is
    /// reconciled against the backend exactly once.
    pub async fn accept_files(&mut self, paths: &[PathBuf]) {
        self.accept_files_with_options(paths, false).await;
    }

    /// Like [`accept_files`], but `clear_old` asks the backend to wipe its
    /// vector store before ingesting the first file of the batch.
    ///
    /// [`accept_files`]: UploadCoordinator::accept_files
    pub async fn accept_files_with_options(&mut self, paths: &[PathBuf], clear_old: bool) {
        let (pdfs, rejected): (Vec<&PathBuf>, Vec<&PathBuf>) =
            paths.iter().partition(|p| is_pdf(p));

        if !rejected.is_empty() {
            self.notices.push(Notice::PdfOnly {
                rejected: rejected.iter().map(|p| display_name(p)).collect(),
            });
        }

        if pdfs.is_empty() {
            return;
        }

        self.uploading = true;
        for (index, path) in pdfs.iter().enumerate() {
            let name = display_name(path);
            match self.upload_one(path, clear_old && index == 0).await {
                Ok(entry) => {
                    info!(file = %entry.name, size = entry.size_bytes, "Uploaded document");
                    self.files.push(entry);
                }
                Err(e) => {
                    e.log();
                    self.notices.push(Notice::UploadFailed {
                        file: name,
                        reason: e.user_message(),
                    });
                }
            }
        }
        self.uploading = false;

        // The server list supersedes the optimistic entries added above
        if let Err(e) = self.reconcile().await {
            warn!(error = %e, "File list reconciliation failed after upload batch");
            self.notices.push(Notice::StaleFileList {
                reason: e.user_message(),
            });
        }
    }

    async fn upload_one(&mut self, path: &Path, clear_old: bool) -> DocuChatResult<UploadedFile> {
        let name = display_name(path);
        let bytes = tokio::fs::read(path).await?;
        let size_bytes = bytes.len() as u64;

        debug!(file = %name, "Uploading");
        self.backend.upload(&name, bytes, clear_old).await?;

        Ok(UploadedFile {
            id: self.fresh_id(),
            name,
            size_bytes,
            status: FileStatus::Optimistic,
        })
    }

    /// Replace the local list with the backend's authoritative one
    pub async fn reconcile(&mut self) -> DocuChatResult<()> {
        let listing = self.backend.list_files().await?;

        self.files = listing
            .files
            .into_iter()
            .map(|f| UploadedFile {
                id: self.fresh_id(),
                name: f.filename,
                size_bytes: f.size,
                status: FileStatus::Confirmed,
            })
            .collect();

        debug!(count = self.files.len(), "Reconciled file list");
        Ok(())
    }

    /// View-mount fetch of the file list. Failures are logged only; there
    /// is no optimistic state to go stale yet.
    pub async fn refresh(&mut self) {
        if let Err(e) = self.reconcile().await {
            warn!(error = %e, "Initial file list fetch failed");
        }
    }

    /// Remove an entry from the local list only. No network call is made
    /// and the backend keeps the document.
    pub fn hide_locally(&mut self, id: u64) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    /// Delete a document on the backend, then reconcile
    pub async fn delete_remote(&mut self, filename: &str) -> DocuChatResult<()> {
        self.backend.delete_file(filename).await?;
        self.reconcile().await
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Drain pending notices in the order they were raised
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// PDF acceptance rule: case-insensitive `.pdf` extension, matching the
/// backend's own allow-list
fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
