//! Per-view application session
//!
//! An explicit state object owning the three slices instead of free-floating
//! globals. Lifecycle is view mount to unmount: one CLI chat invocation
//! creates one session, and nothing survives it.

use std::sync::Arc;

use docuchat_client::RagBackend;
use docuchat_core::ThemeId;
use tracing::info;

use crate::{ConversationStore, ThemeSelector, UploadCoordinator};

pub struct AppSession {
    pub conversation: ConversationStore,
    pub uploads: UploadCoordinator,
    pub theme: ThemeSelector,
}

impl AppSession {
    pub fn new(backend: Arc<dyn RagBackend>, initial_theme: ThemeId) -> Self {
        Self {
            conversation: ConversationStore::new(Arc::clone(&backend)),
            uploads: UploadCoordinator::new(backend),
            theme: ThemeSelector::new(initial_theme),
        }
    }

    /// View-mount initialization: fetch the authoritative file list. The
    /// conversation always starts empty.
    pub async fn initialize(&mut self) {
        info!("Initializing chat session");
        self.uploads.refresh().await;
    }
}
