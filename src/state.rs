use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::oneshot;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::file_entry::ListingSnapshot;
use crate::services::listing_service::Listing;

pub type TextReply = Option<String>;

pub struct AppState {
    pub root: PathBuf,
    pub listing: Mutex<Listing>,
    pub pending_prompts: Mutex<HashMap<String, oneshot::Sender<TextReply>>>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            root: config.browsing_root.clone(),
            listing: Mutex::new(Listing::new(config.browsing_root.clone())),
            pending_prompts: Mutex::new(HashMap::new()),
        }
    }

    pub fn listing(&self) -> MutexGuard<'_, Listing> {
        self.listing
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        self.listing().snapshot()
    }

    /// Opens a text prompt slot. The receiver resolves once the window
    /// answers, or with an error when the slot is abandoned.
    pub fn register_prompt(&self) -> (String, oneshot::Receiver<TextReply>) {
        let id = uuid::Uuid::new_v4().to_string();
        let (tx, rx) = oneshot::channel();
        self.prompts().insert(id.clone(), tx);
        (id, rx)
    }

    pub fn resolve_prompt(&self, id: &str, value: TextReply) -> Result<(), AppError> {
        let sender = self
            .prompts()
            .remove(id)
            .ok_or_else(|| AppError::General(format!("no pending prompt with id {id}")))?;
        // The waiting handler may have given up already.
        let _ = sender.send(value);
        Ok(())
    }

    pub fn abandon_prompt(&self, id: &str) {
        self.prompts().remove(id);
    }

    /// Drops every open prompt slot, so handlers still waiting on a window
    /// that has since reloaded see a cancel. Returns how many were dropped.
    pub fn abandon_all_prompts(&self) -> usize {
        let mut prompts = self.prompts();
        let dropped = prompts.len();
        prompts.clear();
        dropped
    }

    fn prompts(&self) -> MutexGuard<'_, HashMap<String, oneshot::Sender<TextReply>>> {
        self.pending_prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
