use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::error::AppError;
use crate::services::file_service;
use crate::services::listing_service::Listing;
use crate::shell::prompt::Prompt;

const ERROR_TITLE: &str = "Error";
const DESTINATION_TITLE: &str = "Select Destination Directory";
const NO_MATCHES: &str = "No matching files found.";

#[derive(Debug)]
pub enum ActionOutcome {
    /// The filesystem call succeeded and the listing was refreshed, or a
    /// result dialog was shown.
    Completed,
    /// A precondition was not met (no selection, empty or cancelled input).
    /// Nothing was shown.
    Skipped,
    /// An error dialog naming the item was shown.
    Failed(AppError),
}

impl ActionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Skipped => "skipped",
            Self::Failed(_) => "failed",
        }
    }
}

/// One handler per window action. Handlers hold no state between calls; the
/// listing lock is taken only to read the selection and to refresh, never
/// while a dialog is open.
pub struct Controller<'a, P: Prompt + ?Sized> {
    root: PathBuf,
    listing: &'a Mutex<Listing>,
    prompt: &'a P,
}

impl<'a, P: Prompt + ?Sized> Controller<'a, P> {
    pub fn new(listing: &'a Mutex<Listing>, prompt: &'a P) -> Self {
        let root = lock(listing).root().to_path_buf();
        Self {
            root,
            listing,
            prompt,
        }
    }

    pub fn create(&self) -> ActionOutcome {
        let Some(name) = self.ask_non_empty("Create", "Enter a name for the new item:") else {
            return ActionOutcome::Skipped;
        };
        self.mutate(|| file_service::make_directory(&self.root, &name))
    }

    pub fn rename(&self) -> ActionOutcome {
        let Some(selected) = self.selection() else {
            return ActionOutcome::Skipped;
        };
        let Some(new_name) = self.ask_non_empty("Rename", &format!("Rename '{selected}' to:"))
        else {
            return ActionOutcome::Skipped;
        };
        self.mutate(|| file_service::rename(&self.root, &selected, &new_name))
    }

    pub fn delete(&self) -> ActionOutcome {
        let Some(selected) = self.selection() else {
            return ActionOutcome::Skipped;
        };
        self.mutate(|| file_service::remove(&self.root, &selected))
    }

    pub fn copy(&self) -> ActionOutcome {
        let Some(selected) = self.selection() else {
            return ActionOutcome::Skipped;
        };
        let Some(destination) = self.prompt.ask_directory(DESTINATION_TITLE) else {
            return ActionOutcome::Skipped;
        };
        self.mutate(|| file_service::copy(&self.root, &selected, &destination))
    }

    pub fn move_selected(&self) -> ActionOutcome {
        let Some(selected) = self.selection() else {
            return ActionOutcome::Skipped;
        };
        let Some(destination) = self.prompt.ask_directory(DESTINATION_TITLE) else {
            return ActionOutcome::Skipped;
        };
        self.mutate(|| file_service::move_item(&self.root, &selected, &destination))
    }

    pub fn search(&self) -> ActionOutcome {
        let Some(term) = self.ask_non_empty("Search", "Enter search term:") else {
            return ActionOutcome::Skipped;
        };

        let matches = file_service::search(&self.root, &term);
        debug!(term = %term, matches = matches.len(), "search finished");

        let message = if matches.is_empty() {
            NO_MATCHES.to_string()
        } else {
            matches
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        };
        self.prompt.show_info("Search Results", &message);
        ActionOutcome::Completed
    }

    pub fn properties(&self) -> ActionOutcome {
        let Some(selected) = self.selection() else {
            return ActionOutcome::Skipped;
        };
        match file_service::stat(&self.root.join(&selected)) {
            Ok(props) => {
                self.prompt.show_info("File Properties", &props.describe());
                ActionOutcome::Completed
            }
            Err(err) => self.fail(err),
        }
    }

    fn selection(&self) -> Option<String> {
        lock(self.listing).selection().map(str::to_string)
    }

    fn ask_non_empty(&self, title: &str, message: &str) -> Option<String> {
        self.prompt
            .ask_text(title, message)
            .filter(|text| !text.is_empty())
    }

    fn mutate<T>(&self, op: impl FnOnce() -> Result<T, AppError>) -> ActionOutcome {
        let result = op().and_then(|_| lock(self.listing).refresh());
        match result {
            Ok(()) => ActionOutcome::Completed,
            Err(err) => self.fail(err),
        }
    }

    fn fail(&self, err: AppError) -> ActionOutcome {
        warn!("action failed: {err}");
        self.prompt.show_error(ERROR_TITLE, &err.to_string());
        ActionOutcome::Failed(err)
    }
}

fn lock(listing: &Mutex<Listing>) -> MutexGuard<'_, Listing> {
    listing
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
