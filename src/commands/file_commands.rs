use serde::Serialize;
use tauri::{command, AppHandle, Manager, State};
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::file_entry::ListingSnapshot;
use crate::models::operation::Operation;
use crate::services::action_service::{ActionOutcome, Controller};
use crate::shell::dialog_prompt::DialogPrompt;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ActionReport {
    pub outcome: &'static str,
    pub message: Option<String>,
    pub listing: ListingSnapshot,
}

impl ActionReport {
    fn new(outcome: &ActionOutcome, listing: ListingSnapshot) -> Self {
        let message = match outcome {
            ActionOutcome::Failed(err) => Some(err.to_string()),
            _ => None,
        };
        Self {
            outcome: outcome.label(),
            message,
            listing,
        }
    }
}

#[command]
pub fn list_entries(state: State<'_, AppState>) -> Result<ListingSnapshot, AppError> {
    // The window calls this on every page load; prompts from a previous page
    // can no longer be answered.
    let dropped = state.abandon_all_prompts();
    if dropped > 0 {
        warn!(dropped, "window reloaded, cancelling pending text prompts");
    }
    let mut listing = state.listing();
    listing.refresh()?;
    Ok(listing.snapshot())
}

#[command]
pub fn select_entry(
    name: Option<String>,
    state: State<'_, AppState>,
) -> Result<ListingSnapshot, AppError> {
    let mut listing = state.listing();
    match name {
        Some(name) => listing.select(&name)?,
        None => listing.clear_selection(),
    }
    Ok(listing.snapshot())
}

#[command]
pub async fn create_item(app: AppHandle) -> Result<ActionReport, AppError> {
    run_action(app, Operation::Create, |c| c.create()).await
}

#[command]
pub async fn rename_item(app: AppHandle) -> Result<ActionReport, AppError> {
    run_action(app, Operation::Rename, |c| c.rename()).await
}

#[command]
pub async fn delete_item(app: AppHandle) -> Result<ActionReport, AppError> {
    run_action(app, Operation::Delete, |c| c.delete()).await
}

#[command]
pub async fn copy_item(app: AppHandle) -> Result<ActionReport, AppError> {
    run_action(app, Operation::Copy, |c| c.copy()).await
}

#[command]
pub async fn move_item(app: AppHandle) -> Result<ActionReport, AppError> {
    run_action(app, Operation::Move, |c| c.move_selected()).await
}

#[command]
pub async fn search_files(app: AppHandle) -> Result<ActionReport, AppError> {
    run_action(app, Operation::Search, |c| c.search()).await
}

#[command]
pub async fn show_properties(app: AppHandle) -> Result<ActionReport, AppError> {
    run_action(app, Operation::Properties, |c| c.properties()).await
}

/// Runs one handler on a blocking worker so its dialogs never stall the
/// event loop, then hands the refreshed listing back to the window.
async fn run_action<F>(
    app: AppHandle,
    operation: Operation,
    action: F,
) -> Result<ActionReport, AppError>
where
    F: FnOnce(&Controller<'_, DialogPrompt>) -> ActionOutcome + Send + 'static,
{
    tauri::async_runtime::spawn_blocking(move || {
        let state = app.state::<AppState>();
        let prompt = DialogPrompt::new(app.clone(), state.root.clone());
        let controller = Controller::new(&state.listing, &prompt);

        let outcome = action(&controller);
        info!(%operation, outcome = outcome.label(), "action finished");
        ActionReport::new(&outcome, state.snapshot())
    })
    .await
    .map_err(|e| AppError::General(format!("{operation} task failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file_entry::FileEntry;

    fn snapshot() -> ListingSnapshot {
        ListingSnapshot {
            root: "/work".to_string(),
            entries: vec![FileEntry {
                name: "a.txt".to_string(),
                is_directory: false,
            }],
            selected: Some("a.txt".to_string()),
        }
    }

    #[test]
    fn report_for_failure_carries_the_dialog_text() {
        let outcome = ActionOutcome::Failed(AppError::NotFound("a.txt".to_string()));
        let report = ActionReport::new(&outcome, snapshot());

        assert_eq!(report.outcome, "failed");
        assert_eq!(report.message.as_deref(), Some("'a.txt' not found."));
    }

    #[test]
    fn report_serializes_for_the_window() {
        let report = ActionReport::new(&ActionOutcome::Completed, snapshot());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["outcome"], "completed");
        assert!(json["message"].is_null());
        assert_eq!(json["listing"]["entries"][0]["name"], "a.txt");
        assert_eq!(json["listing"]["entries"][0]["is_directory"], false);
        assert_eq!(json["listing"]["selected"], "a.txt");
    }
}
