use tauri::{command, State};

use crate::error::AppError;
use crate::state::{AppState, TextReply};

/// Answer from the window's text-entry dialog. `value` is `None` on cancel.
#[command]
pub fn answer_text_prompt(
    id: String,
    value: TextReply,
    state: State<'_, AppState>,
) -> Result<(), AppError> {
    state.resolve_prompt(&id, value)
}
