use std::path::PathBuf;

use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tracing::{debug, warn};

use crate::shell::prompt::Prompt;
use crate::state::AppState;

/// Event the window listens on to open its text-entry dialog.
pub const TEXT_PROMPT_EVENT: &str = "text-prompt";

#[derive(Debug, Clone, Serialize)]
pub struct TextPromptRequest {
    pub id: String,
    pub title: String,
    pub message: String,
}

/// Native dialogs for messages and folder picking; text entry is answered by
/// the window through `answer_text_prompt`. Every method blocks, so this must
/// only be used off the main thread.
pub struct DialogPrompt {
    app: AppHandle,
    start_dir: PathBuf,
}

impl DialogPrompt {
    pub fn new(app: AppHandle, start_dir: PathBuf) -> Self {
        Self { app, start_dir }
    }

    fn message(&self, title: &str, message: &str, kind: MessageDialogKind) {
        self.app
            .dialog()
            .message(message)
            .title(title)
            .kind(kind)
            .blocking_show();
    }
}

impl Prompt for DialogPrompt {
    fn ask_text(&self, title: &str, message: &str) -> Option<String> {
        let state = self.app.state::<AppState>();
        let (id, reply) = state.register_prompt();
        let request = TextPromptRequest {
            id,
            title: title.to_string(),
            message: message.to_string(),
        };

        if let Err(err) = self.app.emit(TEXT_PROMPT_EVENT, &request) {
            warn!("could not open text prompt: {err}");
            state.abandon_prompt(&request.id);
            return None;
        }

        debug!(id = %request.id, "waiting for text prompt");
        reply.blocking_recv().ok().flatten()
    }

    fn ask_directory(&self, title: &str) -> Option<PathBuf> {
        self.app
            .dialog()
            .file()
            .set_title(title)
            .set_directory(&self.start_dir)
            .blocking_pick_folder()
            .and_then(|folder| folder.into_path().ok())
    }

    fn show_info(&self, title: &str, message: &str) {
        self.message(title, message, MessageDialogKind::Info);
    }

    fn show_error(&self, title: &str, message: &str) {
        self.message(title, message, MessageDialogKind::Error);
    }
}
