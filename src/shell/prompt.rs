use std::path::PathBuf;

/// Modal, blocking request/response calls the action handlers make into the
/// window. Every call returns only once the user has dismissed the dialog.
pub trait Prompt {
    /// `None` when the user cancels.
    fn ask_text(&self, title: &str, message: &str) -> Option<String>;

    fn ask_directory(&self, title: &str) -> Option<PathBuf>;

    fn show_info(&self, title: &str, message: &str);

    fn show_error(&self, title: &str, message: &str);
}
