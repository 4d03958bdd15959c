pub mod dialog_prompt;
pub mod prompt;
pub mod safety;
