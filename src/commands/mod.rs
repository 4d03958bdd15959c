pub mod file_commands;
pub mod prompt_commands;
