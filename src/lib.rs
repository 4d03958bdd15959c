mod commands;
mod config;
mod error;
mod models;
pub(crate) mod scope_path;
mod services;
mod shell;
mod state;

use commands::{file_commands, prompt_commands};
use config::{AppConfig, DEFAULT_LOG_FILTER};
use state::AppState;
use tauri::Manager;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn init_state(config: &AppConfig) -> AppState {
    let state = AppState::new(config);
    if let Err(err) = state.listing().refresh() {
        warn!("initial listing failed: {err}");
    }
    state
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let config = AppConfig::from_process()?;
            info!(root = %config.browsing_root.display(), "browsing root resolved");
            app.manage(init_state(&config));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            file_commands::list_entries,
            file_commands::select_entry,
            file_commands::create_item,
            file_commands::rename_item,
            file_commands::delete_item,
            file_commands::copy_item,
            file_commands::move_item,
            file_commands::search_files,
            file_commands::show_properties,
            prompt_commands::answer_text_prompt,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
