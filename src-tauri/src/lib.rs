//! To-Do List Backend
//!
//! Layered architecture:
//! - domain: Element entity and store error vocabulary
//! - repository: Positional list storage (SQLite)
//! - commands: Tauri command handlers

use std::path::PathBuf;
use tauri::Manager;

mod config;
mod domain;
mod repository;
mod commands;

use config::AppConfig;
use repository::{init_db, ListRepository, SqliteListRepository};

/// Application state shared across commands
pub struct AppState {
    pub list_repo: Box<dyn ListRepository>,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle, config: &AppConfig) -> Result<PathBuf, String> {
    let app_dir = app_handle.path().app_data_dir().map_err(|e| e.to_string())?;
    std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;
    Ok(config.db_path(&app_dir))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = AppConfig::from_env();

    tauri::Builder::default()
        .setup(move |app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            let log_dir = app_handle.path().app_log_dir()?;
            rolling_logger::init_logger(log_dir, &config.log_name)?;
            if let Some(path) = rolling_logger::log_file() {
                log::info!("Logging to {}", path.display());
            }

            if let Some(path) = &config.db_path_override {
                let _ = rolling_logger::warn(&format!(
                    "Database path overridden by {}: {}",
                    config::DB_PATH_ENV,
                    path.display()
                ));
            }

            let db_path = get_db_path(&app_handle, &config)?;
            log::info!("Opening list store at {}", db_path.display());

            let db_state = match init_db(&db_path) {
                Ok(state) => state,
                Err(e) => {
                    let _ = rolling_logger::error(&format!("DB init failed: {}", e));
                    return Err(e.into());
                }
            };

            app.manage(AppState {
                list_repo: Box::new(SqliteListRepository::new(db_state.conn)),
            });

            let _ = rolling_logger::info("List store ready");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_all,
            commands::add_element_at,
            commands::update_element_at,
            commands::remove_element_at,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
