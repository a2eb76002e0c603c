mod api;
mod commands;
mod preview;
mod report;
mod session;
mod upload;

use api::ApiClient;
use commands::AppState;
use std::sync::Arc;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let api = ApiClient::from_env();
    println!("Haulboard API base: {}", api.base_url());

    let app_state = Arc::new(AppState { api });

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::default().build())
        .plugin(tauri_plugin_dialog::init())
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // Session commands
            commands::login,
            commands::signup,
            commands::logout,
            commands::current_session,
            // Page fetch commands
            commands::fetch_accounts_summary,
            commands::fetch_accounts_detail,
            commands::fetch_drivers_summary,
            commands::fetch_revenue_streams,
            commands::fetch_trips,
            commands::fetch_trucking_accounts,
            commands::fetch_salary_accounts,
            // Upload commands
            commands::list_upload_types,
            commands::preview_spreadsheet,
            commands::upload_spreadsheet,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
