pub mod backend;
pub mod classifier;
pub mod commands;
pub mod config;
pub mod core_state;
pub mod export;
pub mod models;
pub mod workflow;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("ExoScan starting v{}", config::APP_VERSION);

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(Arc::new(core_state::CoreState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::check_backend_status,
            commands::batch::select_batch_file,
            commands::batch::analyze_batch,
            commands::batch::get_analysis_view,
            commands::batch::select_category,
            commands::batch::acknowledge_analysis_failure,
            commands::batch::get_top_predictions,
            commands::batch::export_results_csv,
            commands::batch::fetch_dataset_csv,
            commands::detection::assess_candidate,
            commands::detection::submit_observation,
            commands::training::train_model,
            commands::training::tune_hyperparameters,
            commands::training::export_model_manifest,
        ])
        .run(tauri::generate_context!())
        .expect("error while running ExoScan");
}
