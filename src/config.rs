use std::path::PathBuf;
use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "ExoScan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default backend base URL when `EXOSCAN_BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Per-step network timeouts. The health check is deliberately short so a
/// dead backend fails fast before any upload is attempted.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);
pub const RETRAIN_TIMEOUT: Duration = Duration::from_secs(300);
pub const TUNE_TIMEOUT: Duration = Duration::from_secs(600);
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info,exoscan_lib=debug"
}

/// Base URL of the prediction/training service.
pub fn backend_url() -> String {
    std::env::var("EXOSCAN_BACKEND_URL")
        .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}

/// Get the application data directory
/// ~/ExoScan/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("ExoScan")
}

/// Directory for CSV and model-manifest exports.
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("ExoScan"));
    }

    #[test]
    fn exports_dir_under_app_data() {
        let exports = exports_dir();
        let app = app_data_dir();
        assert!(exports.starts_with(app));
        assert!(exports.ends_with("exports"));
    }

    #[test]
    fn app_name_is_exoscan() {
        assert_eq!(APP_NAME, "ExoScan");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.4.0");
    }

    #[test]
    fn health_timeout_shorter_than_retrain() {
        assert!(HEALTH_TIMEOUT < RETRAIN_TIMEOUT);
    }
}
