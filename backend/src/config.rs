//! Command-line and environment configuration.
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

const DATA_DIRECTORY_NAME: &str = "Budget Tracker";

#[derive(Debug, Clone, Parser)]
#[command(name = "budget-tracker", about = "Personal budget tracker API server.")]
pub struct AppConfig {
    /// Directory holding the CSV and YAML data files (default: ~/Documents/Budget Tracker)
    #[arg(long = "data-dir", env = "BUDGET_TRACKER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "BUDGET_TRACKER_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Browser origin allowed to call the API
    #[arg(long = "cors-origin", env = "BUDGET_TRACKER_CORS_ORIGIN", default_value = "http://localhost:8080")]
    pub cors_origin: String,

    /// tracing filter used when RUST_LOG is not set
    #[arg(long = "log-filter", env = "BUDGET_TRACKER_LOG", default_value = "info")]
    pub log_filter: String,
}

impl AppConfig {
    /// The configured data directory, or `Budget Tracker` under the user's
    /// documents folder (home directory, then the working directory, as
    /// fallbacks).
    pub fn data_directory(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIRECTORY_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::try_parse_from(["budget-tracker"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origin, "http://localhost:8080");
        assert!(config.data_directory().ends_with(DATA_DIRECTORY_NAME));
    }

    #[test]
    fn test_explicit_options() {
        let config = AppConfig::try_parse_from([
            "budget-tracker",
            "--data-dir",
            "/tmp/budget",
            "--bind",
            "0.0.0.0:8000",
            "--log-filter",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.data_directory(), PathBuf::from("/tmp/budget"));
        assert_eq!(config.bind.port(), 8000);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        assert!(AppConfig::try_parse_from(["budget-tracker", "--bind", "localhost"]).is_err());
    }
}
