use crate::error::{DevServerError, DevServerResult};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
/// The QRAP API listens on 8083 unless told otherwise.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8083";
pub const DEFAULT_DIST_DIR: &str = "qrap-dashboard/dist";

#[derive(Debug, Clone)]
pub struct DevServerConfig {
    pub addr: SocketAddr,
    pub api_url: String,
    pub dist_dir: PathBuf,
    pub log_level: String,
}

impl DevServerConfig {
    pub fn from_env() -> DevServerResult<Self> {
        let addr = get_var_or("QRAP_DASHBOARD_ADDR", DEFAULT_ADDR)
            .parse()
            .map_err(|e| DevServerError::Config(format!("invalid QRAP_DASHBOARD_ADDR: {e}")))?;

        let api_url = get_var_or("QRAP_API_URL", DEFAULT_API_URL)
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(DevServerError::Config(format!(
                "QRAP_API_URL must be an http(s) URL, got '{api_url}'"
            )));
        }

        Ok(Self {
            addr,
            api_url,
            dist_dir: PathBuf::from(get_var_or("QRAP_DASHBOARD_DIST", DEFAULT_DIST_DIR)),
            log_level: get_var_or("QRAP_LOG_LEVEL", "info"),
        })
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
