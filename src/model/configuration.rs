use crate::shared::constants::{DEFAULT_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_BIND_POINT};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_server_bind_point")]
    pub server_bind_point: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            api_url: default_api_url(),
            server_bind_point: default_server_bind_point(),
            log_level: default_log_level(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_server_bind_point() -> String {
    DEFAULT_SERVER_BIND_POINT.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
