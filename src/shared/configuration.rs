use crate::model::configuration::Configuration;
use crate::shared::constants::{
    CONFIG_DIRECTORY, DEFAULT_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_BIND_POINT,
};
use once_cell::sync::Lazy;

pub static CONFIGURATION: Lazy<Configuration> =
    Lazy::new(|| initialize().expect("Failed to initialize configuration."));

const CONFIGURATION_FILE_NAME: &str = "/config.toml";

fn initialize() -> anyhow::Result<Configuration> {
    if !std::path::Path::new(CONFIG_DIRECTORY).exists() {
        std::fs::create_dir(CONFIG_DIRECTORY)?;
    }

    let configuration_path = String::from(CONFIG_DIRECTORY) + CONFIGURATION_FILE_NAME;
    if !std::path::Path::new(&configuration_path).exists() {
        // Read from environment variables
        let configuration = from_env_or(|key| std::env::var(key).ok());
        let serialized_toml = toml::to_string_pretty(&configuration)?;
        std::fs::write(&configuration_path, serialized_toml)?;
        Ok(configuration)
    } else {
        let toml = std::fs::read_to_string(&configuration_path)?;
        parse(&toml)
    }
}

fn parse(toml: &str) -> anyhow::Result<Configuration> {
    Ok(toml::from_str::<Configuration>(toml)?)
}

fn from_env_or<F>(lookup: F) -> Configuration
where
    F: Fn(&str) -> Option<String>,
{
    Configuration {
        api_url: lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        server_bind_point: lookup("SERVER_BIND_POINT")
            .unwrap_or_else(|| DEFAULT_SERVER_BIND_POINT.to_string()),
        log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    }
}
