pub const CONFIG_DIRECTORY: &str = "./config";
pub const ASSET_DIRECTORY: &str = "./asset";

pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api/character";
pub const DEFAULT_SERVER_BIND_POINT: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
