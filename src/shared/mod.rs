use once_cell::sync::Lazy;

pub mod browser;
pub mod character_api;
pub mod configuration;
pub mod constants;
pub mod render;
pub mod status;
#[cfg(test)]
pub mod stub_api;

pub static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);
