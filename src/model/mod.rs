pub mod app_state;
pub mod browser_view;
pub mod character;
pub mod configuration;
pub mod errors;
