use crate::controller::build_router;
use crate::model::app_state::AppState;
use crate::shared::browser::CharacterBrowser;
use crate::shared::configuration::CONFIGURATION;
use crate::shared::HTTP_CLIENT;
use std::str::FromStr;
use tracing::Level;

mod controller;
mod model;
mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = Level::from_str(&CONFIGURATION.log_level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let browser = CharacterBrowser::new(HTTP_CLIENT.clone(), CONFIGURATION.api_url.clone());
    let app = build_router(AppState::new(browser));

    let listener = tokio::net::TcpListener::bind(&CONFIGURATION.server_bind_point).await?;
    tracing::info!("Listening on {}", &CONFIGURATION.server_bind_point);
    axum::serve(listener, app).await?;
    Ok(())
}
