use crate::model::browser_view::{BrowserView, SearchQuery};
use crate::shared::character_api::{character_url, fetch_characters};
use tokio::sync::RwLock;

/// Runs the fetch-and-render flow against the character endpoint and owns the
/// view it renders into. Concurrent searches are neither queued nor
/// cancelled; whichever response resolves last is what the view shows.
pub struct CharacterBrowser {
    client: reqwest::Client,
    api_url: String,
    view: RwLock<BrowserView>,
}

impl CharacterBrowser {
    pub fn new<S: Into<String>>(client: reqwest::Client, api_url: S) -> Self {
        CharacterBrowser {
            client,
            api_url: api_url.into(),
            view: RwLock::new(BrowserView::default()),
        }
    }

    pub async fn view(&self) -> BrowserView {
        self.view.read().await.clone()
    }

    pub async fn search(&self, query: SearchQuery) -> BrowserView {
        let query = query.normalized();
        self.view.write().await.begin(query.clone());

        let result = match character_url(&self.api_url, &query) {
            Ok(url) => {
                tracing::info!("Fetching characters from {}", url);
                fetch_characters(&self.client, url).await
            }
            Err(e) => Err(e),
        };

        let mut view = self.view.write().await;
        view.query = query;
        match result {
            Ok(page) => {
                view.show_characters(&page.results, page.info);
                tracing::info!("Rendered {} character cards.", view.cards().len());
            }
            Err(e) => {
                tracing::error!("Failed to fetch characters: {}", e);
                view.show_error();
            }
        }

        view.clone()
    }
}
