use crate::shared::browser::CharacterBrowser;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub browser: Arc<CharacterBrowser>,
}

impl AppState {
    pub fn new(browser: CharacterBrowser) -> Self {
        AppState {
            browser: Arc::new(browser),
        }
    }
}
