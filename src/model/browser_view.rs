use crate::model::character::{Character, PageInfo};
use crate::shared::status::translate_status;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl SearchQuery {
    #[cfg(test)]
    pub fn with_name<S: Into<String>>(name: S) -> Self {
        SearchQuery {
            name: Some(name.into()),
            page: None,
        }
    }

    /// Trimmed search term, `None` when blank.
    pub fn term(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Requested page, `None` for the first page.
    pub fn page(&self) -> Option<u32> {
        self.page.filter(|page| *page > 1)
    }

    pub fn normalized(&self) -> Self {
        SearchQuery {
            name: self.term().map(String::from),
            page: self.page(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub image: String,
    pub image_alt: String,
    pub status_label: String,
    pub status_class: String,
    pub species: String,
    pub origin: String,
}

impl From<&Character> for Card {
    fn from(character: &Character) -> Self {
        Card {
            name: character.name.clone(),
            image: character.image.clone(),
            image_alt: character.name.clone(),
            status_label: translate_status(&character.status).to_string(),
            status_class: format!("status-{}", character.status.to_lowercase()),
            species: character.species.clone(),
            origin: character.origin.name.clone(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum ViewContent {
    #[default]
    Cleared,
    Cards(Vec<Card>),
    NoResults,
}

/// The single visual container shared by every request.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserView {
    pub busy: bool,
    pub error: bool,
    pub content: ViewContent,
    pub query: SearchQuery,
    pub page_info: Option<PageInfo>,
}

impl BrowserView {
    pub fn cards(&self) -> &[Card] {
        match &self.content {
            ViewContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn begin(&mut self, query: SearchQuery) {
        self.busy = true;
        self.error = false;
        self.content = ViewContent::Cleared;
        self.page_info = None;
        self.query = query;
    }

    pub fn show_characters(&mut self, characters: &[Character], page_info: Option<PageInfo>) {
        self.busy = false;
        self.error = false;
        self.content = if characters.is_empty() {
            ViewContent::NoResults
        } else {
            ViewContent::Cards(characters.iter().map(Card::from).collect())
        };
        self.page_info = page_info;
    }

    pub fn show_error(&mut self) {
        self.busy = false;
        self.error = true;
        self.content = ViewContent::Cleared;
        self.page_info = None;
    }
}
