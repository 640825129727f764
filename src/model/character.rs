use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Origin {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub species: String,
    pub origin: Origin,
    pub image: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Envelope returned by the character endpoint. `results` is mandatory;
/// a payload without it is treated as a failed fetch.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: Option<PageInfo>,
    pub results: Vec<Character>,
}
