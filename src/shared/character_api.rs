use crate::model::browser_view::SearchQuery;
use crate::model::character::CharacterPage;
use reqwest::Url;

/// Builds the request URL for a search. With no term and no page the base
/// endpoint is returned untouched; otherwise the filter goes on `<base>/?...`.
pub fn character_url(api_url: &str, query: &SearchQuery) -> anyhow::Result<Url> {
    let mut url = Url::parse(api_url)?;
    let term = query.term();
    let page = query.page();
    if term.is_none() && page.is_none() {
        return Ok(url);
    }

    let path = format!("{}/", url.path().trim_end_matches('/'));
    url.set_path(&path);
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(term) = term {
            pairs.append_pair("name", term);
        }
        if let Some(page) = page {
            pairs.append_pair("page", &page.to_string());
        }
    }

    Ok(url)
}

/// Extracts the `page` parameter from one of the `info.next`/`info.prev` links.
pub fn page_number(link: &str) -> Option<u32> {
    Url::parse(link)
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

pub async fn fetch_characters(client: &reqwest::Client, url: Url) -> anyhow::Result<CharacterPage> {
    let page = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<CharacterPage>()
        .await?;
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::DEFAULT_API_URL;
    use crate::shared::stub_api::{spawn_stub_api, test_client, unreachable_api_url};
    use axum::http::StatusCode;

    #[test]
    fn empty_term_targets_unfiltered_endpoint() {
        let url = character_url(DEFAULT_API_URL, &SearchQuery::default()).unwrap();
        assert_eq!(url.as_str(), DEFAULT_API_URL);

        let url = character_url(DEFAULT_API_URL, &SearchQuery::with_name("   ")).unwrap();
        assert_eq!(url.as_str(), DEFAULT_API_URL);
    }

    #[test]
    fn term_becomes_name_filter() {
        let url = character_url(DEFAULT_API_URL, &SearchQuery::with_name("Rick")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://rickandmortyapi.com/api/character/?name=Rick"
        );
    }

    #[test]
    fn term_is_trimmed_and_encoded() {
        let url = character_url(DEFAULT_API_URL, &SearchQuery::with_name(" Rick & Morty ")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://rickandmortyapi.com/api/character/?name=Rick+%26+Morty"
        );
    }

    #[test]
    fn later_pages_are_forwarded() {
        let query = SearchQuery {
            name: Some("Smith".to_string()),
            page: Some(2),
        };
        let url = character_url(DEFAULT_API_URL, &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://rickandmortyapi.com/api/character/?name=Smith&page=2"
        );
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        assert!(character_url("not a url", &SearchQuery::default()).is_err());
    }

    #[test]
    fn page_number_is_read_from_links() {
        assert_eq!(
            page_number("https://rickandmortyapi.com/api/character/?page=3&name=rick"),
            Some(3)
        );
        assert_eq!(page_number("https://rickandmortyapi.com/api/character"), None);
        assert_eq!(page_number("garbage"), None);
    }

    #[tokio::test]
    async fn fetch_parses_results_in_order() {
        let body = r#"{"results":[
            {"id":1,"name":"Rick Sanchez","status":"Alive","species":"Human","origin":{"name":"Earth (C-137)"},"image":"a.jpeg"},
            {"id":2,"name":"Morty Smith","status":"Alive","species":"Human","origin":{"name":"unknown"},"image":"b.jpeg"}
        ]}"#;
        let stub = spawn_stub_api(StatusCode::OK, body).await;
        let url = Url::parse(&stub.api_url).unwrap();

        let page = fetch_characters(&test_client(), url).await.unwrap();

        let names = page.results.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Rick Sanchez", "Morty Smith"]);
        assert_eq!(stub.requests(), vec!["/api/character".to_string()]);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let stub = spawn_stub_api(StatusCode::NOT_FOUND, r#"{"error":"There is nothing here"}"#).await;
        let url = Url::parse(&stub.api_url).unwrap();
        assert!(fetch_characters(&test_client(), url).await.is_err());
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let stub = spawn_stub_api(StatusCode::OK, "<html>oops</html>").await;
        let url = Url::parse(&stub.api_url).unwrap();
        assert!(fetch_characters(&test_client(), url).await.is_err());
    }

    #[tokio::test]
    async fn connection_failure_is_an_error() {
        let url = Url::parse(&unreachable_api_url().await).unwrap();
        assert!(fetch_characters(&test_client(), url).await.is_err());
    }
}
