use crate::model::browser_view::{BrowserView, Card, SearchQuery, ViewContent};
use crate::shared::character_api::page_number;
use reqwest::Url;

pub const NO_RESULTS_MESSAGE: &str = "Nenhum personagem encontrado.";
pub const ERROR_MESSAGE: &str = "Erro ao carregar os personagens. Tente novamente.";
pub const LOADING_MESSAGE: &str = "Carregando...";

pub fn render_page(view: &BrowserView) -> String {
    let search_term = view.query.name.as_deref().unwrap_or_default();
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Personagens de Rick and Morty</title>\n");
    html.push_str("<link rel=\"stylesheet\" href=\"/asset/style.css\">\n");
    html.push_str("</head>\n<body>\n<header>\n<h1>Personagens de Rick and Morty</h1>\n");
    html.push_str(&format!(
        "<form class=\"search\" method=\"get\" action=\"/\">\
<input id=\"searchInput\" type=\"text\" name=\"name\" value=\"{}\" placeholder=\"Buscar personagem...\">\
<button id=\"searchButton\" type=\"submit\">Buscar</button></form>\n",
        escape(search_term)
    ));
    html.push_str("</header>\n");

    html.push_str(&format!(
        "<div id=\"loading\" class=\"loading\"{}>{}</div>\n",
        hidden_unless(view.busy),
        LOADING_MESSAGE
    ));
    html.push_str(&format!(
        "<div id=\"errorMessage\" class=\"error-message\"{}>{}</div>\n",
        hidden_unless(view.error),
        ERROR_MESSAGE
    ));
    render_result_count(&mut html, view);

    html.push_str("<main id=\"cardsContainer\" class=\"cards-container\">\n");
    match &view.content {
        ViewContent::Cleared => {}
        ViewContent::NoResults => {
            html.push_str(&format!("<p class=\"no-results\">{}</p>\n", NO_RESULTS_MESSAGE));
        }
        ViewContent::Cards(cards) => {
            for card in cards {
                render_card(&mut html, card);
            }
        }
    }
    html.push_str("</main>\n");

    render_pagination(&mut html, view);
    html.push_str("</body>\n</html>\n");
    html
}

fn render_card(html: &mut String, card: &Card) {
    html.push_str(&format!(
        "<article class=\"card\">\
<img class=\"card-image\" src=\"{image}\" alt=\"{alt}\">\
<div class=\"card-content\">\
<h2 class=\"card-title\">{name}</h2>\
<div class=\"card-info\">\
<div class=\"card-info-item\"><strong>Status:</strong> <span class=\"status-badge {status_class}\">{status}</span></div>\
<div class=\"card-info-item\"><strong>Espécie:</strong> {species}</div>\
<div class=\"card-info-item\"><strong>Origem:</strong> {origin}</div>\
</div></div></article>\n",
        image = escape(&card.image),
        alt = escape(&card.image_alt),
        name = escape(&card.name),
        status_class = escape(&card.status_class),
        status = escape(&card.status_label),
        species = escape(&card.species),
        origin = escape(&card.origin),
    ));
}

fn render_result_count(html: &mut String, view: &BrowserView) {
    let Some(info) = &view.page_info else {
        return;
    };
    if view.cards().is_empty() {
        return;
    }

    let page = view.query.page().unwrap_or(1);
    html.push_str(&format!(
        "<p class=\"result-count\">{} personagens encontrados (página {} de {})</p>\n",
        info.count,
        page,
        info.pages.max(page)
    ));
}

fn render_pagination(html: &mut String, view: &BrowserView) {
    let Some(info) = &view.page_info else {
        return;
    };

    let prev = info.prev.as_deref().and_then(page_number);
    let next = info.next.as_deref().and_then(page_number);
    if prev.is_none() && next.is_none() {
        return;
    }

    html.push_str("<nav class=\"pagination\">");
    if let Some(href) = prev.and_then(|page| page_href(&view.query, page)) {
        html.push_str(&format!("<a rel=\"prev\" href=\"{}\">Anterior</a>", escape(&href)));
    }
    if let Some(href) = next.and_then(|page| page_href(&view.query, page)) {
        html.push_str(&format!("<a rel=\"next\" href=\"{}\">Próxima</a>", escape(&href)));
    }
    html.push_str("</nav>\n");
}

/// Link back to this page for another result page, keeping the name filter.
fn page_href(query: &SearchQuery, page: u32) -> Option<String> {
    let mut url = Url::parse("http://localhost/").ok()?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(term) = query.term() {
            pairs.append_pair("name", term);
        }
        pairs.append_pair("page", &page.to_string());
    }
    url.query().map(|query| format!("/?{}", query))
}

fn hidden_unless(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
