pub(crate) mod assemble;
pub(crate) mod images;
pub(crate) mod matches;
pub(crate) mod results;
pub(crate) mod standings;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use tracing::debug;

use crate::error::{Result, ScrapeError};

/// How much of an error response body to keep in the error value.
const BODY_SNIPPET_LEN: usize = 256;

/// Fetch a URL and parse the response body as an HTML document.
///
/// One attempt, no retry; the timeout lives on the client (see
/// [`crate::ScrapeClient::new`]). Non-2xx responses become
/// [`ScrapeError::UnexpectedStatus`] carrying a body snippet.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| ScrapeError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ScrapeError::UnexpectedStatus {
            url: url.to_owned(),
            status,
            body: body.chars().take(BODY_SNIPPET_LEN).collect(),
        });
    }

    let body = response.text().await.map_err(|e| ScrapeError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    Ok(Html::parse_document(&body))
}

/// Extract trimmed text content from the first element matching `selector`
/// inside `element`. Returns an empty string if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .and_then(|d| d.text().map(|t| t.trim()).find(|t| !t.is_empty()))
        .unwrap_or_default()
        .trim()
        .replace(['\n', '\t'], "")
        .to_string()
}

/// Trimmed text content of the element itself, all text nodes joined.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
