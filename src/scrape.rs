//! One-shot page scraper: fetch a page, print nested anchor text per class.

use scraper::{Html, Selector};
use tracing::{error, info, warn};

/// Default page to scrape.
pub const DEFAULT_URL: &str = "https://news.ycombinator.com/";
/// Default class of the elements whose nested anchor text is printed.
pub const DEFAULT_CLASS: &str = "titleline";
/// Browser-identifying User-Agent sent with the request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug)]
pub enum ScrapeError {
    /// Transport failure or non-success HTTP status.
    Http(reqwest::Error),
    /// The class name does not form a usable selector.
    Selector(String),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        ScrapeError::Http(e)
    }
}

/// Fetch `url` and return the anchor text nested in each element carrying
/// `class`.
pub async fn scrape_links(url: &str, class: &str) -> Result<Vec<String>, ScrapeError> {
    info!(url = url, class = class, "Fetching page");
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?
        .error_for_status()?;
    let body = response.text().await?;
    extract_links(&body, class)
}

/// Select every element carrying `class` and pull out the text of its first
/// nested anchor. A match without an anchor is skipped, not fatal; zero
/// matches yield an empty list.
pub fn extract_links(html: &str, class: &str) -> Result<Vec<String>, ScrapeError> {
    let element_selector = Selector::parse(&format!(".{class}")).map_err(|e| {
        error!(class = class, error = ?e, "Invalid class selector");
        ScrapeError::Selector(format!("invalid class selector .{class}: {e:?}"))
    })?;
    let anchor_selector = Selector::parse("a").unwrap();

    let document = Html::parse_document(html);
    let mut links = Vec::new();
    for element in document.select(&element_selector) {
        match element.select(&anchor_selector).next() {
            Some(anchor) => {
                let text: String = anchor.text().collect();
                links.push(text.trim().to_string());
            }
            None => {
                warn!(class = class, "Matched element has no nested anchor, skipping");
            }
        }
    }
    info!(count = links.len(), "Extracted anchor texts");
    Ok(links)
}
