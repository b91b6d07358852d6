use std::sync::Arc;

use ratelimit::RateLimiter;
use scraper::{Html, Selector};

use crate::models::{categorize_trivia, TriviaItem};
use crate::{ImdbError, Result};

const BASE_URL: &str = "https://www.imdb.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const MAX_TRIVIA_ITEMS: usize = 15;

pub struct ImdbClient {
    client: reqwest::Client,
    limiter: Arc<RateLimiter>,
    base_url: String,
}

impl ImdbClient {
    /// Create an ImdbClient with a reqwest Client and a shared host limiter.
    pub fn new(client: reqwest::Client, limiter: Arc<RateLimiter>) -> Self {
        Self {
            client,
            limiter,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create an ImdbClient with a custom base URL.
    pub fn with_base_url(
        client: reqwest::Client,
        limiter: Arc<RateLimiter>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            limiter,
            base_url: base_url.into(),
        }
    }

    async fn fetch_html(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);

        self.limiter.acquire().await;
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImdbError::HttpStatus(status.as_u16()));
        }
        Ok(response.text().await?)
    }

    /// Fetch and extract the trivia items for one title.
    pub async fn fetch_trivia(&self, imdb_id: &str) -> Result<Vec<TriviaItem>> {
        let html = self.fetch_html(&format!("/title/{}/trivia", imdb_id)).await?;
        Ok(parse_trivia(&html))
    }
}

/// Extract trivia entries from the trivia page markup.
///
/// `Html` is not `Send`, so parsing stays outside any await point.
fn parse_trivia(html: &str) -> Vec<TriviaItem> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("div.ipc-html-content-inner-div")
        .expect("static selector is valid");

    document
        .select(&selector)
        .take(MAX_TRIVIA_ITEMS)
        .enumerate()
        .filter_map(|(index, node)| {
            let text = node.text().collect::<String>().trim().to_string();
            if text.is_empty() {
                return None;
            }
            let category = categorize_trivia(&text);
            Some(TriviaItem {
                id: format!("trivia-{}", index),
                text,
                category,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TriviaCategory;

    #[test]
    fn parses_trivia_nodes_in_order() {
        let html = r#"
            <html><body>
                <div class="ipc-html-content-inner-div">The original budget was tiny.</div>
                <div class="ipc-html-content-inner-div">A cameo by the composer.</div>
                <div class="other">ignored</div>
            </body></html>
        "#;

        let items = parse_trivia(html);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "The original budget was tiny.");
        assert_eq!(items[0].category, TriviaCategory::Production);
        assert_eq!(items[1].category, TriviaCategory::Casting);
    }

    #[test]
    fn empty_page_yields_no_items() {
        assert!(parse_trivia("<html><body></body></html>").is_empty());
    }
}
