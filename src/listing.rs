use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

const LISTING_URL: &str = "https://coinmarketcap.com/airdrop/";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_LISTED: usize = 5;

/// A campaign card scraped from the public listing page. Carries only the
/// fields the page exposes; everything else would need manual curation
/// before such an entry could join the catalogue.
#[derive(Debug, Clone)]
pub struct ListedCampaign {
    pub title: String,
    pub description: String,
}

/// Best-effort scrape of the public airdrop listing page.
///
/// Not part of the default pipeline. Any failure (network, status, body,
/// unexpected markup) is logged at debug level and yields an empty list;
/// this path is enrichment only and must never fail a generation run.
///
/// TODO: the card selectors predate the current page markup and need
/// re-verification before this is wired into the pipeline.
#[instrument(skip(client))]
pub async fn fetch_listed_campaigns(client: &reqwest::Client) -> Vec<ListedCampaign> {
    match fetch_listing(client).await {
        Ok(body) => {
            let campaigns = parse_listing(&Html::parse_document(&body));
            debug!(count = campaigns.len(), "parsed listing page");
            campaigns
        }
        Err(err) => {
            debug!(%err, url = LISTING_URL, "listing fetch failed");
            Vec::new()
        }
    }
}

async fn fetch_listing(client: &reqwest::Client) -> reqwest::Result<String> {
    client
        .get(LISTING_URL)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

fn parse_listing(document: &Html) -> Vec<ListedCampaign> {
    let Ok(card_selector) = Selector::parse("div.airdrop-item") else {
        return Vec::new();
    };
    let Ok(title_selector) = Selector::parse(".title") else {
        return Vec::new();
    };
    let Ok(description_selector) = Selector::parse(".description") else {
        return Vec::new();
    };

    document
        .select(&card_selector)
        .take(MAX_LISTED)
        .filter_map(|card| {
            let title = select_text(&card, &title_selector);
            if title.is_empty() {
                return None;
            }
            Some(ListedCampaign {
                title,
                description: select_text(&card, &description_selector),
            })
        })
        .collect()
}

/// Trimmed text of the first element matching `selector` inside `element`,
/// or an empty string if nothing matches.
fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .and_then(|el| el.text().map(|t| t.trim()).find(|t| !t.is_empty()))
        .unwrap_or_default()
        .to_string()
}
