//! Allow-list fetch

use std::time::Duration;

use tracing::{info, warn};
use usbwatch_core::AllowList;

use crate::config::AllowListSettings;

/// Fetch the allow-list from the configured endpoint.
///
/// Any failure degrades to an empty list: with nothing allowed, every
/// device is reported with `allow = false`. Callers never see an error.
pub async fn fetch_allowlist(settings: &AllowListSettings) -> AllowList {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            warn!("Failed to build HTTP client: {}", e);
            return AllowList::default();
        }
    };

    let response = match client.get(&settings.endpoint).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Failed to fetch allow-list from {}: {}", settings.endpoint, e);
            return AllowList::default();
        }
    };

    if !response.status().is_success() {
        warn!(
            "Allow-list endpoint {} returned {}",
            settings.endpoint,
            response.status()
        );
        return AllowList::default();
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to read allow-list body: {}", e);
            return AllowList::default();
        }
    };

    let list = AllowList::from_lines(&body);
    info!("Fetched {} allow-list entries", list.len());
    list
}
