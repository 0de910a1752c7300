use reqwest::Client;
use reqwest::header::ACCEPT;

use crate::error::NavError;

/// Builds the HTTP client shared by all fetches.
pub fn build_client(user_agent: &str) -> Client {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .expect("HTTP client should build with the configured user agent")
}

/// Fetches one page of HTML.
///
/// A non-success status is a hard failure carrying the response itself
/// (status and body) as the error payload. There is no retry.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, NavError> {
    ::log::debug!("GET {}", url);

    let response = client
        .get(url)
        .header(ACCEPT, "text/html")
        .send()
        .await
        .map_err(|source| NavError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        ::log::error!("GET {} failed with status {}", url, status);
        let body = response.text().await.unwrap_or_default();
        return Err(NavError::Fetch {
            url: url.to_string(),
            status,
            body,
        });
    }

    let body = response.text().await.map_err(|source| NavError::Transport {
        url: url.to_string(),
        source,
    })?;

    ::log::debug!("GET {} returned {} bytes", url, body.len());
    Ok(body)
}
