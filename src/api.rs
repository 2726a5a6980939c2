use gloo_net::http::Request;
use thiserror::Error;

use crate::article::{parse_articles, Article};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(gloo_net::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Read(gloo_net::Error),
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Same range as `Response::ok`.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

pub async fn fetch_articles(endpoint: &str) -> Result<Vec<Article>, FetchError> {
    let resp = Request::get(endpoint)
        .send()
        .await
        .map_err(FetchError::Network)?;
    check_status(resp.status())?;
    let body = resp.text().await.map_err(FetchError::Read)?;
    Ok(parse_articles(&body)?)
}
