use log::info;
use reqwest::IntoUrl;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Cannot connect to the schedule server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("The schedule server answered with status {0}")]
    BadStatus(reqwest::StatusCode),
}

pub fn reqwest_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().build()
}

/// Downloads one source document as raw bytes.
///
/// A single attempt, no retries: on failure the caller decides whether to
/// fall back to an alternate source (the workbook instead of the page).
pub async fn fetch_bytes(
    client: &reqwest::Client,
    url: impl IntoUrl,
) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::BadStatus(response.status()));
    }
    let bytes = response.bytes().await?;
    info!("Downloaded {} bytes", bytes.len());
    Ok(bytes.to_vec())
}
