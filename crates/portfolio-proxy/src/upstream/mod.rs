//! Thin clients for the third-party APIs.

pub mod roblox;
pub mod youtube;

use portfolio_core::{PortfolioError, PortfolioResult};
use serde::de::DeserializeOwned;

/// GET `url` and decode JSON, turning a non-2xx reply into `Upstream`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: url::Url,
) -> PortfolioResult<T> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(PortfolioError::Upstream {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json::<T>().await?)
}
