use std::sync::Arc;

use portfolio_core::VideoItem;
use serde_json::Value;

use crate::cache::{Slot, TtlCache};
use crate::config::{ProxyConfig, YoutubeCredentials};
use crate::error::ProxyError;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub http: reqwest::Client,
    /// `None` makes `/api/videos` answer 500.
    pub youtube: Option<YoutubeCredentials>,
    pub presence_cache: Arc<TtlCache<u64, Value>>,
    pub videos_cache: Arc<Slot<Vec<VideoItem>>>,
}

impl AppState {
    pub fn new(
        config: ProxyConfig,
        youtube: Option<YoutubeCredentials>,
    ) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .user_agent(concat!("portfolio-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProxyError::Internal(format!("http client: {}", e)))?;

        Ok(Self {
            presence_cache: Arc::new(TtlCache::new(config.presence_ttl())),
            videos_cache: Arc::new(Slot::new(config.videos_ttl())),
            config: Arc::new(config),
            http,
            youtube,
        })
    }
}
