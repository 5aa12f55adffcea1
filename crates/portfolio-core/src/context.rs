//! Application context built once at startup and handed to every widget.

use std::path::PathBuf;

use url::Url;

use crate::config::WidgetConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::presence::{self, PresenceClient};
use crate::prefs::Preferences;
use crate::video::{VideoItem, VideoList};

/// Direct Roblox presence endpoint tried when the proxy is unreachable.
pub const DIRECT_PRESENCE_URL: &str = "https://presence.roproxy.com/v1/presence/users";

/// Default Roblox user whose avatar and presence the site shows.
pub const DEFAULT_USER_ID: u64 = 3404416545;

/// Videos requested for the projects grid.
pub const PROJECT_VIDEOS: u32 = 12;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: WidgetConfig,
    pub proxy_base: Url,
    pub user_id: u64,
    pub preferences: Preferences,
    pub data_dir: PathBuf,
    pub http: reqwest::Client,
}

impl AppContext {
    /// Validates `proxy_base` and loads the saved preferences from `data_dir`.
    pub fn new(
        config: WidgetConfig,
        proxy_base: &str,
        user_id: u64,
        data_dir: PathBuf,
    ) -> PortfolioResult<Self> {
        let proxy_base = Url::parse(proxy_base)
            .map_err(|e| PortfolioError::NotConfigured(format!("proxy base {proxy_base}: {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("portfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PortfolioError::Network(e.to_string()))?;
        let preferences = Preferences::load(&data_dir);

        Ok(Self {
            config,
            proxy_base,
            user_id,
            preferences,
            data_dir,
            http,
        })
    }

    /// `<proxy_base>/<path>` without doubled slashes.
    pub fn proxy_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.proxy_base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn avatar_url(&self) -> String {
        presence::avatar_url(self.proxy_base.as_str(), self.user_id)
    }

    /// Proxy first, then the public mirror.
    pub fn presence_endpoints(&self) -> Vec<String> {
        vec![
            self.proxy_url("api/presence"),
            DIRECT_PRESENCE_URL.to_string(),
        ]
    }

    pub fn presence_client(&self) -> PresenceClient {
        PresenceClient::new(
            self.http.clone(),
            self.presence_endpoints(),
            self.config.presence_timeout,
        )
    }

    pub fn videos_url(&self, max_results: u32) -> String {
        self.proxy_url(&format!("api/videos?maxResults={}", max_results))
    }

    /// `GET /api/videos` on the proxy.
    pub async fn fetch_videos(&self, max_results: u32) -> PortfolioResult<Vec<VideoItem>> {
        let response = self
            .http
            .get(self.videos_url(max_results))
            .timeout(self.config.fetch_timeout)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Upstream {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let list: VideoList = response.json().await?;
        tracing::debug!(count = list.items.len(), source = ?list.source, "videos fetched");
        Ok(list.items)
    }

    /// Avatar image bytes through the proxy, with their content type.
    pub async fn fetch_avatar(&self) -> PortfolioResult<(String, Vec<u8>)> {
        let response = self
            .http
            .get(self.avatar_url())
            .timeout(self.config.fetch_timeout)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Upstream {
                status: status.as_u16(),
                message: "avatar unavailable".to_string(),
            });
        }
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();
        let bytes = response.bytes().await?;
        Ok((content_type, bytes.to_vec()))
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> PortfolioResult<()> {
        preferences.save(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context(base: &str) -> (AppContext, TempDir) {
        let dir = TempDir::new().unwrap();
        let ctx = AppContext::new(
            WidgetConfig::default(),
            base,
            DEFAULT_USER_ID,
            dir.path().to_path_buf(),
        )
        .unwrap();
        (ctx, dir)
    }

    #[test]
    fn urls_join_cleanly() {
        let (ctx, _dir) = context("http://localhost:3000/");
        assert_eq!(ctx.videos_url(12), "http://localhost:3000/api/videos?maxResults=12");
        assert_eq!(
            ctx.presence_endpoints(),
            vec![
                "http://localhost:3000/api/presence".to_string(),
                DIRECT_PRESENCE_URL.to_string()
            ]
        );
        assert!(ctx.avatar_url().starts_with("http://localhost:3000/avatar/3404416545?"));
    }

    #[test]
    fn bad_proxy_base_is_not_configured() {
        let dir = TempDir::new().unwrap();
        let err = AppContext::new(
            WidgetConfig::default(),
            "not a url",
            1,
            dir.path().to_path_buf(),
        )
        .unwrap_err();
        assert!(matches!(err, PortfolioError::NotConfigured(_)));
    }
}
