//! Proxy configuration, read from the command line or the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::ProxyError;

pub const THUMBNAIL_API_BASE: &str = "https://thumbnails.roblox.com/v1/users/avatar-headshot";
pub const PRESENCE_PRIMARY_URL: &str = "https://presence.roproxy.com/v1/presence/users";
pub const PRESENCE_FALLBACK_URL: &str = "https://presence.roblox.com/v1/presence/users";
pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Portfolio proxy - CORS pass-through for Roblox and YouTube
#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio-proxy")]
#[command(version)]
#[command(about = "CORS pass-through for Roblox thumbnails/presence and the YouTube Data API")]
pub struct ProxyConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// YouTube Data API key (required)
    #[arg(long, env = "YT_API_KEY", hide_env_values = true)]
    pub yt_api_key: Option<String>,

    /// Channel whose uploads `/api/videos` lists (required)
    #[arg(long, env = "YT_CHANNEL_ID")]
    pub yt_channel_id: Option<String>,

    #[arg(long, env = "THUMBNAIL_API_BASE", default_value = THUMBNAIL_API_BASE)]
    pub thumbnail_api_base: String,

    #[arg(long, env = "PRESENCE_PRIMARY_URL", default_value = PRESENCE_PRIMARY_URL)]
    pub presence_primary_url: String,

    #[arg(long, env = "PRESENCE_FALLBACK_URL", default_value = PRESENCE_FALLBACK_URL)]
    pub presence_fallback_url: String,

    #[arg(long, env = "YOUTUBE_API_BASE", default_value = YOUTUBE_API_BASE)]
    pub youtube_api_base: String,

    /// Seconds a presence reply is served from cache
    #[arg(long, env = "PRESENCE_TTL_SECS", default_value_t = 12)]
    pub presence_ttl_secs: u64,

    /// Seconds the channel video list is served from cache
    #[arg(long, env = "VIDEOS_TTL_SECS", default_value_t = 600)]
    pub videos_ttl_secs: u64,

    /// Deadline for each upstream request
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 9)]
    pub upstream_timeout_secs: u64,

    /// Also write JSONL logs into this directory
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Validated YouTube key and channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeCredentials {
    pub api_key: String,
    pub channel_id: String,
}

impl ProxyConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr, ProxyError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ProxyError::NotConfigured(format!("invalid HOST/PORT: {}", e))
            })
    }

    /// Both YouTube values, or `NotConfigured` naming the first one missing.
    pub fn youtube_credentials(&self) -> Result<YoutubeCredentials, ProxyError> {
        let api_key = non_empty(&self.yt_api_key)
            .ok_or_else(|| ProxyError::NotConfigured("missing YT_API_KEY".to_string()))?;
        let channel_id = non_empty(&self.yt_channel_id)
            .ok_or_else(|| ProxyError::NotConfigured("missing YT_CHANNEL_ID".to_string()))?;
        Ok(YoutubeCredentials {
            api_key,
            channel_id,
        })
    }

    pub fn presence_endpoints(&self) -> Vec<String> {
        vec![
            self.presence_primary_url.clone(),
            self.presence_fallback_url.clone(),
        ]
    }

    pub fn presence_ttl(&self) -> Duration {
        Duration::from_secs(self.presence_ttl_secs)
    }

    pub fn videos_ttl(&self) -> Duration {
        Duration::from_secs(self.videos_ttl_secs)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
