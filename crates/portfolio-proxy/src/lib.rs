//! Portfolio Proxy
//!
//! CORS pass-through so the portfolio site can reach Roblox and YouTube.
//!
//! ## Routes
//!
//! | method | path | upstream |
//! |--------|------|----------|
//! | GET | `/api/avatar/:id`, `/avatar/:id` | Roblox thumbnails, then the image itself |
//! | POST | `/api/presence`, `/presence` | Roblox presence (roproxy, then roblox) |
//! | GET | `/api/videos?maxResults=N` | YouTube channel uploads |
//! | GET | `/api/health` | - |

pub mod cache;
pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod state;
pub mod upstream;

use tokio::net::TcpListener;

pub use config::{ProxyConfig, YoutubeCredentials};
pub use error::ProxyError;
pub use routes::create_router;
pub use state::AppState;

/// Serve the proxy on an already-bound listener until the process ends.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ProxyError> {
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

/// Validate `config`, bind and serve.
///
/// Missing YouTube credentials fail here, before anything is bound.
pub async fn run(config: ProxyConfig) -> Result<(), ProxyError> {
    let youtube = config.youtube_credentials()?;
    let addr = config.bind_addr()?;
    let state = AppState::new(config, Some(youtube))?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "proxy listening");
    serve(listener, state).await
}
