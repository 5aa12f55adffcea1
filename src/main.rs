#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod effects;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::context::DEFAULT_USER_ID;
use portfolio_core::logging::LoggingBuilder;
use portfolio_core::prefs::default_data_dir;
use portfolio_core::{AppContext, WidgetConfig};

/// Portfolio - games, projects and store of a Roblox developer
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Desktop portfolio: games, projects, store and live Roblox presence")]
struct Args {
    /// Directory for preferences (and logs unless --log-dir is given)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Base URL of the portfolio proxy
    #[arg(long, env = "PROXY_BASE", default_value = "http://localhost:3000")]
    proxy_base: String,

    /// Roblox user shown in the avatar badge
    #[arg(long, env = "ROBLOX_USER_ID", default_value_t = DEFAULT_USER_ID)]
    user_id: u64,

    /// Write JSONL logs to this directory
    #[arg(long, env = "LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    LoggingBuilder::new("desktop").log_dir(args.log_dir.clone()).init()?;

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let ctx = AppContext::new(WidgetConfig::default(), &args.proxy_base, args.user_id, data_dir)?;

    tracing::info!(
        proxy = %ctx.proxy_base,
        user_id = ctx.user_id,
        data_dir = ?ctx.data_dir,
        "starting portfolio"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(ctx)
        .launch(app::App);
    Ok(())
}
