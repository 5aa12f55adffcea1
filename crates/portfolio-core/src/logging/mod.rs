//! Logging setup shared by the desktop app and the proxy.
//!
//! Console output goes through `tracing_subscriber::fmt`. With a log
//! directory configured, every event is also appended as one JSON object to
//! `<log_dir>/<YYYY-MM-DD>_<service>.jsonl`:
//!
//! ```bash
//! jq 'select(.level == "warn")' logs/*_proxy.jsonl
//! ```

mod entry;
mod layer;
mod writer;

use std::path::PathBuf;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub use entry::LogEntry;
pub use layer::JsonlLayer;
pub use writer::{log_file_path, read_entries, ServiceLogWriter};

pub const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn";

pub struct LoggingBuilder {
    service: String,
    log_dir: Option<PathBuf>,
    filter: String,
    console: bool,
}

impl LoggingBuilder {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            log_dir: None,
            filter: DEFAULT_FILTER.to_string(),
            console: true,
        }
    }

    /// Also write JSONL into `dir`.
    pub fn log_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.log_dir = dir;
        self
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn no_console(mut self) -> Self {
        self.console = false;
        self
    }

    pub fn build_layer(&self) -> std::io::Result<Option<JsonlLayer>> {
        self.log_dir
            .as_ref()
            .map(|dir| JsonlLayer::new(dir, &self.service))
            .transpose()
    }

    /// Install the global subscriber. Returns the JSONL file path, if any.
    pub fn init(self) -> std::io::Result<Option<PathBuf>> {
        let jsonl = self.build_layer()?;
        let path = jsonl.as_ref().map(|l| l.log_path().to_path_buf());

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter));
        let console = self.console.then(|| tracing_subscriber::fmt::layer().with_target(true));

        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .with(jsonl)
            .try_init()
            .map_err(std::io::Error::other)?;

        Ok(path)
    }
}
