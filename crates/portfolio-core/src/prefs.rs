//! UI preferences (language and theme) persisted as JSON.
//!
//! Read once at startup and written on every change. A missing or unreadable
//! file yields the defaults rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "zh-CN")]
    Chinese,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::Chinese,
        Language::Arabic,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Chinese => "zh-CN",
            Language::Arabic => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Name in the language itself, for the selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Chinese => "中文",
            Language::Arabic => "العربية",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Arabic)
    }

    /// Value for the document `dir` attribute.
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(PREFERENCES_FILE)
    }

    /// Load from `<data_dir>/preferences.json`, falling back to defaults.
    pub fn load(data_dir: &Path) -> Self {
        let path = Self::path_in(data_dir);
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path)
            .map_err(crate::PortfolioError::from)
            .and_then(|s| serde_json::from_str::<Preferences>(&s).map_err(Into::into))
        {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> PortfolioResult<()> {
        fs::create_dir_all(data_dir)?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(Self::path_in(data_dir), contents)?;
        tracing::debug!(language = self.language.code(), theme = self.theme.as_str(), "preferences saved");
        Ok(())
    }
}

/// `dirs::data_dir()/portfolio`, or `./portfolio-data` when there is none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("portfolio"))
        .unwrap_or_else(|| PathBuf::from("portfolio-data"))
}
