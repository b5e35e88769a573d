//! Per-client configuration: credential, response language and timeout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Response language understood by the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "uk_UA")]
    UkUa,
    #[serde(rename = "be_BY")]
    BeBy,
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "en_BR")]
    EnBr,
    #[serde(rename = "tr_TR")]
    TrTr,
}

impl Lang {
    pub const ALL: [Lang; 6] = [
        Lang::RuRu,
        Lang::UkUa,
        Lang::BeBy,
        Lang::EnUs,
        Lang::EnBr,
        Lang::TrTr,
    ];

    /// Wire code sent in the `lang` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RuRu => "ru_RU",
            Self::UkUa => "uk_UA",
            Self::BeBy => "be_BY",
            Self::EnUs => "en_US",
            Self::EnBr => "en_BR",
            Self::TrTr => "tr_TR",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Lang::ALL
            .into_iter()
            .find(|l| l.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown language '{}'. Use one of: ru_RU, uk_UA, be_BY, en_US, en_BR, tr_TR.",
                    s
                )
            })
    }
}

/// Settings handed to a client at construction. Nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API key; `None` means the `key` parameter is left out entirely.
    pub key: Option<String>,
    pub lang: Lang,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            key: None,
            lang: Lang::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key. A blank key counts as no key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.key = if key.trim().is_empty() { None } else { Some(key) };
        self
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}
