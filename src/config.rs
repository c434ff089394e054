//! Run configuration, loaded once at startup from the environment.
//!
//! All configuration is environment-driven; the main binary takes no CLI
//! arguments. Validation happens here, at construction — components further
//! down the chain can assume a well-formed [`Config`].

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::manifest::UploadItem;

/// Default API host. The original integration ran against the Pinterest
/// sandbox; production runs override this via `PINTEREST_API_BASE`.
pub const DEFAULT_API_BASE: &str = "https://api-sandbox.pinterest.com";

/// OAuth client credentials for the refresh-token exchange.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_id: String,
    /// May be empty — Basic auth is still sent as `app_id:`.
    pub app_secret: String,
    pub refresh_token: String,
}

/// What this run uploads: a whole manifest, or one pin from `INPUT_*` vars.
#[derive(Debug, Clone)]
pub enum RunMode {
    /// Batch mode, selected by the presence of `INPUT_CSV_PATH`.
    Batch(PathBuf),
    /// Single-pin mode, built from the `INPUT_*` environment variables.
    Single(UploadItem),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Destination board for every pin in the run.
    pub board_id: String,
    /// API host both endpoints are derived from, no trailing slash.
    pub api_base: String,
    pub mode: RunMode,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary lookup. `from_env` is this over
    /// `std::env::var`; tests supply a map instead of mutating the process
    /// environment.
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &'static str| -> Result<String> {
            match get(name) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(Error::MissingConfig(name)),
            }
        };
        let optional = |name: &str| get(name).unwrap_or_default();

        let credentials = Credentials {
            app_id: required("PINTEREST_APP_ID")?,
            app_secret: optional("PINTEREST_APP_SECRET"),
            refresh_token: required("PINTEREST_REFRESH_TOKEN")?,
        };
        let board_id = required("PINTEREST_BOARD_ID")?;

        let api_base = match get("PINTEREST_API_BASE") {
            Some(base) if !base.is_empty() => base.trim_end_matches('/').to_string(),
            _ => DEFAULT_API_BASE.to_string(),
        };

        let mode = match get("INPUT_CSV_PATH") {
            Some(path) if !path.is_empty() => RunMode::Batch(PathBuf::from(path)),
            _ => RunMode::Single(UploadItem {
                file_path: required("INPUT_FILE_PATH")?,
                title: optional("INPUT_TITLE"),
                description: optional("INPUT_DESCRIPTION"),
                link: optional("INPUT_LINK"),
                alt_text: optional("INPUT_ALT_TEXT"),
                section_id: optional("INPUT_SECTION_ID"),
                note: optional("INPUT_NOTE"),
            }),
        };

        Ok(Self {
            credentials,
            board_id,
            api_base,
            mode,
        })
    }
}
