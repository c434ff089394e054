//! # pinbatch
//!
//! Batch pin uploader for the Pinterest v5 API: read upload items from a CSV
//! manifest (or a single set of environment variables), exchange an OAuth
//! refresh token for an access token, then create one pin per item from a
//! base64-encoded JPEG or PNG.
//!
//! The pipeline is deliberately linear — one token exchange per run, then one
//! request per item, each awaited before the next begins. No retries, no
//! concurrency, no state between runs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pinbatch::api::PinterestClient;
//! use pinbatch::config::{Config, RunMode};
//! use pinbatch::{auth, manifest, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // All configuration comes from PINTEREST_* / INPUT_* env vars.
//!     let config = Config::from_env()?;
//!
//!     let http = reqwest::Client::new();
//!     let token =
//!         auth::exchange_refresh_token(&http, &config.api_base, &config.credentials).await?;
//!     let api = PinterestClient::new(http, config.api_base.as_str(), token);
//!
//!     if let RunMode::Batch(ref path) = config.mode {
//!         let items = manifest::read_manifest(path)?;
//!         let outcome = pipeline::run_batch(&api, &config.board_id, &items).await;
//!         println!("{} succeeded, {} failed", outcome.succeeded, outcome.failed);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] — environment-driven run configuration
//! - [`auth`] — OAuth refresh-token exchange
//! - [`manifest`] — CSV manifest parsing into [`manifest::UploadItem`]s
//! - [`media`] — content sniffing and base64 encoding of image files
//! - [`api`] — wire types and the pins-endpoint client
//! - [`pipeline`] — the sequential batch orchestrator
//! - [`error`] — the library error type

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod manifest;
pub mod media;
pub mod pipeline;

pub use error::Error;
