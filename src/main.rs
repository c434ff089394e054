use anyhow::Result;

use pinbatch::api::{DEFAULT_LINK, PinterestClient};
use pinbatch::config::{Config, RunMode};
use pinbatch::{auth, manifest, pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    // Fails before any network call if a required variable is absent.
    let config = Config::from_env()?;

    let http = reqwest::Client::new();

    log::info!("Authenticating...");
    let token =
        auth::exchange_refresh_token(&http, &config.api_base, &config.credentials).await?;
    let api = PinterestClient::new(http, config.api_base.as_str(), token);

    match &config.mode {
        RunMode::Batch(path) => {
            let manifest_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            log::info!("Processing manifest: {}", path.display());

            let items = manifest::read_manifest(path)?;
            log::info!("Found {} pin(s) to upload from {manifest_name}", items.len());
            log::info!("Pins without a link will point at {DEFAULT_LINK}");

            let outcome = pipeline::run_batch(&api, &config.board_id, &items).await;

            // Partial success is a normal exit; only a fully failed batch
            // is fatal. Single-pin mode below is stricter on purpose.
            if outcome.all_failed() {
                anyhow::bail!("all {} pins failed, batch unsuccessful", outcome.total());
            }
            log::info!("Manifest {manifest_name} processed");
        }
        RunMode::Single(item) => {
            let label = pipeline::item_label(item);
            log::info!("Uploading single pin: {label}");
            pipeline::process_item(&api, &config.board_id, item).await?;
            log::info!("Pin created: {label}");
        }
    }

    Ok(())
}
