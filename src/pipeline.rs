//! Batch orchestration — drives each upload item through encode → create-pin.
//!
//! Strictly sequential: every request completes before the next item starts.
//! Per-item failures are logged and counted here; they never abort the rest
//! of the batch. Whether a failure is fatal to the process is decided by the
//! binary, based on the returned [`BatchOutcome`].

use std::path::Path;

use crate::api::{PinApi, PinRequest};
use crate::error::Result;
use crate::manifest::UploadItem;
use crate::media;

/// Success/failure tally for one batch run. This is the only place counts
/// are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// True when every item in a non-empty batch failed — the only batch
    /// outcome treated as fatal.
    pub fn all_failed(&self) -> bool {
        self.succeeded == 0 && self.failed > 0
    }
}

/// Progress label for an item: its title, or the file's base name when the
/// title is empty.
pub fn item_label(item: &UploadItem) -> String {
    if !item.title.is_empty() {
        return item.title.clone();
    }
    Path::new(&item.file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| item.file_path.clone())
}

/// Upload one item: read and validate the image, build the request, send it.
pub async fn process_item(api: &dyn PinApi, board_id: &str, item: &UploadItem) -> Result<()> {
    let image = media::encode_image(Path::new(&item.file_path))?;
    let request = PinRequest::from_item(board_id, item, image);
    api.create_pin(&request).await
}

/// Run a whole batch in manifest order, logging per-item progress and
/// returning the final tally.
pub async fn run_batch(api: &dyn PinApi, board_id: &str, items: &[UploadItem]) -> BatchOutcome {
    let total = items.len();
    let mut outcome = BatchOutcome {
        succeeded: 0,
        failed: 0,
    };

    for (i, item) in items.iter().enumerate() {
        let label = item_label(item);
        log::info!("Processing pin {}/{total}: {label}", i + 1);

        match process_item(api, board_id, item).await {
            Ok(()) => {
                log::info!("Pin {}/{total} created: {label}", i + 1);
                outcome.succeeded += 1;
            }
            Err(err) => {
                log::error!("Failed to create pin {}/{total} ({label}): {err}", i + 1);
                outcome.failed += 1;
            }
        }
    }

    log::info!(
        "Batch complete: {} succeeded, {} failed",
        outcome.succeeded,
        outcome.failed
    );
    if outcome.failed > 0 {
        log::warn!("Some pins failed, see errors above");
    }

    outcome
}
