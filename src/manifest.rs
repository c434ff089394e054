//! Manifest parsing — turns a CSV file into an ordered list of [`UploadItem`]s.
//!
//! Columns are positional, in the fixed order given by [`MANIFEST_COLUMNS`].
//! Rows may be shorter than seven fields; missing trailing fields are treated
//! as empty strings. A header row is detected heuristically and skipped.

use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

use crate::error::{Error, Result};

/// The positional column order of a manifest file.
///
/// Only `file_path` is required; every other column is optional and defaults
/// to the empty string when the row is shorter.
pub const MANIFEST_COLUMNS: [&str; 7] = [
    "file_path",
    "title",
    "description",
    "link",
    "alt_text",
    "section_id",
    "note",
];

/// One image upload, as described by a manifest row or the single-pin
/// environment variables. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadItem {
    pub file_path: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub alt_text: String,
    pub section_id: String,
    pub note: String,
}

impl UploadItem {
    fn from_record(record: &StringRecord) -> Self {
        let field = |i: usize| record.get(i).unwrap_or("").to_string();
        Self {
            file_path: field(0),
            title: field(1),
            description: field(2),
            link: field(3),
            alt_text: field(4),
            section_id: field(5),
            note: field(6),
        }
    }
}

/// Heuristic header detection: the first row is a header if its fields,
/// case-folded and joined, contain "file_path" or "title".
fn is_header(record: &StringRecord) -> bool {
    let joined = record
        .iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("|");
    joined.contains("file_path") || joined.contains("title")
}

/// Read a manifest file into upload items, in file order.
///
/// Skips the header row (if detected) and any row whose first field is empty,
/// logging a warning per skipped row. Fails if the file cannot be opened or
/// parsed, or if no usable rows remain.
pub fn read_manifest(path: &Path) -> Result<Vec<UploadItem>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| Error::ManifestIo {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| Error::ManifestIo {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(Error::ManifestEmpty {
            path: path.to_path_buf(),
        });
    }

    let start = if is_header(&records[0]) {
        log::info!("Manifest header detected, skipping first row");
        1
    } else {
        0
    };

    let mut items = Vec::new();
    for (i, record) in records.iter().enumerate().skip(start) {
        if record.get(0).map(str::is_empty).unwrap_or(true) {
            log::warn!("Skipping manifest row {}: missing file_path", i + 1);
            continue;
        }
        items.push(UploadItem::from_record(record));
    }

    if items.is_empty() {
        return Err(Error::ManifestEmpty {
            path: path.to_path_buf(),
        });
    }

    Ok(items)
}
