//! CSV serialization of labeled posts.

use crate::preprocess::FlairedPost;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Output columns, in the order they are written.
pub const FIELD_NAMES: [&str; 4] = ["author", "created_utc", "title", "link_flair_text"];

/// Write `dataset` to `<dir>/<filename>`, creating `dir` if needed.
///
/// The header row is written even for an empty dataset. Quoting and
/// escaping of embedded delimiters/quotes/newlines is the csv crate's
/// standard behavior. Returns the resolved path.
pub fn write_csv(dataset: &[FlairedPost], dir: &Path, filename: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(filename);

    // Header is written explicitly (so empty datasets still get one);
    // auto-headers must stay off or serialize would emit a second header row.
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("create {}", path.display()))?;
    w.write_record(FIELD_NAMES)
        .with_context(|| format!("write header to {}", path.display()))?;
    for post in dataset {
        w.serialize(post)
            .with_context(|| format!("write record to {}", path.display()))?;
    }
    w.flush().with_context(|| format!("flush {}", path.display()))?;

    tracing::info!("data saved under {}", path.display());
    Ok(path)
}
