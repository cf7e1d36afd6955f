//! Drives the fetcher across day-indexed windows and accumulates raw records.

use crate::config::PAGE_SIZE_LIMIT;
use crate::fetch::Fetch;
use crate::progress::ProgressScope;
use anyhow::Result;
use serde_json::Value;

/// Request `per_day` submissions for each of `days` one-day windows and
/// return everything that came back, in window order.
///
/// A window whose request fails recoverably (transport error, non-200)
/// contributes nothing and the run continues; there is no retry. Duplicates
/// across adjacent windows are expected here and left for [`crate::preprocess`].
pub fn collect(
    fetcher: &impl Fetch,
    subreddit: &str,
    days: u32,
    per_day: u32,
    progress: bool,
) -> Result<Vec<Value>> {
    if per_day > PAGE_SIZE_LIMIT {
        tracing::warn!(
            "requested {} posts per day, clamping to {}",
            per_day,
            PAGE_SIZE_LIMIT
        );
    }
    let size = per_day.min(PAGE_SIZE_LIMIT);

    let pb = if progress {
        Some(ProgressScope::count("Collecting submissions", days as u64))
    } else {
        None
    };

    let mut dataset: Vec<Value> = Vec::new();
    for day in 0..days {
        match fetcher.fetch(subreddit, day, size) {
            Ok(mut posts) => dataset.append(&mut posts),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("request for window {}d failed: {}", day, e);
            }
            Err(e) => return Err(e.into()),
        }
        if let Some(pb) = &pb {
            pb.inc_items(1);
        }
    }

    if let Some(pb) = &pb {
        pb.finish(format!("{} submissions retrieved", dataset.len()));
    }
    Ok(dataset)
}
