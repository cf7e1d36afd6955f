//! Progress reporting: a count-style bar over day windows.

use indicatif::{ProgressBar, ProgressStyle};

/// A small wrapper around an `indicatif` count bar.
/// - `inc_items(delta)` increments progress
/// - `finish(msg)` finalizes the bar with a message
pub struct ProgressScope {
    pb: ProgressBar,
}

impl ProgressScope {
    pub fn count<T: Into<String>>(label: T, total: u64) -> Self {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::with_template(
            "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
             it/s: {per_sec}  elapsed: {elapsed_precise}  eta: {eta_precise}",
        )
        .unwrap()
        .progress_chars("█▉▊▋▌▍▎▏  ");
        pb.set_style(style);
        let label = label.into();
        if !label.is_empty() {
            pb.set_message(label);
        }
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    #[inline]
    pub fn inc_items(&self, delta: u64) {
        self.pb.inc(delta);
    }

    pub fn finish<T: Into<String>>(&self, msg: T) {
        self.pb.finish_with_message(msg.into());
    }
}
