//! End-to-end dataset build: collect, clean, split, write.

use crate::collect::collect;
use crate::config::CollectOptions;
use crate::csv_out::write_csv;
use crate::fetch::{Fetch, SubmissionClient};
use crate::preprocess::preprocess;
use crate::split::shuffle_and_split;
use crate::util::init_tracing_once;
use anyhow::Result;
use std::path::Path;

/// Per-stage counts from one completed run.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunSummary {
    pub fetched: usize,
    pub kept: usize,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Builder facade over the whole pipeline.
#[derive(Clone)]
pub struct FlairDataset {
    opts: CollectOptions,
}

impl FlairDataset {
    pub fn new() -> Self {
        Self { opts: CollectOptions::default() }
    }

    // -------- Builder methods --------
    pub fn base_url(mut self, url: impl AsRef<str>) -> Self { self.opts = self.opts.with_base_url(url); self }
    pub fn subreddit(mut self, sub: impl AsRef<str>) -> Self { self.opts = self.opts.with_subreddit(sub); self }
    pub fn days(mut self, days: u32) -> Self { self.opts = self.opts.with_days(days); self }
    pub fn posts_per_day(mut self, n: u32) -> Self { self.opts = self.opts.with_posts_per_day(n); self }
    pub fn split_ratio(mut self, ratio: f64) -> Self { self.opts = self.opts.with_split_ratio(ratio); self }
    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_data_dir(dir); self }
    pub fn output_files(mut self, train: impl Into<String>, test: impl Into<String>) -> Self { self.opts = self.opts.with_output_files(train, test); self }
    pub fn seed(mut self, seed: u64) -> Self { self.opts = self.opts.with_seed(seed); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }

    /// Run against the real API.
    pub fn run(self) -> Result<RunSummary> {
        let client = SubmissionClient::new(self.opts.base_url.clone());
        self.run_with(&client)
    }

    /// Run against any fetcher. Tests use this with scripted stubs.
    pub fn run_with(self, fetcher: &impl Fetch) -> Result<RunSummary> {
        init_tracing_once();

        let raw = collect(
            fetcher,
            &self.opts.subreddit,
            self.opts.days,
            self.opts.posts_per_day,
            self.opts.progress,
        )?;
        let fetched = raw.len();

        let labeled = preprocess(raw)?;
        let kept = labeled.len();
        tracing::info!("{} labeled submissions after cleanup ({} fetched)", kept, fetched);

        let (train, test) = shuffle_and_split(labeled, self.opts.split_ratio, self.opts.seed);
        let summary = RunSummary {
            fetched,
            kept,
            train_rows: train.len(),
            test_rows: test.len(),
        };

        write_csv(&train, &self.opts.data_dir, &self.opts.train_file)?;
        write_csv(&test, &self.opts.data_dir, &self.opts.test_file)?;
        Ok(summary)
    }
}

impl Default for FlairDataset {
    fn default() -> Self {
        Self::new()
    }
}
