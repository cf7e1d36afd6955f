use std::path::{Path, PathBuf};

/// Hard cap on the number of submissions the search endpoint returns per
/// request. Larger requests are clamped, never rejected.
pub const PAGE_SIZE_LIMIT: u32 = 500;

/// User-facing options with sensible defaults and builder chaining.
///
/// All tunables for one collection run live here; components receive this
/// (or pieces of it) explicitly instead of reading process-wide state.
#[derive(Clone, Debug)]
pub struct CollectOptions {
    pub base_url: String,             // aggregation API root, no trailing slash
    pub subreddit: String,            // normalized lowercase, no "r/"
    pub days: u32,                    // number of one-day windows to request
    pub posts_per_day: u32,           // requested page size per window (clamped to PAGE_SIZE_LIMIT)
    pub split_ratio: f64,             // train fraction in [0, 1]
    pub data_dir: PathBuf,            // output directory, created on demand
    pub train_file: String,
    pub test_file: String,
    pub seed: Option<u64>,            // Some(n) for a deterministic shuffle, None for entropy
    pub progress: bool,               // show progress bar
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            base_url: "https://api.pushshift.io/reddit".to_string(),
            subreddit: "science".to_string(),
            days: 1,
            posts_per_day: PAGE_SIZE_LIMIT,
            split_ratio: 0.8,
            data_dir: PathBuf::from("./data"),
            train_file: "train.csv".to_string(),
            test_file: "test.csv".to_string(),
            seed: None,
            progress: true,
        }
    }
}

impl CollectOptions {
    pub fn with_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.base_url = url.as_ref().trim_end_matches('/').to_string();
        self
    }
    pub fn with_subreddit(mut self, sub: impl AsRef<str>) -> Self {
        let mut s = sub.as_ref().trim().to_lowercase();
        if let Some(rest) = s.strip_prefix("r/") {
            s = rest.to_string();
        }
        self.subreddit = s;
        self
    }
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }
    pub fn with_posts_per_day(mut self, n: u32) -> Self {
        self.posts_per_day = n;
        self
    }
    pub fn with_split_ratio(mut self, ratio: f64) -> Self {
        self.split_ratio = ratio.clamp(0.0, 1.0);
        self
    }
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_output_files(mut self, train: impl Into<String>, test: impl Into<String>) -> Self {
        self.train_file = train.into();
        self.test_file = test.into();
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
}
