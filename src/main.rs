use anyhow::Result;
use flairset::FlairDataset;

const SUBREDDIT: &str = "science";
const DAYS: u32 = 1095; // roughly three years of one-day windows
const POSTS_PER_DAY: u32 = 500;
const SPLIT_RATIO: f64 = 0.8;
const DATA_ROOT: &str = "./data";

fn main() -> Result<()> {
    let summary = FlairDataset::new()
        .subreddit(SUBREDDIT)
        .days(DAYS)
        .posts_per_day(POSTS_PER_DAY)
        .split_ratio(SPLIT_RATIO)
        .data_dir(DATA_ROOT)
        .run()?;

    println!(
        "Fetched {} submissions, kept {} labeled ({} train / {} test)",
        summary.fetched, summary.kept, summary.train_rows, summary.test_rows
    );
    Ok(())
}
