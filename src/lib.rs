mod collect;
mod config;
mod csv_out;
mod fetch;
mod pipeline;
mod preprocess;
mod progress;
mod split;
mod util;

pub use crate::config::{CollectOptions, PAGE_SIZE_LIMIT};
pub use crate::pipeline::{FlairDataset, RunSummary};

// Expose the individual stages so they can be driven (and tested) directly.
pub use crate::collect::collect;
pub use crate::csv_out::{write_csv, FIELD_NAMES};
pub use crate::fetch::{Fetch, FetchError, SubmissionClient};
pub use crate::preprocess::{preprocess, FlairedPost, FLAIR_KEY};
pub use crate::split::shuffle_and_split;

// Expose tracing init so binaries can set up logging before building options.
pub use crate::util::init_tracing_once;
