use flairset::{Fetch, FetchError};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Build a raw submission the way the search endpoint returns it: the four
/// interesting keys plus assorted extras a real record carries.
pub fn raw_post(author: &str, created_utc: i64, title: &str, flair: &str) -> Value {
    json!({
        "author": author,
        "created_utc": created_utc,
        "title": title,
        "link_flair_text": flair,
        "subreddit": "science",
        "id": format!("p{}", created_utc),
        "score": 42,
        "num_comments": 7,
        "over_18": false
    })
}

/// Same shape but without any flair key (an unlabeled submission).
pub fn raw_post_unflaired(author: &str, created_utc: i64, title: &str) -> Value {
    json!({
        "author": author,
        "created_utc": created_utc,
        "title": title,
        "subreddit": "science",
        "id": format!("p{}", created_utc),
        "score": 1,
        "num_comments": 0,
        "over_18": false
    })
}

/// Fetcher stub that replays a fixed sequence of per-window responses and
/// records every call it receives. Windows beyond the script return nothing.
pub struct ScriptedFetcher {
    responses: RefCell<VecDeque<Result<Vec<Value>, FetchError>>>,
    pub calls: RefCell<Vec<(String, u32, u32)>>,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Result<Vec<Value>, FetchError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Fetch for ScriptedFetcher {
    fn fetch(&self, subreddit: &str, days_before: u32, size: u32) -> Result<Vec<Value>, FetchError> {
        self.calls
            .borrow_mut()
            .push((subreddit.to_string(), days_before, size));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Shared in-memory sink for the capturing subscriber below.
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;
    fn make_writer(&'a self) -> Self::Writer {
        LogBuffer(Arc::clone(&self.0))
    }
}

/// Run `f` with a thread-local subscriber that records log output, and
/// return `f`'s result together with everything logged. Lets tests count
/// the WARN lines a stage emits.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(LogBuffer(Arc::clone(&buf)))
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    (out, logs)
}

/// Count WARN lines in captured log output.
pub fn warn_count(logs: &str) -> usize {
    logs.lines().filter(|l| l.contains("WARN")).count()
}

/// Read a CSV file back as (header, data rows), every field as a string.
pub fn read_csv_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let header = rdr
        .headers()
        .unwrap()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
        .collect();
    (header, rows)
}

/// Raw line count of a text file (header included), skipping nothing.
pub fn count_lines(path: &Path) -> usize {
    let r = BufReader::new(File::open(path).unwrap());
    r.lines().map(|l| l.unwrap()).filter(|s| !s.is_empty()).count()
}
