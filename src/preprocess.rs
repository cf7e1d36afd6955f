//! Cleans raw API records and converts them into typed, labeled posts.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source key holding the label. Its presence (non-null) is what makes a
/// submission usable as a training example.
pub const FLAIR_KEY: &str = "link_flair_text";

/// A submission reduced to the fields the downstream model cares about.
/// Untyped JSON never leaves this module; everything past here is `FlairedPost`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlairedPost {
    pub author: String,
    pub created_utc: i64,
    pub title: String,
    #[serde(rename = "link_flair_text")]
    pub flair: String,
}

/// Deduplicate, drop unlabeled records, and project the survivors.
///
/// Dedup is by whole-record equality: the search endpoint exposes no
/// canonical id, and adjacent day windows overlap, so the same submission
/// can come back from more than one request. Membership scan is quadratic,
/// which is fine at the few-hundred-thousand-record scale of one run.
///
/// A record that passes the flair check but lacks `author`, `created_utc`
/// or `title` is an error, not a skip.
pub fn preprocess(raw: Vec<Value>) -> Result<Vec<FlairedPost>> {
    let mut unique: Vec<Value> = Vec::new();
    for post in raw {
        if !unique.contains(&post) && has_flair(&post) {
            unique.push(post);
        }
    }

    unique
        .into_iter()
        .enumerate()
        .map(|(i, post)| project(&post).with_context(|| format!("projecting record {}", i)))
        .collect()
}

fn has_flair(post: &Value) -> bool {
    matches!(post.get(FLAIR_KEY), Some(v) if !v.is_null())
}

fn project(post: &Value) -> Result<FlairedPost> {
    Ok(FlairedPost {
        author: str_field(post, "author")?,
        created_utc: post
            .get("created_utc")
            .and_then(Value::as_i64)
            .ok_or_else(|| anyhow!("missing or non-integer `created_utc`"))?,
        title: str_field(post, "title")?,
        flair: str_field(post, FLAIR_KEY)?,
    })
}

fn str_field(post: &Value, key: &str) -> Result<String> {
    post.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| anyhow!("missing or non-string `{}`", key))
}
