use serde::{Deserialize, Serialize};

/// A candidate paper as returned by the search API.
///
/// Immutable once fetched; within one run a paper is identified by its
/// exact `title` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    /// ISO-like timestamp from the feed, kept as-is.
    pub published: String,
    pub link: Option<String>,
}
