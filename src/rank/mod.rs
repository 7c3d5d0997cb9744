//! Relevance ranking: tolerant response parsing and the two ranking
//! strategies behind the `Ranker` trait.

pub(crate) mod parse;
mod strategy;

pub use strategy::{BatchRanker, Ranker, ScoreRanker, Strategy};
