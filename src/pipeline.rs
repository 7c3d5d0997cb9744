//! The retrieval pipeline: expand the topic, search per query, merge,
//! rank, select the top results, and translate their abstracts.
//!
//! Every external call is awaited one at a time in a fixed order; there is
//! no parallel fan-out. Under the scoring strategy the model is called once
//! per candidate, so the call count is O(candidates) plus one call per
//! selected paper for translation.

use serde::Serialize;
use tracing::info;

use crate::arxiv::{ArxivError, PaperSearch};
use crate::dedup;
use crate::expand;
use crate::llm::{CompletionClient, LlmError};
use crate::rank::{BatchRanker, Ranker, ScoreRanker, Strategy};
use crate::translate;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub topic: String,
    /// Papers in the final result. Default 5.
    pub max_results: usize,
    /// Expanded search queries to generate. Values ≤ 1 skip expansion and
    /// search the bare topic. Default 3.
    pub expand_queries: usize,
    /// Candidates fetched per search query. Default 25.
    pub per_query: usize,
    pub strategy: Strategy,
}

/// Final payload: the queries that were searched and the ranked, translated
/// papers. `papers` is at most `max_results` long, in relevance order.
#[derive(Debug, Serialize)]
pub struct RankedResult {
    pub queries: Vec<String>,
    pub papers: Vec<RankedPaper>,
}

#[derive(Debug, Serialize)]
pub struct RankedPaper {
    pub title: String,
    pub authors: Vec<String>,
    pub published: String,
    pub summary_cn: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    Llm(#[from] LlmError),

    #[error("{0}")]
    Search(#[from] ArxivError),
}

pub async fn run<C: CompletionClient, S: PaperSearch>(
    llm: &C,
    search: &S,
    config: &PipelineConfig,
) -> Result<RankedResult, PipelineError> {
    let queries = if config.expand_queries <= 1 {
        vec![config.topic.clone()]
    } else {
        expand::expand(llm, &config.topic, config.expand_queries).await?
    };
    info!(topic = %config.topic, queries = queries.len(), "searching");

    let mut lists = Vec::with_capacity(queries.len());
    for query in &queries {
        let list = search.search(query, config.per_query).await?;
        info!(query = %query, results = list.len(), "search complete");
        lists.push(list);
    }

    let candidates = dedup::merge(lists);
    info!(candidates = candidates.len(), "candidates after merge");

    let ranked = match config.strategy {
        Strategy::Score => ScoreRanker.rank(llm, candidates, &config.topic).await?,
        Strategy::Batch => BatchRanker.rank(llm, candidates, &config.topic).await?,
    };

    let mut papers = Vec::new();
    for paper in ranked.into_iter().take(config.max_results) {
        let summary_cn = translate::translate(llm, &paper.summary).await?;
        papers.push(RankedPaper {
            title: paper.title,
            authors: paper.authors,
            published: paper.published,
            summary_cn,
        });
    }
    info!(papers = papers.len(), "pipeline complete");

    Ok(RankedResult { queries, papers })
}
