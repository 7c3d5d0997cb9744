use tracing::{debug, warn};

use crate::arxiv::PaperRecord;
use crate::llm::{CompletionClient, LlmError};
use crate::rank::parse::{extract_json_array, parse_score};

/// Ranking strategy selector.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum Strategy {
    /// One model call per paper, integer score, stable descending sort.
    #[default]
    Score,
    /// One model call for the whole batch, returning an index ordering.
    Batch,
}

/// Orders papers by topical relevance. Same elements in, reordered out;
/// the batch strategy may drop papers the model omits (see `BatchRanker`).
pub trait Ranker {
    async fn rank<C: CompletionClient>(
        &self,
        llm: &C,
        papers: Vec<PaperRecord>,
        topic: &str,
    ) -> Result<Vec<PaperRecord>, LlmError>;
}

/// Scores each paper independently in `[0,100]`, then stable-sorts
/// descending. Issues one model call per paper; a malformed response fixes
/// that paper's score at 0 and never aborts the batch.
pub struct ScoreRanker;

struct ScoredPaper {
    score: u8,
    paper: PaperRecord,
}

fn score_prompt(topic: &str, title: &str, summary: &str) -> String {
    format!(
        "你是一名论文评估专家，请根据主题 `{topic}`，判断以下论文与该主题的相关性。\n\n\
         论文标题：{title}\n\
         论文摘要：{summary}\n\n\
         请你给出一个从 0 到 100 的相关性得分（越相关分数越高），\
         只输出一个整数，不要附加任何解释或文字。"
    )
}

impl Ranker for ScoreRanker {
    async fn rank<C: CompletionClient>(
        &self,
        llm: &C,
        papers: Vec<PaperRecord>,
        topic: &str,
    ) -> Result<Vec<PaperRecord>, LlmError> {
        if papers.is_empty() {
            return Ok(papers);
        }

        let mut scored = Vec::with_capacity(papers.len());
        for paper in papers {
            let response = llm
                .complete(&score_prompt(topic, &paper.title, &paper.summary))
                .await?;
            let score = parse_score(&response);
            if score == 0 {
                debug!(title = %paper.title, response = %response, "score parsed as 0");
            }
            scored.push(ScoredPaper { score, paper });
        }

        // Stable sort: equal scores keep discovery order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(scored.into_iter().map(|s| s.paper).collect())
    }
}

/// Presents all titles as a 1-indexed list and asks for a JSON array of
/// indices in desired order. Out-of-range or non-numeric entries
/// are skipped and repeated indices keep their first occurrence, so the
/// output never exceeds the input; papers the model omits are dropped. An
/// unusable response falls back to the input order unchanged.
pub struct BatchRanker;

fn batch_prompt(topic: &str, papers: &[PaperRecord]) -> String {
    let mut listing = String::new();
    for (i, paper) in papers.iter().enumerate() {
        listing.push_str(&format!("{}. {}\n", i + 1, paper.title));
    }
    format!(
        "你是一名论文评估专家，请根据主题 `{topic}`，将以下论文按相关性从高到低排序。\n\n\
         论文列表：\n{listing}\n\
         请只输出一个 JSON 数组，按相关性降序给出论文序号（从 1 开始），\
         例如 [2, 1, 3]，不要附加任何解释或文字。"
    )
}

impl Ranker for BatchRanker {
    async fn rank<C: CompletionClient>(
        &self,
        llm: &C,
        papers: Vec<PaperRecord>,
        topic: &str,
    ) -> Result<Vec<PaperRecord>, LlmError> {
        if papers.is_empty() {
            return Ok(papers);
        }

        let response = llm.complete(&batch_prompt(topic, &papers)).await?;

        let order = match extract_json_array(&response) {
            Ok(items) => {
                let mut seen = vec![false; papers.len()];
                let mut order = Vec::new();
                for item in items {
                    let Some(index) = item.as_i64() else { continue };
                    if index < 1 || index as usize > papers.len() {
                        continue;
                    }
                    let idx = (index - 1) as usize;
                    if !seen[idx] {
                        seen[idx] = true;
                        order.push(idx);
                    }
                }
                order
            }
            Err(e) => {
                warn!(error = %e, "batch ranking response unusable, keeping input order");
                return Ok(papers);
            }
        };

        if order.is_empty() {
            warn!("batch ranking yielded no usable indices, keeping input order");
            return Ok(papers);
        }

        let mut slots: Vec<Option<PaperRecord>> = papers.into_iter().map(Some).collect();
        Ok(order
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect())
    }
}
