//! Topic expansion: one topic in, several refined search strings out.

use tracing::warn;

use crate::llm::{CompletionClient, LlmError};
use crate::rank::parse::extract_json_array;

fn expand_prompt(topic: &str, count: usize) -> String {
    format!(
        "你是一名学术检索专家，请围绕主题 `{topic}` 生成 {count} 个适合在 arXiv 上检索的英文搜索关键词，\
         覆盖该主题的不同侧面。\
         请只输出一个 JSON 数组，数组的每个元素为一个搜索字符串，不要附加任何解释或文字。"
    )
}

/// Ask the model for `count` refined search strings. Non-string array
/// elements are discarded, strings are trimmed, and empties dropped; if no
/// usable array remains the topic itself is the single query, so the result
/// is never empty. A failed completion call propagates.
pub async fn expand<C: CompletionClient>(
    llm: &C,
    topic: &str,
    count: usize,
) -> Result<Vec<String>, LlmError> {
    let response = llm.complete(&expand_prompt(topic, count)).await?;

    let queries: Vec<String> = match extract_json_array(&response) {
        Ok(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Err(e) => {
            warn!(error = %e, "query expansion response unusable");
            Vec::new()
        }
    };

    if queries.is_empty() {
        warn!(topic, "falling back to the bare topic as the only query");
        return Ok(vec![topic.to_string()]);
    }
    Ok(queries)
}
