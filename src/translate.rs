//! Abstract translation via the completion client.

use crate::llm::{CompletionClient, LlmError};

fn translate_prompt(text: &str) -> String {
    format!(
        "假设你是一名计算机专业的博士，请将以下英文翻译成中文：\n{text}\n\
         除了翻译内容外不需要任何其他输出。"
    )
}

/// Translate `text` to Chinese. Returns the trimmed response verbatim; an
/// empty string is a legal result and is passed through to the caller.
pub async fn translate<C: CompletionClient>(llm: &C, text: &str) -> Result<String, LlmError> {
    let translated = llm.complete(&translate_prompt(text)).await?;
    Ok(translated.trim().to_string())
}
