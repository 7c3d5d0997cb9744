//! Tolerant parsing of free-text model output.
//!
//! Every parser here is a pure function returning `Result<T, ParseFailure>`;
//! the fallback applied on failure is documented next to it so the policy is
//! visible and testable on its own.

use serde_json::Value;

/// Score substituted when a relevance response cannot be parsed.
pub const DEFAULT_SCORE: u8 = 0;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),

    #[error("score {0} outside 0..=100")]
    OutOfRange(i64),

    #[error("no JSON array found in response")]
    NoArray,
}

/// Strict form of [`parse_score`]: trim, integer parse, range check.
pub fn try_parse_score(text: &str) -> Result<u8, ParseFailure> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ParseFailure::NotAnInteger(trimmed.to_string()))?;
    if !(0..=100).contains(&value) {
        return Err(ParseFailure::OutOfRange(value));
    }
    Ok(value as u8)
}

/// Parse a relevance score out of a model response. Total over all inputs:
/// anything unparseable or outside `[0,100]` yields [`DEFAULT_SCORE`].
pub fn parse_score(text: &str) -> u8 {
    try_parse_score(text).unwrap_or(DEFAULT_SCORE)
}

/// Extract the first syntactically valid JSON array from free text.
///
/// The model is asked for a bare array but routinely wraps it in prose;
/// scanning starts at each `[` and accepts the first position where a
/// complete array parses, ignoring whatever trails it.
pub fn extract_json_array(text: &str) -> Result<Vec<Value>, ParseFailure> {
    for (pos, _) in text.match_indices('[') {
        let mut stream = serde_json::Deserializer::from_str(&text[pos..]).into_iter::<Value>();
        if let Some(Ok(Value::Array(items))) = stream.next() {
            return Ok(items);
        }
    }
    Err(ParseFailure::NoArray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_scores_pass_through() {
        assert_eq!(parse_score("0"), 0);
        assert_eq!(parse_score("73"), 73);
        assert_eq!(parse_score("100"), 100);
        assert_eq!(parse_score("  90\n"), 90);
    }

    #[test]
    fn non_integer_text_yields_default() {
        assert_eq!(parse_score("abc"), DEFAULT_SCORE);
        assert_eq!(parse_score("90 points"), DEFAULT_SCORE);
        assert_eq!(parse_score("8.5"), DEFAULT_SCORE);
        assert_eq!(parse_score(""), DEFAULT_SCORE);
    }

    #[test]
    fn out_of_range_yields_default() {
        assert_eq!(parse_score("101"), DEFAULT_SCORE);
        assert_eq!(parse_score("-1"), DEFAULT_SCORE);
        assert_eq!(parse_score("1000"), DEFAULT_SCORE);
    }

    #[test]
    fn try_parse_reports_failure_kind() {
        assert_eq!(
            try_parse_score("abc"),
            Err(ParseFailure::NotAnInteger("abc".into()))
        );
        assert_eq!(try_parse_score("150"), Err(ParseFailure::OutOfRange(150)));
        assert_eq!(try_parse_score("42"), Ok(42));
    }

    #[test]
    fn array_found_amid_prose() {
        let items = extract_json_array(r#"Here you go: [1, 2, 3]. Anything else?"#).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], 1);
    }

    #[test]
    fn array_of_strings() {
        let items = extract_json_array(r#"["a", "b"]"#).unwrap();
        assert_eq!(items[0], "a");
        assert_eq!(items[1], "b");
    }

    #[test]
    fn first_valid_array_wins() {
        let items = extract_json_array("[not json] then [1] and [2, 3]").unwrap();
        assert_eq!(items, vec![serde_json::json!(1)]);
    }

    #[test]
    fn nested_arrays_parse_as_one_value() {
        let items = extract_json_array("result: [[1, 2], [3]]").unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_array());
    }

    #[test]
    fn no_array_is_failure() {
        assert_eq!(extract_json_array("sorry, I can't help"), Err(ParseFailure::NoArray));
        assert_eq!(extract_json_array(""), Err(ParseFailure::NoArray));
        assert_eq!(extract_json_array("[1, 2"), Err(ParseFailure::NoArray));
    }
}
