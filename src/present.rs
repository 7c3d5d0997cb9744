//! Rendering the final result for the console. All output formatting lives
//! here; no other component writes user-facing text.

use crate::pipeline::RankedResult;

const SEPARATOR_WIDTH: usize = 80;

/// Render a result as human-readable text. The exact format is not a
/// compatibility contract; the content is: every query, every paper's
/// title/authors/published/translated summary, and explicit markers for the
/// empty states.
pub fn render(result: &RankedResult) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    out.push_str("Generated Search Queries:\n");
    if result.queries.is_empty() {
        out.push_str("- (No queries generated)\n");
    } else {
        for query in &result.queries {
            out.push_str(&format!("- {query}\n"));
        }
    }
    out.push_str(&separator);
    out.push('\n');

    if result.papers.is_empty() {
        out.push_str("No papers found for the given topic.\n");
        return out;
    }

    out.push_str("Papers:\n");
    for (i, paper) in result.papers.iter().enumerate() {
        if i > 0 {
            out.push_str(&separator);
            out.push('\n');
        }
        out.push_str(&format!("Title: {}\n", paper.title));
        out.push_str(&format!("Authors: {}\n", paper.authors.join(", ")));
        out.push_str(&format!("Published: {}\n", paper.published));
        out.push_str(&format!("Summary (CN): {}\n", paper.summary_cn));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::RankedPaper;

    fn ranked_paper(title: &str, summary_cn: &str) -> RankedPaper {
        RankedPaper {
            title: title.to_string(),
            authors: vec!["Author A".to_string(), "Author B".to_string()],
            published: "2024-01-01T00:00:00Z".to_string(),
            summary_cn: summary_cn.to_string(),
        }
    }

    #[test]
    fn lists_every_query_and_paper_field() {
        let result = RankedResult {
            queries: vec!["query1".to_string(), "query2".to_string()],
            papers: vec![ranked_paper("Test Paper 1", "测试总结1")],
        };

        let text = render(&result);
        assert!(text.contains("Generated Search Queries:"));
        assert!(text.contains("- query1"));
        assert!(text.contains("- query2"));
        assert!(text.contains("Title: Test Paper 1"));
        assert!(text.contains("Authors: Author A, Author B"));
        assert!(text.contains("Published: 2024-01-01T00:00:00Z"));
        assert!(text.contains("Summary (CN): 测试总结1"));
    }

    #[test]
    fn separator_sits_between_papers() {
        let result = RankedResult {
            queries: vec!["q".to_string()],
            papers: vec![
                ranked_paper("First", "一"),
                ranked_paper("Second", "二"),
            ],
        };

        let text = render(&result);
        let separator = "=".repeat(80);
        let first = text.find("Title: First").unwrap();
        let second = text.find("Title: Second").unwrap();
        let between = &text[first..second];
        assert!(between.contains(&separator));
    }

    #[test]
    fn no_papers_marker_and_no_paper_block() {
        let result = RankedResult {
            queries: vec!["q".to_string()],
            papers: vec![],
        };

        let text = render(&result);
        assert!(text.contains("No papers found for the given topic."));
        assert!(!text.contains("Title:"));
        assert!(!text.contains("Papers:"));
    }

    #[test]
    fn no_queries_marker() {
        let result = RankedResult {
            queries: vec![],
            papers: vec![ranked_paper("Still Printed", "摘要")],
        };

        let text = render(&result);
        assert!(text.contains("- (No queries generated)"));
        assert!(text.contains("Title: Still Printed"));
    }
}
