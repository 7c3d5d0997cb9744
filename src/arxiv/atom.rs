//! Tolerant parsing of the arXiv Atom feed.
//!
//! The export API returns Atom XML. Entries are located by string scanning
//! rather than a full XML parse: the feed structure is flat and stable, and
//! a malformed entry should drop that entry, not the whole response.

use super::types::PaperRecord;

/// Parse an Atom feed body into paper records. Entries missing a title are
/// skipped.
pub fn parse_feed(xml: &str) -> Vec<PaperRecord> {
    extract_entries(xml)
        .into_iter()
        .filter_map(parse_entry)
        .collect()
}

/// Extract all `<entry>...</entry>` blocks from the feed.
fn extract_entries(xml: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut search_from = 0;

    while let Some(pos) = xml[search_from..].find("<entry>") {
        let start = search_from + pos;
        let Some(end_pos) = xml[start..].find("</entry>") else {
            break;
        };
        let end = start + end_pos + "</entry>".len();
        entries.push(&xml[start..end]);
        search_from = end;
    }

    entries
}

fn parse_entry(entry: &str) -> Option<PaperRecord> {
    let title = normalize_whitespace(&tag_text(entry, "title")?);

    let mut authors = Vec::new();
    let mut search_from = 0;
    while let Some(pos) = entry[search_from..].find("<author>") {
        let start = search_from + pos;
        let Some(end_pos) = entry[start..].find("</author>") else {
            break;
        };
        let end = start + end_pos + "</author>".len();
        if let Some(name) = tag_text(&entry[start..end], "name") {
            authors.push(name);
        }
        search_from = end;
    }

    let summary = tag_text(entry, "summary")
        .map(|s| normalize_whitespace(&s))
        .unwrap_or_default();
    let published = tag_text(entry, "published").unwrap_or_default();
    let link = tag_text(entry, "id");

    Some(PaperRecord {
        title,
        authors,
        summary,
        published,
        link,
    })
}

/// Text content of the first `<tag>` or `<tag attr="...">` element, with
/// XML entities unescaped.
fn tag_text(block: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let mut search_from = 0;
    loop {
        let pos = search_from + block[search_from..].find(&open)?;
        let after = pos + open.len();
        // Reject prefix matches like `<titlebar>` for tag `title`.
        match block.as_bytes().get(after) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') => {
                let content_start = pos + block[pos..].find('>')? + 1;
                let content_end = content_start + block[content_start..].find(&close)?;
                return Some(unescape_xml(block[content_start..content_end].trim()));
            }
            _ => search_from = after,
        }
    }
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Collapse runs of whitespace (the feed hard-wraps titles and abstracts).
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
