//! Free-text parsing for the form's list and section textareas.
//!
//! Both functions are total: any input, including an empty string, yields a
//! (possibly empty) result and never an error.

use crate::models::RecordBlock;

const BULLET_MARKERS: &[char] = &['-', '•'];

/// Splits on newlines and commas, trims, and drops empty pieces.
/// Order and duplicates are preserved.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits multi-block text into `RecordBlock`s.
///
/// Blocks are separated by one or more blank (whitespace-only) lines. The
/// first non-empty line of a block is an `Org | Role | Dates` header; any
/// further `|` segments are ignored and missing ones are empty. Every other
/// line is a bullet with one leading `-` or `•` marker removed.
///
/// A header without `|` becomes the org with empty role and dates.
pub fn parse_sections(raw: &str) -> Vec<RecordBlock> {
    split_blocks(raw)
        .into_iter()
        .filter_map(|lines| parse_block(&lines))
        .collect()
}

/// Groups trimmed, non-empty lines into blocks delimited by blank lines.
fn split_blocks(raw: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_block(lines: &[&str]) -> Option<RecordBlock> {
    let (header, rest) = lines.split_first()?;

    let mut parts = header.split('|').map(str::trim);
    let org = parts.next().unwrap_or_default().to_string();
    let role = parts.next().unwrap_or_default().to_string();
    let dates = parts.next().unwrap_or_default().to_string();

    let bullets = rest
        .iter()
        .map(|line| strip_bullet(line))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Some(RecordBlock {
        org,
        role,
        dates,
        bullets,
    })
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(BULLET_MARKERS).unwrap_or(line).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(org: &str, role: &str, dates: &str, bullets: &[&str]) -> RecordBlock {
        RecordBlock {
            org: org.to_string(),
            role: role.to_string(),
            dates: dates.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_list_empty() {
        assert!(parse_list("").is_empty());
        assert!(parse_list("  \n , \n").is_empty());
    }

    #[test]
    fn test_parse_list_mixed_separators_in_order() {
        assert_eq!(parse_list("a, b\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_list_drops_empty_entries() {
        assert_eq!(parse_list("a,, ,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_list_keeps_duplicates() {
        assert_eq!(parse_list("Rust, Go, Rust"), vec!["Rust", "Go", "Rust"]);
    }

    #[test]
    fn test_parse_list_handles_crlf() {
        assert_eq!(
            parse_list("github.com/jane\r\nlinkedin.com/in/jane"),
            vec!["github.com/jane", "linkedin.com/in/jane"]
        );
    }

    #[test]
    fn test_parse_sections_single_block() {
        let blocks = parse_sections("Acme | Eng | 2020-2022\n- did X\n- did Y");
        assert_eq!(
            blocks,
            vec![block("Acme", "Eng", "2020-2022", &["did X", "did Y"])]
        );
    }

    #[test]
    fn test_parse_sections_missing_header_parts() {
        let blocks = parse_sections("Acme\n- x\n\nBeta | Dev |\n- y");
        assert_eq!(
            blocks,
            vec![block("Acme", "", "", &["x"]), block("Beta", "Dev", "", &["y"])]
        );
    }

    #[test]
    fn test_parse_sections_empty() {
        assert!(parse_sections("").is_empty());
        assert!(parse_sections("\n\n   \n").is_empty());
    }

    #[test]
    fn test_parse_sections_header_only() {
        let blocks = parse_sections("State University | BSc Computer Science | 2016");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].bullets.is_empty());
    }

    #[test]
    fn test_parse_sections_whitespace_only_separator_lines() {
        let blocks = parse_sections("A | r | d\n- one\n   \t\n\n\nB | r | d\n• two");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].bullets, vec!["one"]);
        assert_eq!(blocks[1].bullets, vec!["two"]);
    }

    #[test]
    fn test_parse_sections_bullet_marker_variants() {
        let blocks = parse_sections("Acme\n-tight\n•  spaced\nplain line\n-\n- - nested");
        assert_eq!(
            blocks[0].bullets,
            vec!["tight", "spaced", "plain line", "- nested"]
        );
    }

    #[test]
    fn test_parse_sections_extra_pipes_ignored() {
        let blocks = parse_sections("Acme | Eng | 2020 | Remote");
        assert_eq!(blocks, vec![block("Acme", "Eng", "2020", &[])]);
    }

    #[test]
    fn test_parse_sections_trims_header_fields() {
        let blocks = parse_sections("   Acme   |   Staff Engineer|2021 - now  \n  - led migration  ");
        assert_eq!(
            blocks,
            vec![block("Acme", "Staff Engineer", "2021 - now", &["led migration"])]
        );
    }

    #[test]
    fn test_parse_sections_crlf_input() {
        let blocks = parse_sections("Acme | Eng | 2020\r\n- x\r\n\r\nBeta\r\n- y\r\n");
        assert_eq!(
            blocks,
            vec![block("Acme", "Eng", "2020", &["x"]), block("Beta", "", "", &["y"])]
        );
    }
}
