//! Module header extraction.
//!
//! The header is the comment block at the very top of the header file,
//! written either as a `/** ... */` block with ` * ` prefixed lines or as
//! consecutive `#` / `//` lines. Comment markers are stripped and the
//! markdown inside is kept as written.

use log::debug;
use std::fs;
use std::path::Path;

/// Reads the leading comment block of `filename`.
///
/// Returns an empty string when the file cannot be read or does not start
/// with a comment.
pub fn load_header<P: AsRef<Path>>(filename: P) -> String {
    let filename = filename.as_ref();
    match fs::read_to_string(filename) {
        Ok(content) => parse_header(&content),
        Err(e) => {
            debug!("No header loaded from {}: {}", filename.display(), e);
            String::new()
        }
    }
}

/// Extracts the header from file content.
pub fn parse_header(content: &str) -> String {
    let mut lines = content.lines().skip_while(|line| line.trim().is_empty()).peekable();

    let header = match lines.peek() {
        Some(first) if first.trim_start().starts_with("/*") => block_comment(lines),
        Some(_) => line_comments(lines),
        None => Vec::new(),
    };

    let end = header.iter().rposition(|line| !line.is_empty()).map_or(0, |i| i + 1);
    header[..end].join("\n")
}

fn block_comment<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut header = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if let Some(opening) = trimmed.strip_prefix("/*") {
            let (body, closed) = match opening.strip_suffix("*/") {
                Some(body) => (body, true),
                None => (opening, false),
            };
            let text = body.trim_start_matches('*').trim();
            if !text.is_empty() {
                header.push(text.to_string());
            }
            if closed {
                break;
            }
            continue;
        }
        if trimmed.starts_with("*/") || !trimmed.starts_with('*') {
            break;
        }
        if trimmed == "*" {
            header.push(String::new());
            continue;
        }

        let text = line.trim_start().trim_end_matches('\r');
        let text = text.strip_prefix("* ").unwrap_or(&text[1..]);
        match text.strip_suffix("*/") {
            Some(last) => {
                header.push(last.trim_end().to_string());
                break;
            }
            None => header.push(text.to_string()),
        }
    }
    header
}

fn line_comments<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map_while(|line| strip_line_marker(line.trim_start().trim_end_matches('\r')))
        .map(|text| text.strip_prefix(' ').unwrap_or(text).to_string())
        .collect()
}

fn strip_line_marker(line: &str) -> Option<&str> {
    line.strip_prefix("//").or_else(|| line.strip_prefix('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_comment_header() {
        let content = "/**\n * Title\n *\n * - item\n */\n\nresource \"a\" \"b\" {}\n";
        assert_eq!(parse_header(content), "Title\n\n- item");
    }

    #[test]
    fn test_block_comment_text_on_opening_line() {
        assert_eq!(parse_header("/** Title */\nvariable \"a\" {}\n"), "Title");
        assert_eq!(parse_header("/** Title\n * body\n */\n"), "Title\nbody");
        assert_eq!(parse_header("/* Title\n * body */\n"), "Title\nbody");
    }

    #[test]
    fn test_block_comment_empty_opening_and_closing() {
        assert_eq!(parse_header("/***/\n# not header\n"), "");
        assert_eq!(parse_header("/**\n * Title\n */\n"), "Title");
    }

    #[test]
    fn test_line_comment_header() {
        let content = "# Title\n#\n# Some *text*\n// more\nvariable \"a\" {}\n";
        assert_eq!(parse_header(content), "Title\n\nSome *text*\nmore");
    }

    #[test]
    fn test_header_stops_at_blank_line() {
        let content = "# Title\n\n# not header\n";
        assert_eq!(parse_header(content), "Title");
    }

    #[test]
    fn test_no_header() {
        assert_eq!(parse_header("variable \"a\" {}\n# trailing\n"), "");
        assert_eq!(parse_header(""), "");
    }
}
