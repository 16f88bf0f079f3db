//! Inline comment lookup.
//!
//! Recovers the run of single-line comments written directly above a given
//! line. This works on raw text rather than on parsed declarations so it
//! can document blocks that carry no `description` attribute.

use log::debug;
use std::fs;
use std::path::Path;

/// Looks up the comment block written above a source line.
pub trait LineCommentLookup {
    /// Comment text directly above the 1-based `line_number` of `filename`,
    /// or an empty string when there is none.
    fn comments_before(&self, filename: &Path, line_number: usize) -> String;
}

/// [`LineCommentLookup`] reading files from disk on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileCommentLookup;

impl LineCommentLookup for FileCommentLookup {
    fn comments_before(&self, filename: &Path, line_number: usize) -> String {
        load_comments(filename, line_number)
    }
}

/// Collects the contiguous `#` or `//` comment lines directly above
/// `line_number` and joins them, in file order, with single spaces.
///
/// Returns an empty string if the file cannot be read, the line is out of
/// range or the preceding line is not a comment.
pub fn load_comments<P: AsRef<Path>>(filename: P, line_number: usize) -> String {
    let filename = filename.as_ref();
    let content = match fs::read_to_string(filename) {
        Ok(content) => content,
        Err(e) => {
            debug!("No comments loaded from {}: {}", filename.display(), e);
            return String::new();
        }
    };
    comments_before_line(&content, line_number)
}

/// Same as [`load_comments`], on content already in memory.
pub fn comments_before_line(content: &str, line_number: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if line_number < 2 || line_number > lines.len() {
        return String::new();
    }

    let mut comments: Vec<&str> = lines[..line_number - 1]
        .iter()
        .rev()
        .map_while(|line| strip_comment(line))
        .collect();
    comments.reverse();
    comments.join(" ")
}

fn strip_comment(line: &str) -> Option<&str> {
    let line = line.trim();
    line.strip_prefix('#')
        .or_else(|| line.strip_prefix("//"))
        .map(str::trim)
}
