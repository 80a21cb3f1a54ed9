/// Byte-level helpers shared by the tokenizer's FSM.
///
/// Mirrors the priority order used for line classification elsewhere in
/// this codebase (triple-quote strings, then pragmas, then block comments,
/// then line comments, then quotes, then plain code) but drives a real
/// lexeme-emitting scan instead of a single has-code/has-comment flag.
use super::language::LanguageSpec;

/// Check if a byte slice starts with a string pattern.
pub(super) fn bytes_start_with(haystack: &[u8], needle: &str) -> bool {
    haystack.starts_with(needle.as_bytes())
}

/// Scan forward from `start` to find `needle`, returning the position just
/// past it. If not found, returns the end of the slice (consumes the rest).
pub(super) fn skip_to(bytes: &[u8], start: usize, needle: &str) -> usize {
    let len = bytes.len();
    let mut i = start;
    while i < len {
        if bytes_start_with(&bytes[i..], needle) {
            return i + needle.len();
        }
        i += 1;
    }
    i
}

/// Scan a (possibly nested) block comment body starting just after its
/// opening delimiter, returning the position just past the matching close.
pub(super) fn skip_block_comment(bytes: &[u8], mut i: usize, spec: &LanguageSpec) -> usize {
    let Some((open, close)) = spec.block_comment else {
        return i;
    };
    let len = bytes.len();
    let mut depth = 1usize;
    while i < len {
        if spec.nested_block_comments && bytes_start_with(&bytes[i..], open) {
            depth += 1;
            i += open.len();
            continue;
        }
        if bytes_start_with(&bytes[i..], close) {
            depth -= 1;
            i += close.len();
            if depth == 0 {
                return i;
            }
            continue;
        }
        i += 1;
    }
    i
}

/// Length of a line comment marker matching at `i`, honoring
/// `line_comment_not_before` guards (e.g. Haskell `-->`). Returns `None`
/// if no line comment starts here.
pub(super) fn line_comment_len(bytes: &[u8], i: usize, spec: &LanguageSpec) -> Option<usize> {
    let rest = &bytes[i..];
    spec.line_comments
        .iter()
        .filter(|lc| bytes_start_with(rest, lc))
        .find_map(|lc| {
            if !spec.line_comment_not_before.is_empty()
                && let Some(&next) = rest.get(lc.len())
                && spec.line_comment_not_before.as_bytes().contains(&next)
            {
                None
            } else {
                Some(lc.len())
            }
        })
}

/// Scan a quoted string/char literal starting at the opening `quote` byte,
/// returning the position just past the closing quote (or end of input).
/// Escape sequences (`\x`) are skipped over without interpretation.
pub(super) fn skip_quoted(bytes: &[u8], start: usize, quote: u8) -> usize {
    let len = bytes.len();
    let mut i = start + 1;
    while i < len {
        if bytes[i] == b'\\' {
            i = (i + 2).min(len);
            continue;
        }
        if bytes[i] == quote {
            return i + 1;
        }
        i += 1;
    }
    i
}

/// Scan a triple-quoted string body starting just after its opening
/// delimiter, returning the position just past the matching close.
pub(super) fn skip_triple_quoted(bytes: &[u8], mut i: usize, delim: &[u8; 3]) -> usize {
    let len = bytes.len();
    while i < len {
        if bytes[i..].starts_with(delim) {
            return i + 3;
        }
        i += 1;
    }
    i
}

/// Advance `(line, column)` across the bytes in `[from, to)`, counting
/// embedded newlines the same way the upstream tokenizer does.
pub(super) fn advance_position(bytes: &[u8], from: usize, to: usize, line: usize, col: usize) -> (usize, usize) {
    let span = &bytes[from..to];
    let newlines = span.iter().filter(|&&b| b == b'\n').count();
    if newlines == 0 {
        return (line, col + span.len());
    }
    let trailing = span.iter().rposition(|&b| b == b'\n').map(|p| span.len() - p - 1).unwrap_or(0);
    (line + newlines, trailing)
}
