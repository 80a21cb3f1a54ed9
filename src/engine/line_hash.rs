/// Per-line hashing: fold every token on a line into one FNV-1a hash.
use crate::engine::fnv::hash_items;
use crate::engine::model::LineHash;
use crate::lexer::{NormalizationLevel, Token, normalized_value};

/// Group tokens by source line and hash each line's normalized token
/// values together. Lines with no tokens (blank, or comment-only once
/// normalized) produce no entry — callers must not assume line numbers
/// are contiguous in the result.
pub fn hash_lines(tokens: &[Token], level: NormalizationLevel) -> Vec<LineHash> {
    let mut result = Vec::new();
    let mut current_line = None;
    let mut buf: Vec<&str> = Vec::new();

    let mut flush = |line: usize, buf: &mut Vec<&str>, result: &mut Vec<LineHash>| {
        if buf.is_empty() {
            return;
        }
        let hash = hash_items(buf.iter().map(|v| v.as_bytes()));
        result.push(LineHash {
            line,
            hash,
            token_count: buf.len(),
        });
        buf.clear();
    };

    for token in tokens {
        if current_line != Some(token.line) {
            if let Some(line) = current_line {
                flush(line, &mut buf, &mut result);
            }
            current_line = Some(token.line);
        }
        buf.push(normalized_value(token, level));
    }
    if let Some(line) = current_line {
        flush(line, &mut buf, &mut result);
    }

    result
}

#[cfg(test)]
#[path = "line_hash_test.rs"]
mod tests;
