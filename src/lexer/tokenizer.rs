/// Lexical tokenizer: drives the FSM helpers in [`super::fsm`] over a whole
/// source file and emits a flat, normalization-ready `Token` stream.
use super::fsm::{advance_position, bytes_start_with, line_comment_len, skip_block_comment, skip_quoted, skip_to, skip_triple_quoted};
use super::language::LanguageSpec;
use super::token::{Token, TokenKind};

fn is_ident_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

fn is_ident_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Tokenize `source` according to `spec`'s comment/string syntax.
///
/// Whitespace and comments are consumed silently. Every remaining lexeme
/// becomes one `Token`: identifier-shaped runs are `Identifier`, numeric
/// runs and quoted strings are `Literal`, everything else (keywords,
/// operators, punctuation) is `Other`.
pub fn tokenize(source: &str, spec: &LanguageSpec) -> Vec<Token> {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut tokens = Vec::new();
    let mut i = 0;
    let mut line = 1usize;
    let mut col = 0usize;

    while i < len {
        let rest = &bytes[i..];

        if spec.triple_quote_strings && bytes_start_with(rest, "\"\"\"") {
            let end = skip_triple_quoted(bytes, i + 3, b"\"\"\"");
            let (nl, nc) = advance_position(bytes, i, end, line, col);
            line = nl;
            col = nc;
            i = end;
            continue;
        }
        if spec.single_quote_strings && spec.triple_quote_strings && bytes_start_with(rest, "'''") {
            let end = skip_triple_quoted(bytes, i + 3, b"'''");
            let (nl, nc) = advance_position(bytes, i, end, line, col);
            line = nl;
            col = nc;
            i = end;
            continue;
        }

        if let Some((popen, pclose)) = spec.pragma
            && bytes_start_with(rest, popen)
        {
            let end = skip_to(bytes, i + popen.len(), pclose);
            let (nl, nc) = advance_position(bytes, i, end, line, col);
            line = nl;
            col = nc;
            i = end;
            continue;
        }

        if let Some((open, _)) = spec.block_comment
            && bytes_start_with(rest, open)
        {
            let end = skip_block_comment(bytes, i + open.len(), spec);
            let (nl, nc) = advance_position(bytes, i, end, line, col);
            line = nl;
            col = nc;
            i = end;
            continue;
        }

        if let Some(lc_len) = line_comment_len(bytes, i, spec) {
            let mut j = i + lc_len;
            while j < len && bytes[j] != b'\n' {
                j += 1;
            }
            let (nl, nc) = advance_position(bytes, i, j, line, col);
            line = nl;
            col = nc;
            i = j;
            continue;
        }

        let ch = bytes[i];

        if ch == b'\n' {
            i += 1;
            line += 1;
            col = 0;
            continue;
        }
        if ch.is_ascii_whitespace() {
            i += 1;
            col += 1;
            continue;
        }

        if ch == b'"' || (spec.single_quote_strings && ch == b'\'') {
            let start_line = line;
            let start_col = col;
            let end = skip_quoted(bytes, i, ch);
            let value = String::from_utf8_lossy(&bytes[i..end]).into_owned();
            tokens.push(Token {
                kind: TokenKind::Literal,
                value,
                line: start_line,
                column: start_col,
            });
            let (nl, nc) = advance_position(bytes, i, end, line, col);
            line = nl;
            col = nc;
            i = end;
            continue;
        }

        if is_ident_start(ch) {
            let start = i;
            let start_line = line;
            let start_col = col;
            while i < len && is_ident_continue(bytes[i]) {
                i += 1;
                col += 1;
            }
            tokens.push(Token {
                kind: TokenKind::Identifier,
                value: source[start..i].to_string(),
                line: start_line,
                column: start_col,
            });
            continue;
        }

        if ch.is_ascii_digit() {
            let start = i;
            let start_line = line;
            let start_col = col;
            while i < len && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'.' || bytes[i] == b'_') {
                i += 1;
                col += 1;
            }
            tokens.push(Token {
                kind: TokenKind::Literal,
                value: source[start..i].to_string(),
                line: start_line,
                column: start_col,
            });
            continue;
        }

        // A lone punctuation/operator byte. Source is ASCII-punctuation-wise
        // mixed-width in practice (e.g. `==`, `->`) but a single-byte token
        // is enough for hashing purposes — the line hash folds the whole
        // sequence together regardless of how it's chunked.
        tokens.push(Token {
            kind: TokenKind::Other,
            value: (ch as char).to_string(),
            line,
            column: col,
        });
        i += 1;
        col += 1;
    }

    tokens
}

#[cfg(test)]
#[path = "tokenizer_test.rs"]
mod tests;
