use super::*;
use crate::lexer::{TokenKind, languages};

fn rust_spec() -> &'static crate::lexer::LanguageSpec {
    languages().iter().find(|s| s.name == "Rust").unwrap()
}

#[test]
fn identical_lines_hash_identically() {
    let toks_a = crate::lexer::tokenize("let x = 1;", rust_spec());
    let toks_b = crate::lexer::tokenize("let x = 1;", rust_spec());
    let ha = hash_lines(&toks_a, NormalizationLevel::Exact);
    let hb = hash_lines(&toks_b, NormalizationLevel::Exact);
    assert_eq!(ha, hb);
}

#[test]
fn different_identifiers_hash_differently_at_exact_level() {
    let a = crate::lexer::tokenize("let x = 1;", rust_spec());
    let b = crate::lexer::tokenize("let y = 1;", rust_spec());
    let ha = hash_lines(&a, NormalizationLevel::Exact);
    let hb = hash_lines(&b, NormalizationLevel::Exact);
    assert_ne!(ha[0].hash, hb[0].hash);
}

#[test]
fn different_identifiers_hash_same_at_identifiers_level() {
    let a = crate::lexer::tokenize("let x = 1;", rust_spec());
    let b = crate::lexer::tokenize("let y = 1;", rust_spec());
    let ha = hash_lines(&a, NormalizationLevel::Identifiers);
    let hb = hash_lines(&b, NormalizationLevel::Identifiers);
    assert_eq!(ha[0].hash, hb[0].hash);
}

#[test]
fn blank_lines_produce_no_entry() {
    let toks = crate::lexer::tokenize("let x = 1;\n\n\nlet y = 2;", rust_spec());
    let hashes = hash_lines(&toks, NormalizationLevel::Exact);
    assert_eq!(hashes.len(), 2);
    assert_eq!(hashes[0].line, 1);
    assert_eq!(hashes[1].line, 4);
}

#[test]
fn token_count_matches_tokens_on_line() {
    let toks = crate::lexer::tokenize("a + b;", rust_spec());
    let hashes = hash_lines(&toks, NormalizationLevel::Exact);
    assert_eq!(hashes[0].token_count, 4); // a + b ;
    assert!(toks.iter().all(|t| t.kind != TokenKind::Other) == false);
}
