/// Lexical analysis: language detection and source tokenization.
mod fsm;
mod lang_macro;
pub mod language;
pub mod token;
pub mod tokenizer;

pub use language::{LanguageSpec, detect, detect_by_shebang, languages, matches_language};
pub use token::{NormalizationLevel, Token, TokenKind, normalized_value};
pub use tokenizer::tokenize;
