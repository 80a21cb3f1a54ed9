/// A single classified lexeme with its source position.
///
/// Whitespace and comments are never materialized as tokens — the FSM in
/// [`super::fsm`] consumes them silently. Position tracking is 1-based for
/// lines, 0-based for columns, matching the convention used elsewhere in
/// this codebase for source locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

/// What a token is, for normalization purposes.
///
/// Keywords, operators, and punctuation all fall under `Other` and are
/// never rewritten by normalization — only identifiers and literals are,
/// matching how reserved words stay literal regardless of comparison level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Literal,
    Other,
}

/// How aggressively to normalize token values before hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NormalizationLevel {
    /// Tokens keep their literal text.
    Exact = 0,
    /// Identifier values are rewritten to `"ID"`.
    Identifiers = 1,
    /// Identifier and literal values are rewritten to `"ID"` / `"LIT"`.
    Literals = 2,
}

impl NormalizationLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Exact),
            1 => Some(Self::Identifiers),
            2 => Some(Self::Literals),
            _ => None,
        }
    }
}

impl std::str::FromStr for NormalizationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "identifiers" => Ok(Self::Identifiers),
            "literals" => Ok(Self::Literals),
            other => Err(format!(
                "invalid normalization level '{other}' (expected exact, identifiers, or literals)"
            )),
        }
    }
}

const ID_PLACEHOLDER: &str = "ID";
const LIT_PLACEHOLDER: &str = "LIT";

/// Return the value this token should hash as under the given level.
pub fn normalized_value<'a>(token: &'a Token, level: NormalizationLevel) -> &'a str {
    match token.kind {
        TokenKind::Identifier if level >= NormalizationLevel::Identifiers => ID_PLACEHOLDER,
        TokenKind::Literal if level >= NormalizationLevel::Literals => LIT_PLACEHOLDER,
        _ => &token.value,
    }
}
