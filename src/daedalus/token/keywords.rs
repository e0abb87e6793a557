//! Keyword classification
//!
//!     Every keyword is accepted in exactly three spellings: all lowercase, all uppercase and
//!     capitalized (`instance`, `INSTANCE`, `Instance`). Any other casing (`iNSTANCE`) is a
//!     plain identifier.
//!
//!     The lexer always consumes the longest identifier run before asking this table, so a
//!     word is either a keyword as a whole or an identifier as a whole.

use super::core::Token;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Every keyword with its canonical lowercase spelling
pub const KEYWORDS: [(Token, &str); 15] = [
    (Token::Instance, "instance"),
    (Token::Func, "func"),
    (Token::Const, "const"),
    (Token::Var, "var"),
    (Token::Class, "class"),
    (Token::Prototype, "prototype"),
    (Token::Void, "void"),
    (Token::Int, "int"),
    (Token::Float, "float"),
    (Token::StringType, "string"),
    (Token::If, "if"),
    (Token::Else, "else"),
    (Token::Return, "return"),
    (Token::True, "true"),
    (Token::False, "false"),
];

static SPELLINGS: Lazy<HashMap<String, Token>> = Lazy::new(|| {
    let mut table = HashMap::with_capacity(KEYWORDS.len() * 3);
    for (token, word) in KEYWORDS {
        for spelling in spellings_of(word) {
            table.insert(spelling, token);
        }
    }
    table
});

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn spellings_of(word: &str) -> [String; 3] {
    [word.to_string(), word.to_ascii_uppercase(), capitalize(word)]
}

/// Classify a complete identifier run. Returns `None` for anything that is not one of the
/// accepted keyword spellings.
pub fn lookup(word: &str) -> Option<Token> {
    SPELLINGS.get(word).copied()
}

/// The three accepted spellings of a keyword token, lowercase first.
pub fn spellings(keyword: Token) -> Option<[String; 3]> {
    KEYWORDS
        .iter()
        .find(|(token, _)| *token == keyword)
        .map(|(_, word)| spellings_of(word))
}
