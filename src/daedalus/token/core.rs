//! Core token definitions
//!
//!     The tokens are defined using the logos derive macro. Every variant is fieldless, the
//!     lexeme is always recovered from the source through the token's byte range, so tokens
//!     stay `Copy` and can be used directly in "expected one of" sets.
//!
//!     Keyword variants carry no logos attribute. Words are always lexed as the longest
//!     identifier run first and then classified against the keyword table in
//!     [keywords](super::keywords), which is what keeps `indexOf` from being read as `int`.
//!
//!     Trivia (whitespace and comments) and error tokens are part of this enum as well; the
//!     lexing stage splits them out of the significant stream.

use logos::{Lexer, Logos};
use serde::Serialize;
use std::fmt;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    // Keywords, produced by keyword classification of `Identifier` runs
    Instance,
    Func,
    Const,
    Var,
    Class,
    Prototype,
    Void,
    Int,
    Float,
    StringType,
    If,
    Else,
    Return,
    True,
    False,

    // Literals
    #[regex(r"[A-Za-z_\x{80}-\x{FF}][A-Za-z0-9_\x{80}-\x{FF}]*")]
    Identifier,
    #[regex(r"[0-9]+", number_fraction)]
    Number,
    #[token("\"", string_body)]
    String,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,

    // Assignment
    #[token("=")]
    Assign,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    StarAssign,
    #[token("/=")]
    SlashAssign,

    // Operators
    #[token("||")]
    OrOr,
    #[token("&&")]
    AndAnd,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEq,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,

    // Trivia
    #[regex(r"[ \t\r\n\x0C\x{FEFF}]+")]
    Whitespace,
    #[regex(r"//[^\r\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // Error tokens
    #[token("&")]
    StrayAmpersand,
    #[token("|")]
    StrayPipe,
    /// Any character no other token accepts
    Error,
}

/// Extends an integer run with a single `.digits` fraction. A second dot is left for the
/// next token, so `1.2.3` lexes as `1.2`, `.`, `3`.
fn number_fraction(lex: &mut Lexer<Token>) {
    let rest = lex.remainder().as_bytes();
    if rest.len() >= 2 && rest[0] == b'.' && rest[1].is_ascii_digit() {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + digits);
    }
}

/// Consumes a string body after the opening quote.
///
/// Stops after the closing quote, or before the end of the line when the string is
/// unterminated. A backslash always takes the following character with it unless that
/// character is a line break.
fn string_body(lex: &mut Lexer<Token>) {
    let rest = lex.remainder();
    let mut chars = rest.char_indices().peekable();
    let mut end = rest.len();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                end = i + 1;
                break;
            }
            '\n' | '\r' => {
                end = i;
                break;
            }
            '\\' => {
                if let Some((_, next)) = chars.peek() {
                    if *next != '\n' && *next != '\r' {
                        chars.next();
                    }
                }
            }
            _ => {}
        }
    }

    lex.bump(end);
}

/// Consumes a block comment after `/*`. Comments do not nest: the first `*/` closes.
/// Without a closing marker the comment runs to the end of input.
fn block_comment(lex: &mut Lexer<Token>) {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => lex.bump(end + 2),
        None => lex.bump(rest.len()),
    }
}

/// Whether a `String` lexeme ends with an unescaped closing quote.
pub fn is_terminated_string(lexeme: &str) -> bool {
    if lexeme.len() < 2 || !lexeme.ends_with('"') {
        return false;
    }
    let body = &lexeme[1..lexeme.len() - 1];
    let trailing_backslashes = body.bytes().rev().take_while(|b| *b == b'\\').count();
    trailing_backslashes % 2 == 0
}

/// Whether a `BlockComment` lexeme is closed by `*/`.
pub fn is_terminated_block_comment(lexeme: &str) -> bool {
    lexeme.len() >= 4 && lexeme.ends_with("*/")
}

impl Token {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Instance
                | Token::Func
                | Token::Const
                | Token::Var
                | Token::Class
                | Token::Prototype
                | Token::Void
                | Token::Int
                | Token::Float
                | Token::StringType
                | Token::If
                | Token::Else
                | Token::Return
                | Token::True
                | Token::False
        )
    }

    /// Whitespace and comments
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::LineComment | Token::BlockComment
        )
    }

    /// Tokens that already carry a lexical diagnostic
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Token::StrayAmpersand | Token::StrayPipe | Token::Error
        )
    }

    /// Built-in type keywords (`void`, `int`, `float`, `string`)
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            Token::Void | Token::Int | Token::Float | Token::StringType
        )
    }

    /// Keywords that can open a top-level declaration
    pub fn is_declaration_keyword(&self) -> bool {
        matches!(
            self,
            Token::Instance
                | Token::Prototype
                | Token::Func
                | Token::Class
                | Token::Const
                | Token::Var
        )
    }

    /// Declaration keywords that can never appear inside a block
    pub fn is_top_level_only(&self) -> bool {
        matches!(
            self,
            Token::Instance | Token::Prototype | Token::Func | Token::Class
        )
    }

    pub fn is_assignment_operator(&self) -> bool {
        matches!(
            self,
            Token::Assign
                | Token::PlusAssign
                | Token::MinusAssign
                | Token::StarAssign
                | Token::SlashAssign
        )
    }

    /// Human readable description used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Instance => "`instance`",
            Token::Func => "`func`",
            Token::Const => "`const`",
            Token::Var => "`var`",
            Token::Class => "`class`",
            Token::Prototype => "`prototype`",
            Token::Void => "`void`",
            Token::Int => "`int`",
            Token::Float => "`float`",
            Token::StringType => "`string`",
            Token::If => "`if`",
            Token::Else => "`else`",
            Token::Return => "`return`",
            Token::True => "`true`",
            Token::False => "`false`",
            Token::Identifier => "identifier",
            Token::Number => "number",
            Token::String => "string literal",
            Token::LParen => "`(`",
            Token::RParen => "`)`",
            Token::LBrace => "`{`",
            Token::RBrace => "`}`",
            Token::LBracket => "`[`",
            Token::RBracket => "`]`",
            Token::Semicolon => "`;`",
            Token::Comma => "`,`",
            Token::Dot => "`.`",
            Token::Assign => "`=`",
            Token::PlusAssign => "`+=`",
            Token::MinusAssign => "`-=`",
            Token::StarAssign => "`*=`",
            Token::SlashAssign => "`/=`",
            Token::OrOr => "`||`",
            Token::AndAnd => "`&&`",
            Token::EqEq => "`==`",
            Token::NotEq => "`!=`",
            Token::Less => "`<`",
            Token::LessEq => "`<=`",
            Token::Greater => "`>`",
            Token::GreaterEq => "`>=`",
            Token::Plus => "`+`",
            Token::Minus => "`-`",
            Token::Star => "`*`",
            Token::Slash => "`/`",
            Token::Percent => "`%`",
            Token::Bang => "`!`",
            Token::Tilde => "`~`",
            Token::Whitespace => "whitespace",
            Token::LineComment => "line comment",
            Token::BlockComment => "block comment",
            Token::StrayAmpersand => "`&`",
            Token::StrayPipe => "`|`",
            Token::Error => "invalid character",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        Token::lexer(source)
            .map(|result| result.unwrap_or(Token::Error))
            .collect()
    }

    #[test]
    fn test_number_with_single_fraction() {
        assert_eq!(kinds("3.25"), vec![Token::Number]);
        let mut lexer = Token::lexer("1.2.3");
        assert_eq!(lexer.next(), Some(Ok(Token::Number)));
        assert_eq!(lexer.slice(), "1.2");
        assert_eq!(lexer.next(), Some(Ok(Token::Dot)));
        assert_eq!(lexer.next(), Some(Ok(Token::Number)));
        assert_eq!(lexer.slice(), "3");
    }

    #[test]
    fn test_number_followed_by_member_dot() {
        assert_eq!(kinds("1.x"), vec![Token::Number, Token::Dot, Token::Identifier]);
    }

    #[test]
    fn test_multi_char_operators_are_maximal() {
        assert_eq!(
            kinds("== != <= >= && || += /="),
            vec![
                Token::EqEq,
                Token::Whitespace,
                Token::NotEq,
                Token::Whitespace,
                Token::LessEq,
                Token::Whitespace,
                Token::GreaterEq,
                Token::Whitespace,
                Token::AndAnd,
                Token::Whitespace,
                Token::OrOr,
                Token::Whitespace,
                Token::PlusAssign,
                Token::Whitespace,
                Token::SlashAssign,
            ]
        );
    }

    #[test]
    fn test_lone_ampersand_and_pipe() {
        assert_eq!(
            kinds("a & b | c"),
            vec![
                Token::Identifier,
                Token::Whitespace,
                Token::StrayAmpersand,
                Token::Whitespace,
                Token::Identifier,
                Token::Whitespace,
                Token::StrayPipe,
                Token::Whitespace,
                Token::Identifier,
            ]
        );
    }

    #[test]
    fn test_string_stops_at_closing_quote() {
        let mut lexer = Token::lexer(r#""a \"b\" c" x"#);
        assert_eq!(lexer.next(), Some(Ok(Token::String)));
        assert_eq!(lexer.slice(), r#""a \"b\" c""#);
        assert!(is_terminated_string(lexer.slice()));
    }

    #[test]
    fn test_unterminated_string_stops_at_line_end() {
        let mut lexer = Token::lexer("\"abc\nx");
        assert_eq!(lexer.next(), Some(Ok(Token::String)));
        assert_eq!(lexer.slice(), "\"abc");
        assert!(!is_terminated_string(lexer.slice()));
        assert_eq!(lexer.next(), Some(Ok(Token::Whitespace)));
        assert_eq!(lexer.next(), Some(Ok(Token::Identifier)));
    }

    #[test]
    fn test_string_terminated_checks() {
        assert!(is_terminated_string(r#""""#));
        assert!(is_terminated_string(r#""\\""#));
        assert!(!is_terminated_string(r#""abc\""#));
        assert!(!is_terminated_string("\""));
    }

    #[test]
    fn test_block_comment_does_not_nest() {
        let mut lexer = Token::lexer("/* a /* b */ c */");
        assert_eq!(lexer.next(), Some(Ok(Token::BlockComment)));
        assert_eq!(lexer.slice(), "/* a /* b */");
        assert!(is_terminated_block_comment(lexer.slice()));
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        let mut lexer = Token::lexer("/*/ x");
        assert_eq!(lexer.next(), Some(Ok(Token::BlockComment)));
        assert_eq!(lexer.slice(), "/*/ x");
        assert!(!is_terminated_block_comment(lexer.slice()));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_line_comment_and_slash() {
        assert_eq!(
            kinds("a / b // rest"),
            vec![
                Token::Identifier,
                Token::Whitespace,
                Token::Slash,
                Token::Whitespace,
                Token::Identifier,
                Token::Whitespace,
                Token::LineComment,
            ]
        );
    }

    #[test]
    fn test_latin1_identifier() {
        let mut lexer = Token::lexer("Größe");
        assert_eq!(lexer.next(), Some(Ok(Token::Identifier)));
        assert_eq!(lexer.slice(), "Größe");
    }

    #[test]
    fn test_predicates() {
        assert!(Token::Int.is_keyword());
        assert!(Token::Int.is_type_keyword());
        assert!(!Token::Identifier.is_keyword());
        assert!(Token::BlockComment.is_trivia());
        assert!(Token::StrayPipe.is_error());
        assert!(Token::Var.is_declaration_keyword());
        assert!(!Token::Var.is_top_level_only());
        assert!(Token::SlashAssign.is_assignment_operator());
        assert_eq!(Token::Semicolon.to_string(), "`;`");
    }
}
