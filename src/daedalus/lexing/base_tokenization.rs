//! Base tokenization implementation for the Daedalus lexer
//!
//! Raw tokenization with the logos lexer. Identifier runs are classified against the keyword
//! table here, and logos errors become `Token::Error` so that every byte of the input ends up
//! in exactly one token.

use crate::daedalus::token::{keywords, Token};
use logos::Logos;

/// Tokenize source code with byte ranges
///
/// The returned tokens cover the input without gaps, trivia included. Adjacent unrecognized
/// characters are merged into a single `Token::Error`.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens: Vec<(Token, logos::Span)> = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let token = match result {
            Ok(Token::Identifier) => keywords::lookup(lexer.slice()).unwrap_or(Token::Identifier),
            Ok(token) => token,
            Err(()) => Token::Error,
        };

        if token == Token::Error {
            if let Some((Token::Error, previous)) = tokens.last_mut() {
                if previous.end == span.start {
                    previous.end = span.end;
                    continue;
                }
            }
        }

        tokens.push((token, span));
    }

    tokens
}
