//! Token types shared across the lexer, parser, and tooling.
//!
//!     Token Layers
//!
//!     Core Tokens:
//!         Produced by the logos lexer, see [core](core). Words come out as identifiers
//!         and are reclassified as keywords by [keywords](keywords).
//!
//!     Lexed Tokens:
//!         Core tokens paired with a full [Range](crate::daedalus::ast::Range), split into
//!         the significant stream (consumed by the parser) and trivia (whitespace and
//!         comments). See [lexing](crate::daedalus::lexing).

pub mod core;
pub mod keywords;

pub use self::core::{is_terminated_block_comment, is_terminated_string, Token};
