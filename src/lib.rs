//! # daedalus-parser
//!
//! Lexer and error-tolerant parser for Daedalus, the scripting language of the Gothic games.
//!
//! Pipeline
//!
//! The source text goes through three stages, each in its own module under
//! [daedalus](crate::daedalus):
//!   ├── lexing      logos tokenizer, keyword table, trivia split, lexical diagnostics
//!   ├── parsing     recursive descent with precedence climbing and panic-mode recovery
//!   └── building    node ranges and anonymous tokens, byte to line:column conversion
//!
//! Parsing never fails. Whatever the input, [parse](daedalus::parse) returns a complete
//! tree (with `ERROR` and missing nodes where the input was broken) plus the diagnostics
//! explaining them.
//!
//! For testing guidelines, see the [testing module](daedalus::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod daedalus;

pub use daedalus::{parse, parse_with_options, validate};
