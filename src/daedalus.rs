//! Main module for daedalus library functionality

pub mod ast;
pub mod building;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;

pub use parsing::{parse, parse_with_options, validate, ParseOptions, ParseResult};
