//! Parsing module for Daedalus sources
//!
//!     This module provides the complete pipeline from source text to syntax tree:
//!         1. Lexing: tokens plus trivia. See [lexing](crate::daedalus::lexing).
//!         2. Parsing: recursive descent over the significant tokens. See [parser].
//!         3. Building: node ranges and anonymous children. See [building](crate::daedalus::building).
//!
//! Grammar
//!
//!     Declarations, statements and expressions each have their own module. Expressions use
//!     precedence climbing, see [precedence]. Every production builds its node on the way out,
//!     so there is no intermediate representation: the parser's output is the final tree.
//!
//! Failure
//!
//!     Parsing never fails. Whatever the input, the result holds exactly one [Program] and the
//!     diagnostics explaining what was wrong with it. See [recovery] for how the parser gets
//!     back on track after an error. Callers wanting an all-or-nothing answer use
//!     [ParseResult::into_result].
//!
//!     Recursion follows the nesting of the source, so deeply nested input is bounded by the
//!     caller's stack only, see [parse].

mod declarations;
mod expressions;
pub mod options;
pub mod parser;
pub mod precedence;
pub mod recovery;
pub mod result;
mod statements;

pub use options::{OptionsError, ParseOptions};
pub use recovery::RecoveryState;
pub use result::{ParseResult, ParseStats, ValidationReport};

use crate::daedalus::ast::range::LineIndex;
use crate::daedalus::building::program_range;
use crate::daedalus::lexing::{lex_with_index, Lexed};
use parser::Parser;
use std::time::Instant;
use tracing::debug;

/// Parse a source text with default options.
///
/// Every nested parenthesis, block or unary operator costs a few stack frames. A few hundred
/// levels fit the 2 MiB stack of a spawned thread in a debug build. Parse generated or
/// adversarial input on a thread with a bigger stack, see
/// [std::thread::Builder::stack_size].
pub fn parse(source: &str) -> ParseResult {
    parse_with_options(source, &ParseOptions::default())
}

/// [parse] with explicit options. Nesting depth is limited by the stack in the same way.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> ParseResult {
    let started = Instant::now();
    let index = LineIndex::new(source);

    let Lexed {
        tokens,
        trivia,
        mut diagnostics,
    } = lex_with_index(source, &index);
    let token_count = tokens.len();
    let trivia_count = trivia.len();
    debug!(bytes = source.len(), tokens = token_count, "parsing");

    let mut parser = Parser::new(source, tokens);
    let program = parser.program(program_range(source, &index));
    diagnostics.extend(parser.into_diagnostics());
    diagnostics.sort_by_key(|diagnostic| diagnostic.range.span.start);

    let error_count = diagnostics.iter().filter(|d| d.is_error()).count();
    let mut diagnostics_truncated = false;
    if let Some(max) = options.max_diagnostics {
        if diagnostics.len() > max {
            diagnostics.truncate(max);
            diagnostics_truncated = true;
        }
    }

    let stats = ParseStats {
        duration: started.elapsed(),
        source_len: source.len(),
        token_count,
        trivia_count,
    };
    debug!(
        declarations = program.len(),
        diagnostics = diagnostics.len(),
        elapsed_us = stats.duration.as_micros() as u64,
        "parsed"
    );

    ParseResult {
        program,
        diagnostics,
        trivia: if options.collect_trivia {
            trivia
        } else {
            Vec::new()
        },
        stats,
        diagnostics_truncated,
        error_count,
    }
}

/// Parse only for the diagnostics
pub fn validate(source: &str) -> ValidationReport {
    parse_with_options(source, &ParseOptions::default().without_trivia()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daedalus::ast::diagnostics::DiagnosticCode;

    #[test]
    fn test_empty_source() {
        let result = parse("");
        assert!(result.program.is_empty());
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.program.range.span, 0..0);
    }

    #[test]
    fn test_program_covers_trivia() {
        let source = "// header\nvar int x;\n\n";
        let result = parse(source);
        assert_eq!(result.program.range.span, 0..source.len());
        assert_eq!(result.comments().len(), 1);
        assert_eq!(result.stats.token_count, 4);
        assert_eq!(result.stats.source_len, source.len());
    }

    #[test]
    fn test_diagnostics_are_ordered() {
        let result = parse("var int x = \"\\xZZ\" var int y;");
        let starts: Vec<usize> = result
            .diagnostics
            .iter()
            .map(|d| d.range.span.start)
            .collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
        assert_eq!(result.diagnostics[0].code, DiagnosticCode::InvalidEscape);
    }

    #[test]
    fn test_max_diagnostics() {
        let source = "a; b; c; d;";
        let options = ParseOptions::default().with_max_diagnostics(2);
        let result = parse_with_options(source, &options);
        assert_eq!(result.diagnostics.len(), 2);
        assert!(result.diagnostics_truncated);
        assert_eq!(result.program.len(), 4);
    }

    #[test]
    fn test_truncation_keeps_sources_invalid() {
        let options = ParseOptions::default().with_max_diagnostics(0);
        let result = parse_with_options("func void f() { x = ; }", &options);
        assert!(result.diagnostics.is_empty());
        assert!(result.diagnostics_truncated);
        assert!(result.has_errors());
        let error = result.into_result().unwrap_err();
        assert_eq!(error.error_count(), 1);
        assert!(error.diagnostics().is_empty());
    }

    #[test]
    fn test_warnings_filling_the_cap_do_not_hide_errors() {
        let source = "var string s = \"\\q\"; var int = ;";
        let options = ParseOptions::default().with_max_diagnostics(1);
        let result = parse_with_options(source, &options);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, DiagnosticCode::UnknownEscape);
        assert_eq!(result.errors().count(), 0);
        assert!(result.has_errors());
        assert!(!ValidationReport::from(result.clone()).is_valid);
        assert!(result.into_result().is_err());
    }

    #[test]
    fn test_trivia_collection_can_be_disabled() {
        let result = parse_with_options(
            "/* c */ var int x;",
            &ParseOptions::default().without_trivia(),
        );
        assert!(result.trivia.is_empty());
        assert_eq!(result.stats.trivia_count, 4);
    }

    #[test]
    fn test_validate() {
        assert!(validate("func void f() {}").is_valid);
        let report = validate("func void f( {}");
        assert!(!report.is_valid);
        assert!(!report.diagnostics.is_empty());
    }

    #[test]
    fn test_deep_nesting_on_a_large_stack() {
        let depth = 2000;
        let source = format!("const int A = {}1{};", "(".repeat(depth), ")".repeat(depth));
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(move || parse(&source).diagnostics.len())
            .unwrap();
        assert_eq!(handle.join().unwrap(), 0);
    }

    #[test]
    fn test_into_result() {
        assert!(parse("const int A = 1;").into_result().is_ok());
        let error = parse("const int A = ;").into_result().unwrap_err();
        assert_eq!(error.diagnostics().len(), 1);
    }
}
