//! Testing utilities for the parser
//!
//!     Parser tests are easy to write badly: a hand-typed snippet that is not quite Daedalus,
//!     followed by a walk through struct fields that breaks on the first refactor of the
//!     tree. This module provides the two pieces that keep tests honest.
//!
//! Rule 1: Prefer the sample corpus for realistic input
//!
//!     The `samples/` directory holds script files written the way real mod sources look:
//!     mixed casing, comments everywhere, forward declarations, nested ifs. [Samples] loads
//!     them by name. Small inline snippets are fine for a single production, but anything
//!     describing "a typical file" should come from the corpus.
//!
//!         let result = Samples::Instances.parse();
//!
//! Rule 2: Assert on the tree with the fluent API
//!
//!     Use [assert_program] instead of matching on enum variants by hand. It checks kinds,
//!     names and nesting with messages that say where in the tree the mismatch was:
//!
//!         assert_program(&result.program)
//!             .declaration_count(1)
//!             .declaration(0, |d| {
//!                 d.assert_instance()
//!                     .name("PC_Hero")
//!                     .parent("C_NPC")
//!                     .body(|b| {
//!                         b.statement_count(1);
//!                     });
//!             });
//!
//!     Diagnostics get the same treatment through [assert_diagnostics].
//!
//!     For the overall shape of a tree the S-expression format is often the most readable
//!     expectation, see [formats::sexp](crate::daedalus::formats::sexp).

pub mod ast_assertions;
pub mod matchers;
pub mod samples;

pub use ast_assertions::{assert_diagnostics, assert_program};
pub use matchers::TextMatch;
pub use samples::Samples;
