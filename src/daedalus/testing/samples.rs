//! Sample script corpus
//!
//!     The files under `samples/` at the crate root are compiled into the crate, so tests
//!     and benchmarks can use them without touching the filesystem:
//!
//!         let source = Samples::Functions.source();
//!         let result = Samples::Functions.parse();
//!
//!     Every sample except [Samples::Recovery] parses without diagnostics. The recovery
//!     sample has exactly one mistake per declaration and exercises the error paths.

use crate::daedalus::parsing::{parse, ParseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Samples {
    /// Instances with assignments, calls and a forward declaration
    Instances,
    Prototypes,
    /// Parameters, locals, `if`/`else if`/`else` chains and returns
    Functions,
    Classes,
    /// Globals, constants and array initializers in mixed casing
    Variables,
    /// Every operator and postfix form
    Expressions,
    /// Broken declarations followed by ones that must still parse
    Recovery,
    /// A bit of everything, written like the game scripts
    KitchenSink,
}

impl Samples {
    pub const ALL: [Samples; 8] = [
        Samples::Instances,
        Samples::Prototypes,
        Samples::Functions,
        Samples::Classes,
        Samples::Variables,
        Samples::Expressions,
        Samples::Recovery,
        Samples::KitchenSink,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Samples::Instances => "instances.d",
            Samples::Prototypes => "prototypes.d",
            Samples::Functions => "functions.d",
            Samples::Classes => "classes.d",
            Samples::Variables => "variables.d",
            Samples::Expressions => "expressions.d",
            Samples::Recovery => "recovery.d",
            Samples::KitchenSink => "kitchensink.d",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Samples::Instances => include_str!("../../../samples/instances.d"),
            Samples::Prototypes => include_str!("../../../samples/prototypes.d"),
            Samples::Functions => include_str!("../../../samples/functions.d"),
            Samples::Classes => include_str!("../../../samples/classes.d"),
            Samples::Variables => include_str!("../../../samples/variables.d"),
            Samples::Expressions => include_str!("../../../samples/expressions.d"),
            Samples::Recovery => include_str!("../../../samples/recovery.d"),
            Samples::KitchenSink => include_str!("../../../samples/kitchensink.d"),
        }
    }

    pub fn parse(&self) -> ParseResult {
        parse(self.source())
    }

    /// Whether the sample is expected to parse without diagnostics
    pub fn is_clean(&self) -> bool {
        *self != Samples::Recovery
    }

    pub fn clean() -> impl Iterator<Item = Samples> {
        Self::ALL.into_iter().filter(|sample| sample.is_clean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_are_embedded() {
        for sample in Samples::ALL {
            assert!(
                !sample.source().trim().is_empty(),
                "{} is empty",
                sample.file_name()
            );
        }
    }

    #[test]
    fn test_clean_samples() {
        assert_eq!(Samples::clean().count(), Samples::ALL.len() - 1);
        assert!(!Samples::clean().any(|sample| sample == Samples::Recovery));
    }
}
