//! Cyrillic-to-Latin transliteration.
//!
//! The input runs through five ordered passes (see [`Pass::ALL`]), each
//! producing a new char buffer from the previous one:
//!
//! 1. х after a vowel → h
//! 2. soft/hard sign elision
//! 3. vowel + й combinations
//! 4. uppercase digraphs inside all-caps runs
//! 5. remaining single letters and digraphs

pub mod explain;
mod passes;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::cyrillic::is_cyrillic;
use crate::rules::RuleSet;

pub use explain::{explain, ExplainResult, ExplainStep};
pub use passes::Pass;

/// Transliterate `input` with the global rule set.
///
/// Total: every string has a result, and text without Cyrillic is returned
/// unchanged.
pub fn transliterate(input: &str) -> String {
    RuleSet::global().transliterate(input)
}

/// Absent input stays absent.
pub fn transliterate_opt(input: Option<&str>) -> Option<String> {
    input.map(transliterate)
}

impl RuleSet {
    /// Transliterate `input` with this rule set.
    pub fn transliterate(&self, input: &str) -> String {
        // Every rule key is Cyrillic.
        if !input.chars().any(is_cyrillic) {
            return input.to_owned();
        }

        let _span = debug_span!("transliterate", len = input.len()).entered();
        let mut buf: Vec<char> = input.chars().collect();
        for pass in Pass::ALL {
            buf = pass.apply(self, &buf);
            debug!(pass = pass.name(), chars = buf.len(), "pass applied");
        }
        buf.into_iter().collect()
    }
}
