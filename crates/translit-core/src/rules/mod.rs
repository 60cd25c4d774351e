//! Rule tables for Cyrillic-to-Latin transliteration.
//!
//! The tables are loaded from an embedded TOML document (or a custom one
//! installed before first use) into a process-wide [`RuleSet`].

mod config;
mod set;
mod table;

pub use config::{parse_rules_toml, RuleConfigError, RuleTables};
pub use set::{RuleSet, RuleSummary};

/// Returns the embedded default rules TOML content.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
