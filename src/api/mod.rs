//! UniFFI export layer for host applications.
//!
//! Each public type here maps to a generated foreign class, record, or enum.

mod rules;
mod types;

pub use rules::TranslitRules;
pub use types::{TranslitError, TranslitExplainStep, TranslitRuleSummary};

use std::path::Path;

use tracing::debug;
use translit_core::RuleSet;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn transliterate(text: String) -> String {
    translit_core::transliterate(&text)
}

#[uniffi::export]
fn transliterate_optional(text: Option<String>) -> Option<String> {
    translit_core::transliterate_opt(text.as_deref())
}

#[uniffi::export]
fn transliterate_batch(texts: Vec<String>) -> Vec<String> {
    let rules = RuleSet::global();
    texts.iter().map(|t| rules.transliterate(t)).collect()
}

#[uniffi::export]
fn rules_default_config() -> String {
    translit_core::rules::default_toml().to_string()
}

/// Install a custom rules file. Must be called before the first
/// transliteration.
#[uniffi::export]
fn rules_load_config(path: String) -> Result<(), TranslitError> {
    let content = std::fs::read_to_string(&path).map_err(|e| TranslitError::Io {
        msg: format!("{path}: {e}"),
    })?;
    RuleSet::init_custom(content).map_err(|e| TranslitError::InvalidData { msg: e.to_string() })?;
    debug!(path = %path, "custom rules installed");
    Ok(())
}

#[uniffi::export]
fn rules_validate_config(toml: String) -> Result<TranslitRuleSummary, TranslitError> {
    RuleSet::from_toml(&toml)
        .map(|r| r.summary().into())
        .map_err(|e| TranslitError::InvalidData { msg: e.to_string() })
}

#[uniffi::export]
fn init_tracing(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
