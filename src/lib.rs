//! Host-facing bindings for the Cyrillic-to-Latin transliteration engine.
//!
//! The engine itself lives in `translit_core`; this crate only adapts it to
//! UniFFI and wires up optional trace logging.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use translit_core::{transliterate, transliterate_opt, RuleSet};
