pub mod cyrillic;
pub mod engine;
pub mod rules;

pub use engine::{transliterate, transliterate_opt};
pub use rules::RuleSet;
