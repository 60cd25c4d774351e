use std::fs;
use std::process;

use translit_core::rules::{self, RuleSummary};
use translit_core::RuleSet;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn rules_export() {
    print!("{}", rules::default_toml());
}

/// Parse and validate a rules file.
pub fn validate_file(file: &str) -> Result<RuleSummary, String> {
    let content = fs::read_to_string(file).map_err(|e| format!("Error reading {file}: {e}"))?;
    RuleSet::from_toml(&content)
        .map(|r| r.summary())
        .map_err(|e| format!("Error: {e}"))
}

pub fn rules_validate(file: &str) {
    let s = die!(validate_file(file), "{}");
    println!(
        "OK: {} vowel digraphs, {} single letters, {} digraphs, {} vowels, {} silent",
        s.vowel_digraphs, s.single_letters, s.digraphs, s.vowels, s.silent
    );
}
