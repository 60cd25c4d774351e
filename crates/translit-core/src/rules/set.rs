use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::cyrillic::{capitalize, to_lower, to_upper};

use super::config::{parse_rules_toml, RuleConfigError, RuleTables};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<RuleSet> = OnceLock::new();

/// Compiled rule tables, ready for the transliteration passes.
///
/// Immutable once built; the global instance is shared across threads
/// without locking.
#[derive(Debug)]
pub struct RuleSet {
    /// Lowercase vowels; compared against the lowercased neighbour.
    vowels: Vec<char>,
    /// Silent signs in both cases.
    silent: Vec<char>,
    vowel_digraphs: HashMap<(char, char), String>,
    /// Single letters in both cases.
    singles: HashMap<char, char>,
    /// Lowercase key → "shch", uppercase key → "Shch".
    digraphs: HashMap<char, String>,
    /// Uppercase key → "SHCH", used inside all-caps runs.
    caps_digraphs: HashMap<char, String>,
}

/// Table sizes, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSummary {
    pub vowels: usize,
    pub silent: usize,
    pub vowel_digraphs: usize,
    pub single_letters: usize,
    pub digraphs: usize,
}

impl RuleSet {
    /// Set custom TOML before first `global()` call. Fails with
    /// `AlreadyInitialized` once the global set has been built.
    pub fn init_custom(toml_content: String) -> Result<(), RuleConfigError> {
        // Validate eagerly
        parse_rules_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(RuleConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RuleConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuleSet {
        INSTANCE.get_or_init(|| {
            let (source, toml_str) = match CUSTOM_TOML.get() {
                Some(s) => ("custom", s.as_str()),
                None => ("default", DEFAULT_TOML),
            };
            let tables = parse_rules_toml(toml_str).expect("rule TOML must be valid");
            let set = RuleSet::from_tables(tables);
            debug!(source, summary = ?set.summary(), "rule set loaded");
            set
        })
    }

    /// Build a standalone rule set from a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, RuleConfigError> {
        parse_rules_toml(toml_str).map(Self::from_tables)
    }

    pub fn from_tables(tables: RuleTables) -> Self {
        let summary = RuleSummary {
            vowels: tables.vowels.len(),
            silent: tables.silent.len(),
            vowel_digraphs: tables.vowel_digraphs.len(),
            single_letters: tables.single_letters.len(),
            digraphs: tables.digraphs.len(),
        };

        let mut silent = Vec::with_capacity(summary.silent * 2);
        for c in tables.silent {
            silent.push(c);
            mirror(c, |upper| silent.push(upper));
        }

        let mut singles = HashMap::with_capacity(summary.single_letters * 2);
        for (key, value) in tables.single_letters {
            singles.insert(key, value);
            mirror(key, |upper| {
                singles.insert(upper, value.to_ascii_uppercase());
            });
        }

        let mut digraphs = HashMap::with_capacity(summary.digraphs * 2);
        let mut caps_digraphs = HashMap::with_capacity(summary.digraphs);
        for (key, value) in tables.digraphs {
            mirror(key, |upper| {
                digraphs.insert(upper, capitalize(&value));
                caps_digraphs.insert(upper, value.to_ascii_uppercase());
            });
            digraphs.insert(key, value);
        }

        RuleSet {
            vowels: tables.vowels,
            silent,
            vowel_digraphs: tables.vowel_digraphs.into_iter().collect(),
            singles,
            digraphs,
            caps_digraphs,
        }
    }

    pub fn summary(&self) -> RuleSummary {
        RuleSummary {
            vowels: self.vowels.len(),
            silent: self.silent.iter().filter(|c| c.is_lowercase()).count(),
            vowel_digraphs: self.vowel_digraphs.len(),
            single_letters: self.singles.keys().filter(|c| c.is_lowercase()).count(),
            digraphs: self.digraphs.keys().filter(|c| c.is_lowercase()).count(),
        }
    }

    /// Case-insensitive membership in the vowel set.
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&to_lower(c))
    }

    pub fn is_silent(&self, c: char) -> bool {
        self.silent.contains(&c)
    }

    pub fn vowel_digraph(&self, first: char, second: char) -> Option<&str> {
        self.vowel_digraphs.get(&(first, second)).map(String::as_str)
    }

    /// Fully uppercased digraph for an uppercase key ("Щ" → "SHCH").
    pub fn caps_digraph(&self, c: char) -> Option<&str> {
        self.caps_digraphs.get(&c).map(String::as_str)
    }

    pub fn single(&self, c: char) -> Option<char> {
        self.singles.get(&c).copied()
    }

    /// Digraph with the key's case applied to its first letter.
    pub fn digraph(&self, c: char) -> Option<&str> {
        self.digraphs.get(&c).map(String::as_str)
    }
}

/// Call `f` with the uppercase form of `c`, if it has a distinct one.
fn mirror(c: char, mut f: impl FnMut(char)) {
    let upper = to_upper(c);
    if upper != c {
        f(upper);
    }
}
