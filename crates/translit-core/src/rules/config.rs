use std::collections::BTreeMap;

use serde::Deserialize;

use crate::cyrillic::{is_cyrillic, is_lowercase_key, to_lower};

#[derive(Deserialize)]
struct RuleConfig {
    letters: LetterConfig,
    vowel_digraphs: BTreeMap<String, String>,
    single_letters: BTreeMap<String, String>,
    digraphs: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct LetterConfig {
    vowels: Vec<String>,
    #[serde(default)]
    silent: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptyTable(&'static str),
    #[error("invalid key in [{table}]: {key:?}")]
    InvalidKey { table: &'static str, key: String },
    #[error("empty value in [{table}] for key: {key}")]
    EmptyValue { table: &'static str, key: String },
    #[error("invalid value in [{table}] for key {key}: {value:?}")]
    InvalidValue {
        table: &'static str,
        key: String,
        value: String,
    },
    #[error("key {0:?} appears in more than one table")]
    OverlappingKey(String),
    #[error("rule set already initialized")]
    AlreadyInitialized,
}

/// Validated rule tables, keyed by chars.
///
/// Single-letter and digraph keys are lowercase; the engine mirrors them to
/// uppercase at use time. Vowel-digraph keys are stored exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTables {
    pub vowels: Vec<char>,
    pub silent: Vec<char>,
    pub vowel_digraphs: Vec<((char, char), String)>,
    pub single_letters: Vec<(char, char)>,
    pub digraphs: Vec<(char, String)>,
}

/// Parse and validate a rule-table TOML document.
pub fn parse_rules_toml(toml_str: &str) -> Result<RuleTables, RuleConfigError> {
    let config: RuleConfig =
        toml::from_str(toml_str).map_err(|e| RuleConfigError::Parse(e.to_string()))?;

    let vowels = parse_letter_list("letters.vowels", &config.letters.vowels)?;
    if vowels.is_empty() {
        return Err(RuleConfigError::EmptyTable("letters.vowels"));
    }
    let silent = parse_letter_list("letters.silent", &config.letters.silent)?;

    let vowel_digraphs = parse_vowel_digraphs(&config.vowel_digraphs)?;
    let single_letters = parse_single_letters(&config.single_letters)?;
    let digraphs = parse_digraphs(&config.digraphs)?;

    // Single letters, digraphs and silent signs are all matched one char at
    // a time, so they must not share a key.
    let mut seen: Vec<char> = silent.clone();
    let keys = single_letters
        .iter()
        .map(|&(k, _)| k)
        .chain(digraphs.iter().map(|(k, _)| *k));
    for key in keys {
        if seen.contains(&key) {
            return Err(RuleConfigError::OverlappingKey(key.to_string()));
        }
        seen.push(key);
    }

    Ok(RuleTables {
        vowels,
        silent,
        vowel_digraphs,
        single_letters,
        digraphs,
    })
}

fn parse_letter_list(table: &'static str, raw: &[String]) -> Result<Vec<char>, RuleConfigError> {
    raw.iter().map(|s| lowercase_key(table, s)).collect()
}

fn parse_vowel_digraphs(
    raw: &BTreeMap<String, String>,
) -> Result<Vec<((char, char), String)>, RuleConfigError> {
    const TABLE: &str = "vowel_digraphs";
    if raw.is_empty() {
        return Err(RuleConfigError::EmptyTable(TABLE));
    }

    let mut result = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        // A key never starts with й, so two matches can never overlap.
        let chars: Vec<char> = key.chars().collect();
        let pair = match chars.as_slice() {
            &[first, second]
                if is_cyrillic(first)
                    && first.is_alphabetic()
                    && to_lower(first) != 'й'
                    && to_lower(second) == 'й' =>
            {
                (first, second)
            }
            _ => {
                return Err(RuleConfigError::InvalidKey {
                    table: TABLE,
                    key: key.clone(),
                })
            }
        };
        check_value(TABLE, key, value, |c| c.is_ascii_alphabetic())?;
        result.push((pair, value.clone()));
    }
    Ok(result)
}

fn parse_single_letters(
    raw: &BTreeMap<String, String>,
) -> Result<Vec<(char, char)>, RuleConfigError> {
    const TABLE: &str = "single_letters";
    if raw.is_empty() {
        return Err(RuleConfigError::EmptyTable(TABLE));
    }

    let mut result = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let k = lowercase_key(TABLE, key)?;
        check_value(TABLE, key, value, |c| c.is_ascii_lowercase())?;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(v), None) => result.push((k, v)),
            _ => {
                return Err(RuleConfigError::InvalidValue {
                    table: TABLE,
                    key: key.clone(),
                    value: value.clone(),
                })
            }
        }
    }
    Ok(result)
}

fn parse_digraphs(raw: &BTreeMap<String, String>) -> Result<Vec<(char, String)>, RuleConfigError> {
    const TABLE: &str = "digraphs";
    if raw.is_empty() {
        return Err(RuleConfigError::EmptyTable(TABLE));
    }

    let mut result = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let k = lowercase_key(TABLE, key)?;
        check_value(TABLE, key, value, |c| c.is_ascii_lowercase())?;
        if value.len() < 2 {
            return Err(RuleConfigError::InvalidValue {
                table: TABLE,
                key: key.clone(),
                value: value.clone(),
            });
        }
        result.push((k, value.clone()));
    }
    Ok(result)
}

fn lowercase_key(table: &'static str, key: &str) -> Result<char, RuleConfigError> {
    match key.chars().next() {
        Some(c) if is_lowercase_key(key) => Ok(c),
        _ => Err(RuleConfigError::InvalidKey {
            table,
            key: key.to_string(),
        }),
    }
}

fn check_value(
    table: &'static str,
    key: &str,
    value: &str,
    allowed: impl Fn(char) -> bool,
) -> Result<(), RuleConfigError> {
    if value.is_empty() {
        return Err(RuleConfigError::EmptyValue {
            table,
            key: key.to_string(),
        });
    }
    if !value.chars().all(allowed) {
        return Err(RuleConfigError::InvalidValue {
            table,
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
