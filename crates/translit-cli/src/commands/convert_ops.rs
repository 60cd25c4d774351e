use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use translit_core::engine::explain;
use translit_core::RuleSet;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install the custom rules file (if any) and return the global rule set.
pub fn load_rules(rules_file: Option<&str>) -> Result<&'static RuleSet, String> {
    if let Some(path) = rules_file {
        let content = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
        RuleSet::init_custom(content).map_err(|e| format!("{path}: {e}"))?;
    }
    Ok(RuleSet::global())
}

/// Transliterate each line of `input` on its own, returning the line count.
pub fn convert_stream<R: BufRead, W: Write>(
    rules: &RuleSet,
    input: R,
    mut out: W,
) -> io::Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        writeln!(out, "{}", rules.transliterate(&line?))?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

pub fn convert_cmd(texts: &[String], rules_file: Option<&str>) {
    let rules = die!(load_rules(rules_file), "Error loading rules: {}");

    if texts.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        die!(
            convert_stream(rules, stdin.lock(), stdout.lock()),
            "Error: {}"
        );
        return;
    }

    for text in texts {
        println!("{}", rules.transliterate(text));
    }
}

pub fn explain_cmd(text: &str, rules_file: Option<&str>, json: bool) {
    let rules = die!(load_rules(rules_file), "Error loading rules: {}");
    let result = explain(rules, text);

    if json {
        let s = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{s}");
        return;
    }

    println!("input: {}", result.input);
    for (i, step) in result.steps.iter().enumerate() {
        let mark = if step.changed { "*" } else { " " };
        println!("{}{} {:<15} {}", i + 1, mark, step.pass, step.buffer);
    }
    println!("output: {}", result.output);
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use translit_core::rules::default_toml;

    #[test]
    fn test_convert_stream_per_line() {
        let rules = RuleSet::from_toml(default_toml()).unwrap();
        let mut out = Vec::new();
        let n = convert_stream(&rules, Cursor::new("Привет\nЯ\n\nabc"), &mut out).unwrap();
        assert_eq!(n, 4);
        // Each line is its own buffer, so a trailing "Я" ends a caps run.
        assert_eq!(String::from_utf8(out).unwrap(), "Privet\nYA\n\nabc\n");
    }

    #[test]
    fn test_convert_stream_empty() {
        let rules = RuleSet::from_toml(default_toml()).unwrap();
        let mut out = Vec::new();
        let n = convert_stream(&rules, Cursor::new(""), &mut out).unwrap();
        assert_eq!(n, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_load_rules_missing_file() {
        let err = load_rules(Some("/nonexistent/rules.toml")).unwrap_err();
        assert!(err.starts_with("/nonexistent/rules.toml"));
    }
}
