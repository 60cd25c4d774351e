use serde::Serialize;

use crate::rules::RuleSet;

use super::passes::Pass;

/// Buffer snapshots after every pass, for diagnostics.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub steps: Vec<ExplainStep>,
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainStep {
    pub pass: &'static str,
    pub buffer: String,
    /// Whether this pass changed the buffer.
    pub changed: bool,
}

/// Run the pipeline on `input`, recording the buffer after each pass.
///
/// Unlike [`RuleSet::transliterate`] there is no shortcut for input without
/// Cyrillic; every pass is recorded.
pub fn explain(rules: &RuleSet, input: &str) -> ExplainResult {
    let mut buf: Vec<char> = input.chars().collect();
    let mut steps = Vec::with_capacity(Pass::ALL.len());
    for pass in Pass::ALL {
        let next = pass.apply(rules, &buf);
        steps.push(ExplainStep {
            pass: pass.name(),
            buffer: next.iter().collect(),
            changed: next != buf,
        });
        buf = next;
    }
    ExplainResult {
        input: input.to_string(),
        steps,
        output: buf.into_iter().collect(),
    }
}
