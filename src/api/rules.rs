use std::sync::Arc;

use translit_core::engine::explain;
use translit_core::RuleSet;

use super::{TranslitError, TranslitExplainStep, TranslitRuleSummary};

/// A rule set owned by the host, independent of the global one.
#[derive(uniffi::Object)]
pub struct TranslitRules {
    rules: RuleSet,
}

#[uniffi::export]
impl TranslitRules {
    #[uniffi::constructor]
    fn new(toml: String) -> Result<Arc<Self>, TranslitError> {
        let rules = RuleSet::from_toml(&toml)
            .map_err(|e| TranslitError::InvalidData { msg: e.to_string() })?;
        Ok(Arc::new(Self { rules }))
    }

    fn transliterate(&self, text: String) -> String {
        self.rules.transliterate(&text)
    }

    fn summary(&self) -> TranslitRuleSummary {
        self.rules.summary().into()
    }

    fn explain(&self, text: String) -> Vec<TranslitExplainStep> {
        explain(&self.rules, &text)
            .steps
            .into_iter()
            .map(|s| TranslitExplainStep {
                pass: s.pass.to_string(),
                buffer: s.buffer,
                changed: s.changed,
            })
            .collect()
    }
}
