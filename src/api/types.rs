use translit_core::rules::RuleSummary;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum TranslitError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct TranslitRuleSummary {
    pub vowels: u32,
    pub silent: u32,
    pub vowel_digraphs: u32,
    pub single_letters: u32,
    pub digraphs: u32,
}

impl From<RuleSummary> for TranslitRuleSummary {
    fn from(s: RuleSummary) -> Self {
        Self {
            vowels: s.vowels as u32,
            silent: s.silent as u32,
            vowel_digraphs: s.vowel_digraphs as u32,
            single_letters: s.single_letters as u32,
            digraphs: s.digraphs as u32,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct TranslitExplainStep {
    pub pass: String,
    pub buffer: String,
    pub changed: bool,
}
