use crate::cyrillic::{is_upper_letter, to_lower};
use crate::rules::RuleSet;

/// The letter rewritten by the contextual rule.
const KHA: char = 'х';

/// One stage of the transliteration pipeline.
///
/// Every pass reads the whole buffer produced by the previous one and
/// returns a fresh buffer; nothing is rewritten in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    SoftenKha,
    ElideSigns,
    VowelDigraphs,
    CapsDigraphs,
    Letters,
}

impl Pass {
    /// Pipeline order. `CapsDigraphs` must finish before `Letters`, which
    /// would otherwise title-case digraphs inside all-caps words.
    pub const ALL: [Pass; 5] = [
        Pass::SoftenKha,
        Pass::ElideSigns,
        Pass::VowelDigraphs,
        Pass::CapsDigraphs,
        Pass::Letters,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::SoftenKha => "soften_kha",
            Pass::ElideSigns => "elide_signs",
            Pass::VowelDigraphs => "vowel_digraphs",
            Pass::CapsDigraphs => "caps_digraphs",
            Pass::Letters => "letters",
        }
    }

    pub fn apply(self, rules: &RuleSet, buf: &[char]) -> Vec<char> {
        match self {
            Pass::SoftenKha => soften_kha(rules, buf),
            Pass::ElideSigns => elide_signs(rules, buf),
            Pass::VowelDigraphs => vowel_digraphs(rules, buf),
            Pass::CapsDigraphs => caps_digraphs(rules, buf),
            Pass::Letters => letters(rules, buf),
        }
    }
}

/// х right after a vowel is written "h" rather than "kh".
/// "ах" → "аh", "Рх" is left for the letter pass.
pub(crate) fn soften_kha(rules: &RuleSet, buf: &[char]) -> Vec<char> {
    let mut out = buf.to_vec();
    for i in 1..buf.len() {
        let c = buf[i];
        if to_lower(c) == KHA && rules.is_vowel(buf[i - 1]) {
            out[i] = if c.is_lowercase() { 'h' } else { 'H' };
        }
    }
    out
}

/// Drop the soft and hard signs.
pub(crate) fn elide_signs(rules: &RuleSet, buf: &[char]) -> Vec<char> {
    buf.iter().copied().filter(|&c| !rules.is_silent(c)).collect()
}

/// Vowel + й pairs, matched with their exact case.
pub(crate) fn vowel_digraphs(rules: &RuleSet, buf: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(buf.len());
    let mut i = 0;
    while i < buf.len() {
        if let Some(&next) = buf.get(i + 1) {
            if let Some(latin) = rules.vowel_digraph(buf[i], next) {
                out.extend(latin.chars());
                i += 2;
                continue;
            }
        }
        out.push(buf[i]);
        i += 1;
    }
    out
}

/// Uppercase digraph letters inside an all-caps run become fully uppercase
/// Latin: "ЯГА" → "YAГА". A letter counts as in a run when it ends the buffer
/// or the next char is an uppercase letter of any script.
pub(crate) fn caps_digraphs(rules: &RuleSet, buf: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(buf.len());
    for (i, &c) in buf.iter().enumerate() {
        let in_run = buf.get(i + 1).map_or(true, |&next| is_upper_letter(next));
        match rules.caps_digraph(c) {
            Some(latin) if in_run => out.extend(latin.chars()),
            _ => out.push(c),
        }
    }
    out
}

/// Everything left: single letters, then digraphs ("Я" → "Ya").
pub(crate) fn letters(rules: &RuleSet, buf: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(buf.len());
    for &c in buf {
        if let Some(latin) = rules.single(c) {
            out.push(latin);
        } else if let Some(latin) = rules.digraph(c) {
            out.extend(latin.chars());
        } else {
            out.push(c);
        }
    }
    out
}
