use super::default_rules;
use crate::engine::passes::{caps_digraphs, elide_signs, letters, soften_kha, vowel_digraphs};
use crate::rules::RuleSet;

fn run(pass: fn(&RuleSet, &[char]) -> Vec<char>, input: &str) -> String {
    let rules = default_rules();
    let buf: Vec<char> = input.chars().collect();
    pass(&rules, &buf).into_iter().collect()
}

#[test]
fn test_soften_kha_after_vowel() {
    assert_eq!(run(soften_kha, "ах"), "аh");
    assert_eq!(run(soften_kha, "АХ"), "АH");
    assert_eq!(run(soften_kha, "ёХ"), "ёH");
    assert_eq!(run(soften_kha, "Ох"), "Оh");
}

#[test]
fn test_soften_kha_needs_vowel() {
    assert_eq!(run(soften_kha, "рх"), "рх");
    assert_eq!(run(soften_kha, "хх"), "хх");
    // Signs are still present when this pass runs.
    assert_eq!(run(soften_kha, "ьх"), "ьх");
    assert_eq!(run(soften_kha, "ax"), "ax");
}

#[test]
fn test_soften_kha_skips_first_char() {
    assert_eq!(run(soften_kha, "х"), "х");
    assert_eq!(run(soften_kha, "Хаос"), "Хаос");
    assert_eq!(run(soften_kha, ""), "");
}

#[test]
fn test_elide_signs() {
    assert_eq!(run(elide_signs, "подъезд"), "подезд");
    assert_eq!(run(elide_signs, "соль"), "сол");
    assert_eq!(run(elide_signs, "ЬЪьъ"), "");
    assert_eq!(run(elide_signs, "abc"), "abc");
}

#[test]
fn test_vowel_digraphs() {
    assert_eq!(run(vowel_digraphs, "мой"), "мoy");
    assert_eq!(run(vowel_digraphs, "синий"), "синy");
    assert_eq!(run(vowel_digraphs, "красный"), "краснyu");
    assert_eq!(run(vowel_digraphs, "ЧАЙ"), "ЧAY");
    assert_eq!(run(vowel_digraphs, "иЙ"), "y");
    assert_eq!(run(vowel_digraphs, "Ый"), "Yu");
}

#[test]
fn test_vowel_digraphs_non_overlapping() {
    assert_eq!(run(vowel_digraphs, "ийй"), "yй");
    assert_eq!(run(vowel_digraphs, "йод"), "йод");
    assert_eq!(run(vowel_digraphs, "айай"), "ayay");
}

#[test]
fn test_caps_digraphs_in_run() {
    assert_eq!(run(caps_digraphs, "ЯГА"), "YAГА");
    assert_eq!(run(caps_digraphs, "ЩУКА"), "SHCHУКА");
    // Latin uppercase continues a run.
    assert_eq!(run(caps_digraphs, "ЧAY"), "CHAY");
}

#[test]
fn test_caps_digraphs_last_char() {
    assert_eq!(run(caps_digraphs, "Я"), "YA");
    assert_eq!(run(caps_digraphs, "РОЯ"), "РОYA");
    assert_eq!(run(caps_digraphs, "аЖ"), "аZH");
}

#[test]
fn test_caps_digraphs_outside_run() {
    assert_eq!(run(caps_digraphs, "Яга"), "Яга");
    assert_eq!(run(caps_digraphs, "Я1"), "Я1");
    assert_eq!(run(caps_digraphs, "Я Г"), "Я Г");
    assert_eq!(run(caps_digraphs, "яГ"), "яГ");
    // Uppercase, but not letters.
    assert_eq!(run(caps_digraphs, "ЯⅫ"), "ЯⅫ");
    assert_eq!(run(caps_digraphs, "ЖⒶ"), "ЖⒶ");
}

#[test]
fn test_letters() {
    assert_eq!(run(letters, "Привет"), "Privet");
    assert_eq!(run(letters, "Я"), "Ya");
    assert_eq!(run(letters, "щука"), "shchuka");
    assert_eq!(run(letters, "ёЁ"), "eE");
    assert_eq!(run(letters, "123 abc"), "123 abc");
}
