//! Character-level classification and case mapping for Cyrillic text.

/// Check the full Cyrillic block (U+0400..U+04FF). The Russian alphabet sits
/// in U+0410..U+044F plus Ё/ё (U+0401, U+0451); the rest of the block is
/// accepted so rule keys can be validated with one range check.
pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// The 33 letters of the Russian alphabet, either case.
pub fn is_russian_letter(c: char) -> bool {
    ('\u{0410}'..='\u{044F}').contains(&c) || c == 'Ё' || c == 'ё'
}

/// Single-char lowercase mapping. Characters whose lowercase form is not a
/// single codepoint are returned unchanged.
pub fn to_lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

/// Single-char uppercase mapping. Characters whose uppercase form is not a
/// single codepoint (e.g. 'ß') are returned unchanged.
pub fn to_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    let first = it.next()?;
    match it.next() {
        None => Some(first),
        Some(_) => None,
    }
}

/// Codepoints with the Other_Uppercase property: uppercase, but not in the
/// Lu (uppercase letter) category.
const OTHER_UPPERCASE: &[(char, char)] = &[
    ('\u{2160}', '\u{216F}'), // Roman numerals Ⅰ..Ⅿ
    ('\u{24B6}', '\u{24CF}'), // circled Ⓐ..Ⓩ
    ('\u{1F130}', '\u{1F149}'), // squared 🄰..🅉
    ('\u{1F150}', '\u{1F169}'), // negative circled 🅐..🅩
    ('\u{1F170}', '\u{1F189}'), // negative squared 🅰..🆉
];

/// An uppercase letter (category Lu) of any script. Roman numerals and
/// enclosed letters are uppercase but not letters, and do not count.
pub fn is_upper_letter(c: char) -> bool {
    c.is_alphabetic()
        && c.is_uppercase()
        && !OTHER_UPPERCASE
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Uppercase the first char of an ASCII word, leaving the rest untouched.
/// "shch" → "Shch".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check if a string is a valid lowercase rule key: exactly one lowercase
/// Cyrillic letter.
pub fn is_lowercase_key(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if is_cyrillic(c) && c.is_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_cyrillic('я'));
        assert!(is_cyrillic('Ё'));
        assert!(is_cyrillic('і'));
        assert!(!is_cyrillic('a'));
        assert!(!is_cyrillic('7'));

        assert!(is_russian_letter('Ж'));
        assert!(is_russian_letter('ё'));
        assert!(!is_russian_letter('і'));
        assert!(!is_russian_letter('x'));
    }

    #[test]
    fn test_case_mapping() {
        assert_eq!(to_lower('Х'), 'х');
        assert_eq!(to_lower('Ё'), 'ё');
        assert_eq!(to_upper('щ'), 'Щ');
        assert_eq!(to_upper('h'), 'H');
        assert_eq!(to_upper('1'), '1');
        // 'ß' uppercases to "SS"
        assert_eq!(to_upper('ß'), 'ß');
    }

    #[test]
    fn test_is_upper_letter() {
        assert!(is_upper_letter('Г'));
        assert!(is_upper_letter('H'));
        assert!(!is_upper_letter('г'));
        assert!(!is_upper_letter('1'));
        assert!(!is_upper_letter(' '));
        assert!(!is_upper_letter('Ⅻ'));
        assert!(!is_upper_letter('Ⓐ'));
        assert!(!is_upper_letter('\u{1F170}'));
        assert!(is_upper_letter('Ё'));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("shch"), "Shch");
        assert_eq!(capitalize("ya"), "Ya");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_is_lowercase_key() {
        assert!(is_lowercase_key("ж"));
        assert!(!is_lowercase_key("Ж"));
        assert!(!is_lowercase_key("жж"));
        assert!(!is_lowercase_key("z"));
        assert!(!is_lowercase_key(""));
    }
}
