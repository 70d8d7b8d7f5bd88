// WHY: Title abbreviations end in a period but never end a sentence in practice
// UAX #29 breaks after "Mr. " when a capital follows, so segments are re-joined here

use std::collections::HashSet;

/// Title abbreviations that precede a proper noun ("Dr. Smith", "Mrs. Jones")
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr.", "St."
];

/// Quote characters stripped before comparing the last word
const QUOTE_CHARS: &[char] = &['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '(', '['];

/// Abbreviation lookup backed by a HashSet
pub struct AbbreviationChecker {
    title_abbreviations: HashSet<&'static str>,
}

impl AbbreviationChecker {
    pub fn new() -> Self {
        Self {
            title_abbreviations: TITLE_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Check if a word is a title abbreviation
    pub fn is_title_abbreviation(&self, word: &str) -> bool {
        self.title_abbreviations.contains(word)
    }

    /// Check if the last whitespace-separated word of `text` is a title abbreviation
    pub fn ends_with_title_abbreviation(&self, text: &str) -> bool {
        match text.split_whitespace().last() {
            Some(last_word) => {
                let clean_word = last_word.trim_start_matches(QUOTE_CHARS);
                self.is_title_abbreviation(clean_word)
            }
            None => false,
        }
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}
