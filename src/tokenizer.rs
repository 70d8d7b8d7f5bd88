//! Word tokenizer.
//!
//! Turns one sentence into lowercase word tokens in four steps:
//!
//! 1. **Filter**: drop every character that is not an ASCII letter, ASCII
//!    digit, `.` or a space. Commas, quotes, apostrophes, hyphens and line
//!    breaks vanish, so `Don't` becomes `Dont` and `2nd-place` becomes
//!    `2ndplace`.
//! 2. **Split**: run UAX #29 word-boundary segmentation over the filtered
//!    text. Letters and digits joined by a single period (`U.S.A`, `3.14`)
//!    stay in one span.
//! 3. **Validate**: keep a span only if it starts with a letter or digit;
//!    space runs and lone periods are discarded.
//! 4. **Normalize**: lowercase.
//!
//! Because the filtered text is pure ASCII, lowercasing is done once on the
//! whole buffer before splitting; word boundaries do not depend on case.

use unicode_segmentation::UnicodeSegmentation;

/// Whether a character survives the filter step
#[inline]
fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == ' '
}

/// Remove every character that is not an ASCII letter, digit, period or space
pub fn filter_sentence(sentence: &str) -> String {
    let mut buffer = String::with_capacity(sentence.len());
    filter_sentence_into(sentence, &mut buffer);
    buffer
}

/// Filter into a caller-supplied buffer, lowercasing on the way
pub fn filter_sentence_into(sentence: &str, buffer: &mut String) {
    buffer.clear();
    buffer.extend(sentence.chars().filter(|&c| is_kept(c)).map(|c| c.to_ascii_lowercase()));
}

/// A word candidate is valid only if it begins with a letter or digit
#[inline]
fn is_word(candidate: &str) -> bool {
    candidate.chars().next().is_some_and(char::is_alphanumeric)
}

/// Reusable tokenizer that keeps one scratch buffer across sentences.
///
/// ```
/// use concordance::tokenizer::Tokenizer;
///
/// let mut tokenizer = Tokenizer::new();
/// let mut words = Vec::new();
/// tokenizer.for_each_token("Don't stop.", |token| words.push(token.to_string()));
/// assert_eq!(words, ["dont", "stop"]);
/// ```
#[derive(Debug, Default)]
pub struct Tokenizer {
    buffer: String,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit each token of `sentence` in left-to-right order.
    ///
    /// Tokens borrow the internal buffer and are only valid for the callback.
    pub fn for_each_token<F>(&mut self, sentence: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        filter_sentence_into(sentence, &mut self.buffer);
        for candidate in self.buffer.split_word_bounds() {
            if is_word(candidate) {
                emit(candidate);
            }
        }
    }
}

/// Tokenize one sentence into owned, normalized tokens
pub fn tokenize(sentence: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    Tokenizer::new().for_each_token(sentence, |token| tokens.push(token.to_owned()));
    tokens
}
