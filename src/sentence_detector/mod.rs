// WHY: Sentence segmentation front end with two interchangeable strategies
// Unicode (UAX #29) is the default; the punctuation detector is the simplified fallback

use anyhow::Result;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::SegmenterKind;

pub mod abbreviations;
pub mod punctuation_detector;

pub use abbreviations::AbbreviationChecker;
pub use punctuation_detector::PunctuationDetector;

/// Configuration for sentence boundary acceptance
#[derive(Debug, Clone)]
pub struct SentenceBoundaryRules {
    /// End punctuation characters that can terminate a sentence
    pub end_punctuation: Vec<char>,
    /// Closing quotes and brackets allowed between end punctuation and whitespace
    pub closing_punctuation: Vec<char>,
}

impl Default for SentenceBoundaryRules {
    fn default() -> Self {
        Self {
            end_punctuation: vec!['.', '?', '!'],
            closing_punctuation: vec!['"', '\'', '\u{201D}', '\u{2019}', ')', ']'],
        }
    }
}

/// A sentence slice borrowed from the document with its 1-based ordinal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub index: usize,
    pub text: &'a str,
}

enum Strategy {
    Unicode {
        rules: SentenceBoundaryRules,
        abbreviations: AbbreviationChecker,
    },
    Punctuation(PunctuationDetector),
}

/// Splits a document into ordered sentences
pub struct SentenceDetector {
    strategy: Strategy,
}

impl SentenceDetector {
    /// Create a detector for the given strategy
    pub fn new(kind: SegmenterKind) -> Result<Self> {
        let strategy = match kind {
            SegmenterKind::Unicode => Strategy::Unicode {
                rules: SentenceBoundaryRules::default(),
                abbreviations: AbbreviationChecker::new(),
            },
            SegmenterKind::Punctuation => Strategy::Punctuation(PunctuationDetector::new()?),
        };
        Ok(Self { strategy })
    }

    /// Create a Unicode detector with custom acceptance rules
    pub fn with_rules(rules: SentenceBoundaryRules) -> Self {
        Self {
            strategy: Strategy::Unicode {
                rules,
                abbreviations: AbbreviationChecker::new(),
            },
        }
    }

    /// Split `text` into raw sentence slices; concatenated they reproduce `text`
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match &self.strategy {
            Strategy::Unicode { rules, abbreviations } => segment_unicode(text, rules, abbreviations),
            Strategy::Punctuation(detector) => detector.segment(text),
        }
    }

    /// Segment `text` and number the sentences from 1 in order
    pub fn detect_sentences<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let sentences: Vec<Sentence<'a>> = self
            .segment(text)
            .into_iter()
            .enumerate()
            .map(|(i, text)| Sentence { index: i + 1, text })
            .collect();
        debug!("Detected {} sentences", sentences.len());
        sentences
    }
}

/// UAX #29 sentence bounds, re-joined where the break is not a real sentence end.
///
/// A UAX #29 segment is accepted only when, ignoring trailing whitespace and
/// closing quotes, it ends in terminal punctuation and its last word is not a
/// title abbreviation. Anything else (a hard line break inside a sentence,
/// "Mr." before a name) is carried into the next segment.
fn segment_unicode<'a>(
    text: &'a str,
    rules: &SentenceBoundaryRules,
    abbreviations: &AbbreviationChecker,
) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut end = 0;

    for piece in text.split_sentence_bounds() {
        end += piece.len();
        let candidate = &text[start..end];
        if is_sentence_end(candidate, rules, abbreviations) {
            segments.push(candidate);
            start = end;
        }
    }

    if start < text.len() {
        let rest = &text[start..];
        if rest.trim().is_empty() && !segments.is_empty() {
            // Trailing blank lines belong to the last sentence
            let last = segments.len() - 1;
            let last_start = start - segments[last].len();
            segments[last] = &text[last_start..];
        } else {
            segments.push(rest);
        }
    }

    segments
}

fn is_sentence_end(candidate: &str, rules: &SentenceBoundaryRules, abbreviations: &AbbreviationChecker) -> bool {
    let body = candidate
        .trim_end()
        .trim_end_matches(|c: char| rules.closing_punctuation.contains(&c));

    match body.chars().last() {
        Some(c) if rules.end_punctuation.contains(&c) => !abbreviations.ends_with_title_abbreviation(body),
        _ => false,
    }
}
