// WHY: Simplified regex segmenter for callers that want predictable splits
// Any '.', '!' or '?' followed by whitespace or end of text closes a sentence

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

/// Terminal punctuation plus the whitespace run that belongs to the sentence
const BOUNDARY_PATTERN: &str = r"[.!?](?:\s+|\z)";

/// Regex-based sentence segmenter
pub struct PunctuationDetector {
    boundary: Regex,
}

impl PunctuationDetector {
    pub fn new() -> Result<Self> {
        let boundary = Regex::new(BOUNDARY_PATTERN)?;
        debug!("Compiled punctuation boundary pattern: {}", BOUNDARY_PATTERN);
        Ok(Self { boundary })
    }

    /// Split `text` into sentence slices, each keeping its punctuation and trailing whitespace
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut segments = Vec::new();
        let mut start = 0;

        for mat in self.boundary.find_iter(text) {
            segments.push(&text[start..mat.end()]);
            start = mat.end();
        }

        // End of text is an implicit boundary
        if start < text.len() {
            segments.push(&text[start..]);
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split_keeps_trailing_whitespace() {
        let detector = PunctuationDetector::new().unwrap();
        let segments = detector.segment("Hello world. Hello again.");
        assert_eq!(segments, vec!["Hello world. ", "Hello again."]);
    }

    #[test]
    fn test_no_terminal_punctuation_is_one_sentence() {
        let detector = PunctuationDetector::new().unwrap();
        assert_eq!(detector.segment("no punctuation here"), vec!["no punctuation here"]);
    }

    #[test]
    fn test_inner_periods_do_not_split() {
        let detector = PunctuationDetector::new().unwrap();
        let segments = detector.segment("Pi is 3.14 roughly! Wait... what? Yes");
        assert_eq!(segments, vec!["Pi is 3.14 roughly! ", "Wait... ", "what? ", "Yes"]);
    }

    #[test]
    fn test_empty_input() {
        let detector = PunctuationDetector::new().unwrap();
        assert!(detector.segment("").is_empty());
    }

    #[test]
    fn test_segments_cover_whole_text() {
        let detector = PunctuationDetector::new().unwrap();
        let text = "One.\nTwo!\r\n\r\nThree? four";
        let segments = detector.segment(text);
        assert_eq!(segments.concat(), text);
        assert_eq!(segments.len(), 4);
    }
}
