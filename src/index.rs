// WHY: Aggregation uses an unordered map; ordering is applied once, at emission time
// Keeping the map sorted during the build would pay for order nobody reads yet

use std::collections::HashMap;
use tracing::debug;

use crate::tokenizer::Tokenizer;

/// Token to ordered sentence indices, duplicates retained.
///
/// Every key has a non-empty occurrence list; a key exists only once its
/// token has been seen.
#[derive(Debug, Default)]
pub struct OccurrenceIndex {
    occurrences: HashMap<String, Vec<usize>>,
    tokenizer: Tokenizer,
    sentence_count: usize,
    token_count: usize,
}

impl OccurrenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from sentences in presentation order, numbering them from 1
    pub fn build<'a, I>(sentences: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index = Self::new();
        for sentence in sentences {
            index.add_sentence(sentence);
        }
        debug!(
            "Indexed {} sentences: {} tokens, {} distinct",
            index.sentence_count,
            index.token_count,
            index.occurrences.len()
        );
        index
    }

    /// Tokenize the next sentence and record its tokens; returns the index assigned to it
    pub fn add_sentence(&mut self, sentence: &str) -> usize {
        self.sentence_count += 1;
        let sentence_index = self.sentence_count;

        let occurrences = &mut self.occurrences;
        let token_count = &mut self.token_count;
        self.tokenizer.for_each_token(sentence, |token| {
            *token_count += 1;
            match occurrences.get_mut(token) {
                Some(list) => list.push(sentence_index),
                None => {
                    occurrences.insert(token.to_owned(), vec![sentence_index]);
                }
            }
        });

        sentence_index
    }

    /// Occurrence list for a token, if it was seen
    pub fn get(&self, token: &str) -> Option<&[usize]> {
        self.occurrences.get(token).map(Vec::as_slice)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Number of sentences consumed so far
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Total tokens seen, counting repeats
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Consume the index into entries ordered byte-wise by token
    pub fn into_sorted(self) -> Vec<(String, Vec<usize>)> {
        let mut entries: Vec<(String, Vec<usize>)> = self.occurrences.into_iter().collect();
        // Keys are unique, so an unstable sort is deterministic
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
