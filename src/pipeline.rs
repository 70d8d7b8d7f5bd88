// WHY: One sequential pass from document text to sorted, labelled rows
// segment -> tokenize + aggregate -> sort -> label; each stage runs exactly once

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::config::ConcordanceConfig;
use crate::index::OccurrenceIndex;
use crate::report::{self, ReportRow};
use crate::sentence_detector::SentenceDetector;

/// Counters describing one concordance run
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConcordanceStats {
    /// Number of sentences segmented from the document
    pub sentences: usize,
    /// Total tokens, counting repeats
    pub tokens: usize,
    /// Number of report rows
    pub distinct_tokens: usize,
}

/// Finished concordance: rows sorted by token, serials assigned
#[derive(Debug, Clone)]
pub struct Concordance {
    rows: Vec<ReportRow>,
    stats: ConcordanceStats,
}

impl Concordance {
    /// Build a concordance for `text` using `config`'s segmenter
    pub fn build(text: &str, config: &ConcordanceConfig) -> Result<Self> {
        let detector = SentenceDetector::new(config.segmenter)?;
        Ok(Self::build_with(text, &detector))
    }

    /// Build with the default Unicode segmenter
    pub fn from_text(text: &str) -> Result<Self> {
        Self::build(text, &ConcordanceConfig::default())
    }

    /// Build with an already constructed detector
    pub fn build_with(text: &str, detector: &SentenceDetector) -> Self {
        let sentences = detector.segment(text);
        let index = OccurrenceIndex::build(sentences.iter().copied());

        let stats = ConcordanceStats {
            sentences: index.sentence_count(),
            tokens: index.token_count(),
            distinct_tokens: index.len(),
        };
        let rows = report::rows_from_sorted(index.into_sorted());

        info!(
            sentences = stats.sentences,
            tokens = stats.tokens,
            distinct_tokens = stats.distinct_tokens,
            "Built concordance"
        );
        Self { rows, stats }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn stats(&self) -> ConcordanceStats {
        self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Report lines in sorted order, without terminators
    pub fn render(&self) -> Vec<String> {
        report::render(&self.rows)
    }

    /// Rows as a JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }
}
