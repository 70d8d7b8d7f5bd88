pub mod config;
pub mod index;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod sentence_detector;
pub mod serial;
pub mod tokenizer;

// Re-export main types for convenient access
pub use config::{ConcordanceConfig, SegmenterKind, DEFAULT_INPUT_PATH, DEFAULT_REPORT_PATH};
pub use index::OccurrenceIndex;
pub use pipeline::{Concordance, ConcordanceStats};
pub use report::ReportRow;
pub use sentence_detector::{Sentence, SentenceDetector};
pub use serial::serial;
pub use tokenizer::{tokenize, Tokenizer};
