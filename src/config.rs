// WHY: single place for the knobs the pipeline exposes to library callers
// The CLI only ever uses the defaults; tests and benches swap segmenters here

use std::path::PathBuf;

/// Default input document when no path is given on the command line
pub const DEFAULT_INPUT_PATH: &str = "test.txt";

/// Default persisted report location, relative to the working directory
pub const DEFAULT_REPORT_PATH: &str = "output.txt";

/// Which sentence segmentation strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmenterKind {
    /// UAX #29 sentence bounds with abbreviation and line-break merging
    #[default]
    Unicode,
    /// Split on `.`, `!` or `?` followed by whitespace or end of text
    Punctuation,
}

/// Configuration for a concordance run
#[derive(Debug, Clone)]
pub struct ConcordanceConfig {
    pub segmenter: SegmenterKind,
    /// Where the persisted report is written
    pub report_path: PathBuf,
    /// Buffer size for the report writer (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ConcordanceConfig {
    fn default() -> Self {
        Self {
            segmenter: SegmenterKind::default(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            buffer_size: 8192,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConcordanceConfig::default();
        assert_eq!(config.segmenter, SegmenterKind::Unicode);
        assert_eq!(config.report_path, PathBuf::from("output.txt"));
        assert_eq!(config.buffer_size, 8192);
    }
}
