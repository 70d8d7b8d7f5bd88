// WHY: A document that cannot be opened or read aborts the run instead of becoming an empty report
// Bytes that are not UTF-8 are replaced, not rejected; the tokenizer drops non-ASCII anyway

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Read the whole document, decoding invalid UTF-8 sequences as U+FFFD
pub async fn read_document<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let path = file_path.as_ref();
    let start_time = std::time::Instant::now();
    debug!("Starting async read of document: {}", path.display());

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read document {}", path.display()))?;

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "Document {} is not valid UTF-8 (first bad byte at {}); decoding lossily",
                path.display(),
                e.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    info!(
        "Read {}: {} bytes in {}ms",
        path.display(),
        content.len(),
        start_time.elapsed().as_millis()
    );
    Ok(content)
}
