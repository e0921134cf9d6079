//! Loader for the legal reference text that grounds every prompt.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Why the corpus could not be loaded. A missing file is a distinct
/// condition so the caller can surface the exact problem instead of
/// continuing with no legal grounding.
#[derive(Debug)]
pub enum CorpusError {
    NotFound(String),
    Io(io::Error),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CorpusError::NotFound(path) => write!(
                f,
                "Legal text file not found. Please ensure '{}' exists.",
                path
            ),
            CorpusError::Io(err) => write!(f, "Failed to read legal text file: {}", err),
        }
    }
}

impl std::error::Error for CorpusError {}

/// Read the entire corpus file into memory. The text is held as-is
/// for the lifetime of the session and embedded verbatim in every
/// prompt.
pub fn load(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CorpusError::NotFound(path.display().to_string()),
        _ => CorpusError::Io(err),
    })
}
