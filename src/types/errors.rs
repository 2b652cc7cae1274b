use thiserror::Error;

/// Failure taxonomy for archive analysis.
///
/// Everything here is recovered at the lowest level that can still make
/// progress: a malformed descriptor or unreadable entry degrades one signal,
/// a corrupt container degrades one archive's verdict to `unknown`. Nothing
/// aborts a directory scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The container itself cannot be opened or listed.
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),
    /// One entry inside an otherwise readable container is unreadable.
    #[error("failed to read entry '{entry}': {reason}")]
    EntryRead { entry: String, reason: String },
    /// A descriptor is present but is not valid structured data.
    #[error("malformed descriptor '{entry}': {reason}")]
    MalformedDescriptor { entry: String, reason: String },
    /// No recognized loader descriptor and the family cannot be inferred.
    #[error("no recognized loader descriptor")]
    UnsupportedLoader,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
