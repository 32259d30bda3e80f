use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {}", path.display())]
    InvalidText { path: PathBuf },

    #[error("Failed to list directory {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify a failed read of `path`, separating undecodable content from
    /// every other I/O failure.
    pub fn read_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            Error::InvalidText { path }
        } else {
            Error::ReadFile { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_data_becomes_invalid_text() {
        let err = Error::read_failure(
            "plays/hamlet.txt",
            io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        assert!(matches!(err, Error::InvalidText { .. }));
        assert_eq!(
            err.to_string(),
            "File is not valid UTF-8 text: plays/hamlet.txt"
        );
    }

    #[test]
    fn test_missing_file_keeps_source() {
        let err = Error::read_failure(
            "plays/missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        match &err {
            Error::ReadFile { path, source } => {
                assert_eq!(path, &PathBuf::from("plays/missing.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected ReadFile, got {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }
}
