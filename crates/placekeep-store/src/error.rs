use placekeep_types::PlaceId;
use std::fmt;

/// Result type for placekeep-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// Database file could not be opened or the schema could not be created.
    /// No other store operation can proceed after this.
    Init(rusqlite::Error),

    /// A read or write against an initialized store failed
    Database(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Point lookup found no row for this id
    NotFound(PlaceId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Init(err) => write!(f, "Failed to initialize place database: {}", err),
            Error::Database(err) => {
                let msg = err.to_string();
                // Detect schema mismatch errors and provide actionable hint
                if msg.contains("no such column") || msg.contains("no such table") {
                    write!(
                        f,
                        "Database schema mismatch: {}. Run 'placekeep init' to recreate it.",
                        msg
                    )
                } else {
                    write!(f, "Database error: {}", err)
                }
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::NotFound(id) => write!(f, "No place with id {}", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Init(err) => Some(err),
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::NotFound(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
