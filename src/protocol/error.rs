//! Segment header error types

use thiserror::Error;

/// Segment header errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bytes do not form a decodable header
    #[error("malformed header: {0}")]
    MalformedHeader(#[from] Malformed),
}

/// Reason a header was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// Buffer cannot hold the always-present fields
    #[error("buffer too small: need {needed} bytes, got {got}")]
    TooShort {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },

    /// Version tag is not a known format version
    #[error("unknown format version tag: {tag:#x}")]
    UnknownVersion {
        /// Tag byte
        tag: u8,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::from(Malformed::TooShort { needed: 25, got: 5 });
        assert_eq!(
            err.to_string(),
            "malformed header: buffer too small: need 25 bytes, got 5"
        );

        let err = Error::from(Malformed::UnknownVersion { tag: 7 });
        let expected = "malformed header: unknown format version tag: 0x7";
        assert_eq!(err.to_string(), expected);
    }
}
