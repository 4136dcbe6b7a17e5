//! Segment header codec for split messages
//!
//! When a message is too large for its channel it is split into segments,
//! and each segment carries a small fixed-layout header naming the logical
//! message it belongs to, its position, and the reassembled size. This crate
//! encodes and decodes that header across its three format versions.
//!
//! # Quick Start
//!
//! ```rust
//! use segment_header::{FormatVersion, HeaderValue};
//!
//! let message_id = HeaderValue::new_message_id();
//! let header = HeaderValue::new(FormatVersion::V3, message_id, 0, 4, 4 * 1024 * 1024);
//!
//! // Encode to bytes (29 bytes for V3)
//! let bytes = header.to_bytes();
//! assert_eq!(bytes.len(), 29);
//!
//! // Decode from bytes
//! let decoded = HeaderValue::from_bytes(&bytes)?;
//! assert_eq!(decoded, header);
//! # Ok::<(), segment_header::Error>(())
//! ```
//!
//! # Versions
//!
//! | Version    | Tag | Size | Payload size on wire |
//! |------------|-----|------|----------------------|
//! | `Legacy`   | 0   | 25   | no                   |
//! | `LegacyV2` | 1   | 29   | yes                  |
//! | `V3`       | 2   | 29   | yes                  |
//!
//! Older encodings always decode. A 25-byte buffer decodes with an unknown
//! payload size no matter which version its tag names.
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`HeaderValue`] and [`FormatVersion`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;

pub use protocol::{
    EMPTY_MESSAGE_ID, Error, FormatVersion, HeaderValue, INVALID_PAYLOAD_SIZE,
    INVALID_SEGMENT_INDEX, LEGACY_HEADER_SIZE, LEGACY_V2_HEADER_SIZE, MIN_HEADER_SIZE, Malformed,
    Result, V3_HEADER_SIZE, decode, decode_bytes, encode, encode_into,
};
