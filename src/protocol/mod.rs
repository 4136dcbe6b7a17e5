//! Segment header core implementation
//!
//! This module provides the header value, format versions, and codec.

mod codec;
mod error;
mod header;
mod types;

pub use codec::{decode, decode_bytes, encode, encode_into};
pub use error::{Error, Malformed, Result};
pub use header::HeaderValue;
pub use types::FormatVersion;

use uuid::Uuid;

/// Reserved message ID meaning "unset" (all zero bits)
pub const EMPTY_MESSAGE_ID: Uuid = Uuid::nil();

/// Reserved segment index meaning "not a segment"
pub const INVALID_SEGMENT_INDEX: i32 = -1;

/// Reserved payload size meaning "unknown"
pub const INVALID_PAYLOAD_SIZE: i32 = -1;

/// Version tag size in bytes
pub const VERSION_SIZE: usize = 1;

/// Message ID size in bytes (two 64-bit halves)
pub const MESSAGE_ID_SIZE: usize = 16;

/// Size of each 32-bit field in bytes
pub const INT_SIZE: usize = 4;

/// [`FormatVersion::Legacy`] header size in bytes
pub const LEGACY_HEADER_SIZE: usize = VERSION_SIZE + MESSAGE_ID_SIZE + INT_SIZE + INT_SIZE;

/// [`FormatVersion::LegacyV2`] header size in bytes (adds payload size)
pub const LEGACY_V2_HEADER_SIZE: usize = LEGACY_HEADER_SIZE + INT_SIZE;

/// [`FormatVersion::V3`] header size in bytes (same layout as `LegacyV2`)
pub const V3_HEADER_SIZE: usize = LEGACY_V2_HEADER_SIZE;

/// Smallest buffer that decodes
pub const MIN_HEADER_SIZE: usize = LEGACY_HEADER_SIZE;
