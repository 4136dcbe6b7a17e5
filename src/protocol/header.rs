//! Segment header value
//!
//! One header travels with every segment of a split message.

use uuid::Uuid;

use super::{EMPTY_MESSAGE_ID, FormatVersion, INVALID_PAYLOAD_SIZE, INVALID_SEGMENT_INDEX};

/// Segment header value
///
/// # Wire Format
///
/// ```text
/// +---------+----------------+----------------+---------------+---------------+--------------+
/// | Version | Message ID low | Message ID high| Segment index | Segment count | Payload size |
/// | 1 byte  | 8 bytes        | 8 bytes        | 4 bytes       | 4 bytes       | 4 bytes      |
/// +---------+----------------+----------------+---------------+---------------+--------------+
/// ```
///
/// Integers are big-endian. The payload size is only written for
/// [`FormatVersion::LegacyV2`] and [`FormatVersion::V3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderValue {
    version: FormatVersion,
    message_id: Uuid,
    segment_index: i32,
    segment_count: i32,
    payload_size: i32,
}

impl HeaderValue {
    /// Create a new header value
    #[must_use]
    pub const fn new(
        version: FormatVersion,
        message_id: Uuid,
        segment_index: i32,
        segment_count: i32,
        payload_size: i32,
    ) -> Self {
        Self {
            version,
            message_id,
            segment_index,
            segment_count,
            payload_size,
        }
    }

    /// Create a [`FormatVersion::Legacy`] header, which has no payload size
    #[must_use]
    pub const fn legacy(message_id: Uuid, segment_index: i32, segment_count: i32) -> Self {
        Self::new(
            FormatVersion::Legacy,
            message_id,
            segment_index,
            segment_count,
            INVALID_PAYLOAD_SIZE,
        )
    }

    /// Generate a random message ID for a new group of segments
    #[must_use]
    pub fn new_message_id() -> Uuid {
        Uuid::new_v4()
    }

    /// Get format version
    #[must_use]
    pub const fn version(&self) -> FormatVersion {
        self.version
    }

    /// Get message ID
    #[must_use]
    pub const fn message_id(&self) -> Uuid {
        self.message_id
    }

    /// Get segment index
    #[must_use]
    pub const fn segment_index(&self) -> i32 {
        self.segment_index
    }

    /// Get segment count
    #[must_use]
    pub const fn segment_count(&self) -> i32 {
        self.segment_count
    }

    /// Get total payload size, [`INVALID_PAYLOAD_SIZE`] when unknown
    #[must_use]
    pub const fn payload_size(&self) -> i32 {
        self.payload_size
    }

    /// Encoded length of this header
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        self.version.encoded_len()
    }

    /// Check if the message ID is set
    #[must_use]
    pub fn has_message_id(&self) -> bool {
        self.message_id != EMPTY_MESSAGE_ID
    }

    /// Check if the segment index marks a real segment
    #[must_use]
    pub const fn is_valid_segment(&self) -> bool {
        self.segment_index != INVALID_SEGMENT_INDEX
    }

    /// Check if the total payload size is known
    #[must_use]
    pub const fn has_known_payload_size(&self) -> bool {
        self.payload_size != INVALID_PAYLOAD_SIZE
    }

    /// Encode header to bytes
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        super::encode(self)
    }

    /// Decode header from bytes
    pub fn from_bytes(bytes: &[u8]) -> super::Result<Self> {
        super::decode(bytes)
    }
}
