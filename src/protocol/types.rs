//! Segment header format versions

use std::fmt;

use super::{Error, LEGACY_HEADER_SIZE, LEGACY_V2_HEADER_SIZE, Malformed, V3_HEADER_SIZE};

/// Segment header format version
///
/// The tag is the first byte of every encoded header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FormatVersion {
    /// Original layout, no payload size on the wire.
    ///
    /// Segments produced under this version carry their own segment
    /// metadata inside the payload.
    Legacy = 0,
    /// Adds the total payload size after the segment count.
    LegacyV2 = 1,
    /// Same bytes as [`FormatVersion::LegacyV2`]; segments carry no
    /// in-payload segment metadata.
    V3 = 2,
}

impl FormatVersion {
    /// Version written by current producers
    pub const CURRENT: Self = Self::V3;

    /// Convert from byte
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Legacy),
            1 => Some(Self::LegacyV2),
            2 => Some(Self::V3),
            _ => None,
        }
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Exact encoded header length for this version
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Legacy => LEGACY_HEADER_SIZE,
            Self::LegacyV2 => LEGACY_V2_HEADER_SIZE,
            Self::V3 => V3_HEADER_SIZE,
        }
    }

    /// Check if the payload size field is written for this version
    #[must_use]
    pub const fn has_payload_size(self) -> bool {
        matches!(self, Self::LegacyV2 | Self::V3)
    }

    /// Check if the assembler should expect segment metadata inside each
    /// segment's payload
    #[must_use]
    pub const fn expects_payload_header(self) -> bool {
        matches!(self, Self::Legacy | Self::LegacyV2)
    }
}

impl TryFrom<u8> for FormatVersion {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_u8(tag).ok_or(Error::MalformedHeader(Malformed::UnknownVersion { tag }))
    }
}

impl From<FormatVersion> for u8 {
    fn from(version: FormatVersion) -> Self {
        version.as_u8()
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Legacy => "Legacy",
            Self::LegacyV2 => "LegacyV2",
            Self::V3 => "V3",
        };
        write!(f, "{name}")
    }
}
