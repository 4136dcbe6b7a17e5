//! Segment header codec (encode/decode)
//!
//! Every version shares the same field order; only the trailing payload size
//! is optional. Integers are big-endian.

use bytes::{Buf, BufMut, Bytes};
use tracing::trace;
use uuid::Uuid;

use super::{
    FormatVersion, HeaderValue, INVALID_PAYLOAD_SIZE, MIN_HEADER_SIZE, Malformed, Result,
    V3_HEADER_SIZE,
};

/// Encode a header to bytes
///
/// # Format
///
/// ```text
/// [VERSION (1)] [ID LOW (8)] [ID HIGH (8)] [INDEX (4)] [COUNT (4)] [SIZE (4), LegacyV2/V3 only]
/// ```
///
/// The output is exactly [`HeaderValue::encoded_len`] bytes.
#[must_use]
pub fn encode(header: &HeaderValue) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(header.encoded_len());
    encode_into(header, &mut bytes);
    bytes
}

/// Append an encoded header to `buf`
pub fn encode_into<B: BufMut>(header: &HeaderValue, buf: &mut B) {
    let version = header.version();
    let (high, low) = header.message_id().as_u64_pair();

    buf.put_u8(version.as_u8());
    buf.put_u64(low);
    buf.put_u64(high);
    buf.put_i32(header.segment_index());
    buf.put_i32(header.segment_count());

    if version.has_payload_size() {
        buf.put_i32(header.payload_size());
    }
}

/// Decode a header from bytes
///
/// The payload size is read only when the buffer is exactly
/// [`V3_HEADER_SIZE`] bytes long. Any other decodable length yields
/// [`INVALID_PAYLOAD_SIZE`], whatever its version tag says, so headers
/// truncated to the legacy length still decode.
///
/// # Errors
///
/// Returns [`Error::MalformedHeader`](super::Error::MalformedHeader) if:
/// - Buffer is shorter than [`MIN_HEADER_SIZE`]
/// - Version tag is unknown
pub fn decode(bytes: &[u8]) -> Result<HeaderValue> {
    let len = bytes.len();

    if len < MIN_HEADER_SIZE {
        trace!(len, "rejecting short segment header");
        let needed = MIN_HEADER_SIZE;
        return Err(Malformed::TooShort { needed, got: len }.into());
    }

    let mut buf = bytes;
    let tag = buf.get_u8();
    let version = FormatVersion::try_from(tag).inspect_err(|_| {
        trace!(tag, "rejecting segment header with unknown version");
    })?;

    let low = buf.get_u64();
    let high = buf.get_u64();
    let segment_index = buf.get_i32();
    let segment_count = buf.get_i32();

    let payload_size = if len == V3_HEADER_SIZE {
        buf.get_i32()
    } else {
        if version.has_payload_size() {
            trace!(%version, len, "segment header has no payload size, treating as unknown");
        }
        INVALID_PAYLOAD_SIZE
    };

    Ok(HeaderValue::new(
        version,
        Uuid::from_u64_pair(high, low),
        segment_index,
        segment_count,
        payload_size,
    ))
}

/// Decode a header from a shared buffer
pub fn decode_bytes(bytes: &Bytes) -> Result<HeaderValue> {
    decode(bytes)
}
