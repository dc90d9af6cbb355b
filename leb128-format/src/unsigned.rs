//! Unsigned LEB128 for `u64`

use smallvec::SmallVec;

use crate::constants::{
    CONTINUATION_BIT, GROUP_BITS, LAST_U64_GROUP_MASK, MAX_U64_GROUPS, PAYLOAD_MASK,
};
use crate::error::{Leb128Error, Result};
use crate::options::{DecodeOptions, OverflowPolicy};

/// Encode a u64 as unsigned LEB128
pub fn encode_u64(val: u64) -> SmallVec<[u8; MAX_U64_GROUPS]> {
    let mut result = SmallVec::new();
    let mut x = val;

    while x >= u64::from(CONTINUATION_BIT) {
        result.push((x & u64::from(PAYLOAD_MASK)) as u8 | CONTINUATION_BIT);
        x >>= GROUP_BITS;
    }
    result.push((x & u64::from(PAYLOAD_MASK)) as u8);

    result
}

/// Decode unsigned LEB128 from bytes
///
/// Stops after the first group with the continuation bit clear; anything
/// after it is ignored. Oversized values are rejected.
pub fn decode_u64(bytes: &[u8]) -> Result<u64> {
    decode_u64_prefix(bytes).map(|(value, _)| value)
}

/// Decode unsigned LEB128 from bytes, returning the value and bytes consumed
pub fn decode_u64_prefix(bytes: &[u8]) -> Result<(u64, usize)> {
    decode_u64_with(bytes, &DecodeOptions::default())
}

/// Decode unsigned LEB128 with explicit options
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// - [`Leb128Error::InvalidEncoding`] if `bytes` is empty or no group
///   terminates the chain.
/// - [`Leb128Error::Overflow`] under [`OverflowPolicy::Reject`] if the value
///   needs more than 64 bits.
pub fn decode_u64_with(bytes: &[u8], opts: &DecodeOptions) -> Result<(u64, usize)> {
    if bytes.is_empty() {
        tracing::debug!("rejecting empty u64 encoding");
        return Err(Leb128Error::empty());
    }

    let reject = opts.overflow == OverflowPolicy::Reject;
    let mut result = 0u64;

    for (i, &byte) in bytes.iter().enumerate() {
        let payload = byte & PAYLOAD_MASK;

        if i < MAX_U64_GROUPS {
            if i == MAX_U64_GROUPS - 1 && payload > LAST_U64_GROUP_MASK {
                if reject {
                    tracing::debug!(payload, "u64 encoding overflows in final group");
                    return Err(Leb128Error::Overflow(format!(
                        "group {} payload {:#04x} exceeds 64 bits",
                        i, payload
                    )));
                }
                tracing::trace!(payload, "truncating u64 final group");
            }
            result |= u64::from(payload) << (GROUP_BITS * i as u32);
        } else if reject {
            tracing::debug!(groups = i + 1, "u64 encoding has too many groups");
            return Err(Leb128Error::Overflow(format!(
                "more than {} groups",
                MAX_U64_GROUPS
            )));
        } else if payload != 0 {
            tracing::trace!(group = i, payload, "dropping u64 group beyond 64 bits");
        }

        if byte & CONTINUATION_BIT == 0 {
            return Ok((result, i + 1));
        }
    }

    tracing::debug!(len = bytes.len(), "u64 encoding is unterminated");
    Err(Leb128Error::unterminated(bytes.len()))
}
