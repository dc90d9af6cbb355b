//! Signed LEB128 for arbitrary-precision integers
//!
//! Values are [`malachite::Integer`]. The encoded length follows the bit
//! length of the value, not any container width, and the encoder always
//! produces the shortest two's-complement form.

use malachite::base::num::arithmetic::traits::DivAssignMod;
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::WrappingFrom;
use malachite::base::num::logic::traits::{BitAccess, SignificantBits};
use malachite::{Integer, Natural};

use crate::constants::{CONTINUATION_BIT, GROUP_BITS, PAYLOAD_MASK, SIGN_BIT};
use crate::error::{Leb128Error, Result};
use crate::twos::{is_all_ones, set_bit_range, sign_extend, twos_complement};

/// Encode a signed integer as minimal two's-complement LEB128
///
/// `value` is only borrowed; the caller's integer is left untouched.
pub fn encode_big_signed(value: &Integer) -> Vec<u8> {
    let magnitude = value.unsigned_abs_ref();
    let size = magnitude.significant_bits();
    let negative = *value < Integer::ZERO;

    let mut working = if negative {
        twos_complement(magnitude)
    } else {
        magnitude.clone()
    };

    let radix = Natural::from(1u32 << GROUP_BITS);
    let mut out = Vec::with_capacity(size.div_ceil(u64::from(GROUP_BITS)).max(1) as usize + 1);

    loop {
        // Floor division by 128: the low group as remainder, a logical shift
        // as quotient.
        let group = working.div_assign_mod(&radix);
        let mut byte = u8::wrapping_from(&group);

        if negative {
            sign_extend(&mut working, size);
        }

        let last = if negative {
            byte & SIGN_BIT != 0 && is_all_ones(&working, size)
        } else {
            byte & SIGN_BIT == 0 && working == Natural::ZERO
        };

        if !last {
            byte |= CONTINUATION_BIT;
        }
        out.push(byte);

        if last {
            return out;
        }
    }
}

/// Decode signed LEB128 into an arbitrary-precision integer
///
/// Stops after the first group with the continuation bit clear; anything
/// after it is ignored.
pub fn decode_big_signed(bytes: &[u8]) -> Result<Integer> {
    decode_big_signed_prefix(bytes).map(|(value, _)| value)
}

/// Decode signed LEB128, returning the value and bytes consumed
///
/// # Errors
///
/// [`Leb128Error::InvalidEncoding`] if `bytes` is empty or no group
/// terminates the chain.
pub fn decode_big_signed_prefix(bytes: &[u8]) -> Result<(Integer, usize)> {
    if bytes.is_empty() {
        tracing::debug!("rejecting empty signed encoding");
        return Err(Leb128Error::empty());
    }

    let Some(end) = bytes.iter().position(|&b| b & CONTINUATION_BIT == 0) else {
        tracing::debug!(len = bytes.len(), "signed encoding is unterminated");
        return Err(Leb128Error::unterminated(bytes.len()));
    };
    let groups = &bytes[..=end];

    let mut accumulator = Natural::ZERO;
    for (i, &byte) in groups.iter().enumerate() {
        let base = u64::from(GROUP_BITS) * i as u64;
        let payload = byte & PAYLOAD_MASK;
        for bit in 0..GROUP_BITS {
            if payload >> bit & 1 == 1 {
                accumulator.set_bit(base + u64::from(bit));
            }
        }
    }

    let consumed = groups.len();
    if groups[end] & SIGN_BIT == 0 {
        return Ok((Integer::from(accumulator), consumed));
    }

    // Fill up to the byte-aligned width so the top bit marks the sign.
    let payload_bits = u64::from(GROUP_BITS) * consumed as u64;
    set_bit_range(&mut accumulator, payload_bits..8 * consumed as u64);
    let magnitude = twos_complement(&accumulator);

    Ok((-Integer::from(magnitude), consumed))
}
