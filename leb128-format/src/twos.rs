//! Two's-complement helpers over unbounded-width naturals
//!
//! `malachite` stores integers as sign and magnitude and only shifts
//! naturals logically. The signed codec works on a [`Natural`] holding the
//! two's-complement bit pattern and patches the high bits back to 1 after
//! every shift, which is what an arithmetic shift would have produced.

use std::ops::Range;

use malachite::base::num::basic::traits::One;
use malachite::base::num::logic::traits::{BitAccess, SignificantBits};
use malachite::Natural;

use crate::constants::GROUP_BITS;

/// Two's complement of a magnitude over its byte-aligned width
///
/// Flipping every bit of the big-endian byte representation and adding one
/// is `2^(8k) - magnitude` for a magnitude occupying `k` bytes. Zero has no
/// bytes and maps to 1.
///
/// Given a bit pattern whose top byte-aligned bit is set, the result is the
/// magnitude of the negative number that pattern represents. The signed
/// decoder relies on this.
pub fn twos_complement(magnitude: &Natural) -> Natural {
    let width = magnitude.significant_bits().div_ceil(8) * 8;
    (Natural::ONE << width) - magnitude
}

/// Refill the bits a fixed-width arithmetic right shift would have set
///
/// `size` is the bit length of the original magnitude. Bits
/// `[size - 7, size)` are set, or `[0, 7)` when `size < 7`.
pub fn sign_extend(value: &mut Natural, size: u64) {
    let group = u64::from(GROUP_BITS);
    let bits = if size < group {
        0..group
    } else {
        size - group..size
    };
    set_bit_range(value, bits);
}

/// Whether the low `size` bits of `value` are all set
///
/// With the high bits sign-extended, this means the working value is -1.
pub fn is_all_ones(value: &Natural, size: u64) -> bool {
    (0..size).all(|bit| value.get_bit(bit))
}

/// Set every bit in `bits`
pub fn set_bit_range(value: &mut Natural, bits: Range<u64>) {
    for bit in bits {
        value.set_bit(bit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use malachite::base::num::basic::traits::Zero;

    fn nat(v: u64) -> Natural {
        Natural::from(v)
    }

    #[test]
    fn test_twos_complement_single_byte() {
        assert_eq!(twos_complement(&nat(1)), nat(0xFF));
        assert_eq!(twos_complement(&nat(3)), nat(0xFD));
        assert_eq!(twos_complement(&nat(129)), nat(0x7F));
        assert_eq!(twos_complement(&nat(0xFF)), nat(1));
    }

    #[test]
    fn test_twos_complement_byte_aligned_width() {
        assert_eq!(twos_complement(&nat(0x100)), nat(0xFF00));
        assert_eq!(twos_complement(&nat(624485)), nat(1 << 24) - nat(624485));
    }

    #[test]
    fn test_twos_complement_zero() {
        assert_eq!(twos_complement(&Natural::ZERO), Natural::ONE);
    }

    #[test]
    fn test_twos_complement_recovers_negative_magnitude() {
        for v in [0x80u64, 0xC0, 0x8000, 0x8000_0000_0000_0001] {
            let once = twos_complement(&nat(v));
            assert_eq!(twos_complement(&once), nat(v), "value {:#x}", v);
        }
    }

    #[test]
    fn test_sign_extend_small_size_fills_first_group() {
        let mut value = nat(1);
        sign_extend(&mut value, 1);
        assert_eq!(value, nat(0x7F));
    }

    #[test]
    fn test_sign_extend_fills_top_group() {
        let mut value = Natural::ZERO;
        sign_extend(&mut value, 8);
        assert_eq!(value, nat(0b1111_1110));

        let mut value = nat(1);
        sign_extend(&mut value, 20);
        assert_eq!(value, nat(0b1111_1110_0000_0000_0001));
    }

    #[test]
    fn test_is_all_ones() {
        assert!(is_all_ones(&nat(0xFF), 8));
        assert!(is_all_ones(&nat(0x1FF), 8));
        assert!(!is_all_ones(&nat(0xFE), 8));
        assert!(is_all_ones(&Natural::ZERO, 0));
    }

    #[test]
    fn test_set_bit_range() {
        let mut value = Natural::ZERO;
        set_bit_range(&mut value, 3..6);
        assert_eq!(value, nat(0b11_1000));
    }
}
