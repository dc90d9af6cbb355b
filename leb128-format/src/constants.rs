//! Bit masks and group sizes for LEB128

/// High bit of a group: set when more groups follow.
pub const CONTINUATION_BIT: u8 = 0x80;

/// Low seven bits of a group carrying the payload.
pub const PAYLOAD_MASK: u8 = 0x7F;

/// Highest payload bit of a group; on the last group it carries the sign.
pub const SIGN_BIT: u8 = 0x40;

/// Payload bits per group.
pub const GROUP_BITS: u32 = 7;

/// Maximum number of groups in a `u64` encoding: ceil(64 / 7).
pub const MAX_U64_GROUPS: usize = 10;

/// Payload bits of the tenth `u64` group that still fit in 64 bits.
pub const LAST_U64_GROUP_MASK: u8 = 0x01;
