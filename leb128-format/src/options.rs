//! Decoder configuration

/// What the unsigned decoder does with payload bits that do not fit in 64 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Fail with [`Leb128Error::Overflow`](crate::Leb128Error::Overflow)
    #[default]
    Reject,
    /// Drop the excess bits and keep reading until the terminating group
    Truncate,
}

/// Options for [`decode_u64_with`](crate::unsigned::decode_u64_with)
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Overflow handling (default: reject)
    pub overflow: OverflowPolicy,
}

impl DecodeOptions {
    /// Options that silently truncate oversized values
    pub fn truncating() -> Self {
        Self {
            overflow: OverflowPolicy::Truncate,
        }
    }

    /// Replace the overflow policy
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}
