//! LEB128 Format - Variable-length integer encoding
//!
//! This crate provides LEB128 (Little Endian Base 128) encoding and decoding
//! with no I/O dependencies. It includes:
//!
//! - Unsigned LEB128 for `u64`
//! - Signed two's-complement LEB128 for arbitrary-precision integers
//! - Two's-complement and sign-extension helpers for unbounded widths
//! - Error types
//! - Decoder options
//!
//! ```
//! use leb128_format::{decode_big_signed, encode_big_signed, encode_u64};
//! use malachite::Integer;
//!
//! assert_eq!(encode_u64(128).as_slice(), &[0x80, 0x01]);
//!
//! let value = Integer::from(-624485);
//! let bytes = encode_big_signed(&value);
//! assert_eq!(bytes, [0x9B, 0xF1, 0x59]);
//! assert_eq!(decode_big_signed(&bytes).unwrap(), value);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod options;
pub mod signed;
pub mod twos;
pub mod unsigned;

// Re-export commonly used items
pub use error::{Leb128Error, Result};
pub use options::{DecodeOptions, OverflowPolicy};
pub use signed::{decode_big_signed, decode_big_signed_prefix, encode_big_signed};
pub use unsigned::{decode_u64, decode_u64_prefix, decode_u64_with, encode_u64};
