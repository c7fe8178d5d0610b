//! # COBS Encoding Scheme
//!
//! [Consistent Overhead Byte Stuffing][cobs] removes every zero byte from a
//! payload so that a single zero can mark frame boundaries on a byte stream
//! (serial links, packet sockets).
//!
//! The encoded stream is a sequence of blocks, each led by a code byte:
//!
//! ```text
//!         ┌──────┬───────────────────┬──────┬──────────────
//!         │ code │ code - 1 literals │ code │ literals ...
//!         └──────┴───────────────────┴──────┴──────────────
//!            ▲
//!            └── distance to the next (elided) zero
//! ```
//!
//! A code byte of N in 1..=254 means: N - 1 literal bytes follow, then a
//! zero that is implied rather than stored. A code byte of 0xFF means a
//! maximal block: 254 literal bytes follow and no zero is implied.
//!
//! Thus, in the best case (a zero at least once every 254 bytes) the
//! overhead is a single leading code byte. In the worst case (no zeros at
//! all) one extra byte is spent per full 254-byte run; [`max_encoded_len`]
//! computes that bound so output buffers can be sized up front.
//!
//! The encoding does not include the payload size.
//! The decoder MUST be given the exact encoded length returned by
//! [`encode`]; a zero byte inside its input is treated as an explicit
//! terminator and everything after it is ignored.
//!
//! Neither transform touches the frame delimiter itself: encoded output
//! simply never contains a zero byte, so a higher layer may append and
//! strip a single zero around it.
//!
//! [cobs]: https://en.wikipedia.org/wiki/Consistent_Overhead_Byte_Stuffing

#[macro_use]
extern crate log;

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

use thiserror::Error;

/// The byte value reserved for framing; never present in encoded output.
pub const DELIMITER: u8 = 0;

/// code byte of a maximal block: 254 literals, no implied zero
const MAX_CODE: u8 = 0xFF;

/// Failure modes shared by [`encode`] and [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller-supplied output buffer cannot hold the result.
    #[error("output buffer holds {available} bytes, need at least {needed}")]
    OutputTooSmall { needed: usize, available: usize },
}

/// Worst-case encoded length for a payload of `raw_len` bytes, excluding
/// any trailing delimiter the caller appends: one code byte overall plus
/// one extra per full 254-byte run.
///
/// `const fn` so fixed-size buffers can be dimensioned with it:
///
/// ```
/// let mut out = [0u8; cobs_codec::max_encoded_len(64)];
/// let n = cobs_codec::encode(&[0x11; 64], &mut out).unwrap();
/// assert!(n <= out.len());
/// ```
pub const fn max_encoded_len(raw_len: usize) -> usize {
    raw_len + raw_len / 254 + 1
}

#[cfg(test)]
mod tests {
    use super::max_encoded_len;

    #[test]
    fn test_max_encoded_len() {
        assert_eq!(max_encoded_len(0), 1);
        assert_eq!(max_encoded_len(1), 2);
        assert_eq!(max_encoded_len(253), 254);
        assert_eq!(max_encoded_len(254), 256);
        assert_eq!(max_encoded_len(255), 257);
        assert_eq!(max_encoded_len(508), 511);
    }
}
