use crate::{Error, DELIMITER, MAX_CODE};

/// Decode a COBS-encoded sequence from `data` into `out`, returning the
/// number of bytes written.
///
/// Decoding terminates two ways, both normal: the input runs out (the
/// round-trip case, feeding back exactly the length
/// [`encode`](crate::encode) returned), or a [`DELIMITER`] shows up in
/// code position. The delimiter
/// is consumed but not emitted, and whatever follows it is ignored. Any
/// implied zero owed by the block before the delimiter is still emitted.
///
/// The decoded payload is always shorter than the input, so an `out` of
/// `data.len()` bytes is sufficient; running out of room fails with
/// [`Error::OutputTooSmall`].
pub fn decode(data: &[u8], out: &mut [u8]) -> Result<usize, Error> {
    let mut read = 0;
    let mut write = 0;
    // A fictitious maximal previous block suppresses the implied zero in
    // front of the very first code byte.
    let mut code = MAX_CODE;
    let mut block = 0u8;

    while read < data.len() {
        if block > 0 {
            if write == out.len() {
                return Err(Error::OutputTooSmall {
                    needed: write + 1,
                    available: out.len(),
                });
            }
            out[write] = data[read];
            write += 1;
            read += 1;
            block -= 1;
        } else {
            if code != MAX_CODE {
                // reconstruct the zero the encoder elided
                if write == out.len() {
                    return Err(Error::OutputTooSmall {
                        needed: write + 1,
                        available: out.len(),
                    });
                }
                out[write] = DELIMITER;
                write += 1;
            }
            code = data[read];
            read += 1;
            trace!("code {code:#04x} at {}", read - 1);
            if code == DELIMITER {
                break;
            }
            block = code - 1;
        }
    }

    Ok(write)
}
