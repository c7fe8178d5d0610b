use crate::{max_encoded_len, Error, DELIMITER, MAX_CODE};

/// COBS-encode `data` into `out`, returning the number of bytes written.
///
/// `out` must hold at least [`max_encoded_len`]`(data.len())` bytes;
/// anything shorter fails with [`Error::OutputTooSmall`] before a single
/// byte is written. The encoded bytes never include [`DELIMITER`], and no
/// trailing delimiter is emitted; appending one is the framing layer's
/// job.
///
/// Encoding an empty payload still produces one code byte, `{0x01}`.
pub fn encode(data: &[u8], out: &mut [u8]) -> Result<usize, Error> {
    let needed = max_encoded_len(data.len());
    if out.len() < needed {
        return Err(Error::OutputTooSmall {
            needed,
            available: out.len(),
        });
    }

    // `code_slot` is the index reserved for the open block's code byte,
    // `cursor` the next literal position, `code` the running block length.
    let mut code_slot = 0;
    let mut cursor = 1;
    let mut code: u8 = 1;

    for (i, &byte) in data.iter().enumerate() {
        if byte != DELIMITER {
            out[cursor] = byte;
            cursor += 1;
            code += 1;
        }

        if byte == DELIMITER || code == MAX_CODE {
            trace!("close block at {code_slot}, code {code:#04x}");
            out[code_slot] = code;
            code = 1;
            code_slot = cursor;
            // A maximal block ending exactly at end of input leaves no
            // block open, so no new code slot is reserved for it.
            if byte == DELIMITER || i + 1 < data.len() {
                cursor += 1;
            }
        }
    }

    if code_slot < cursor {
        trace!("final block at {code_slot}, code {code:#04x}");
        out[code_slot] = code;
    }

    Ok(cursor)
}
