//! PKCS#7-style byte padding for the 16-byte block modes
//!
//! Padding is always applied: each padding byte's value equals the padding
//! run length (1..=16), and a block-aligned message gains one extra full
//! block of `0x10`. The run length is therefore never zero, which is what
//! makes removal unambiguous.
//!
//! [`remove_padding`] validates the whole trailing run rather than trusting
//! the length byte. A forged block almost always fails one of these checks;
//! the rare coincidence where it does not is exactly the false positive the
//! padding-oracle attack has to disambiguate.

use crate::error::{validate, Error, Result};

/// Block size the padding scheme is defined over
const BLOCK_SIZE: usize = 16;

/// Pad the final (possibly empty or full) block of a message
///
/// Returns 16 bytes for a partial block, or 32 bytes when `last_block` is
/// already full. A slice longer than one block is a caller error.
pub fn add_padding(last_block: &[u8]) -> Result<Vec<u8>> {
    if last_block.len() > BLOCK_SIZE {
        return Err(Error::Length {
            context: "padding input block",
            expected: BLOCK_SIZE,
            actual: last_block.len(),
        });
    }

    let n = BLOCK_SIZE - last_block.len();
    let mut padded = last_block.to_vec();
    if n == 0 {
        // already aligned: a whole extra block of 0x10
        padded.extend_from_slice(&[BLOCK_SIZE as u8; BLOCK_SIZE]);
    } else {
        padded.resize(BLOCK_SIZE, n as u8);
    }
    Ok(padded)
}

/// Pad a whole message up to the next block boundary
///
/// Convenience over [`add_padding`]: the aligned head is kept as-is and the
/// tail (empty for aligned messages) is padded.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let split = message.len() - message.len() % BLOCK_SIZE;
    let mut padded = message[..split].to_vec();
    // the tail is at most 15 bytes, add_padding cannot fail on it
    padded.extend_from_slice(&add_padding(&message[split..]).expect("tail shorter than a block"));
    padded
}

/// Strip and validate padding from a decrypted buffer
///
/// The buffer must be a non-empty multiple of 16 bytes. The trailing byte
/// `p` must be in 1..=16 and the last `p` bytes must all equal `p`;
/// anything else is [`Error::InvalidPadding`].
pub fn remove_padding(buffer: &[u8]) -> Result<Vec<u8>> {
    validate::min_length("padded buffer", buffer.len(), BLOCK_SIZE)?;
    validate::block_aligned("padded buffer", buffer.len(), BLOCK_SIZE)?;

    let p = buffer[buffer.len() - 1] as usize;
    if p == 0 || p > BLOCK_SIZE {
        return Err(Error::InvalidPadding);
    }

    let start = buffer.len() - p;
    if buffer[start..].iter().any(|&b| b as usize != p) {
        return Err(Error::InvalidPadding);
    }

    Ok(buffer[..start].to_vec())
}

#[cfg(test)]
mod tests;
