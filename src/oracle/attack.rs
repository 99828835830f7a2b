//! Byte-at-a-time CBC plaintext recovery through a padding oracle
//!
//! For every ciphertext block `C`, CBC decryption computes
//! `P = D(C) XOR C_prev`. The attack forges `C_prev` so that the oracle's
//! padding check tells it, one byte at a time, what the intermediate value
//! `D(C)` is; XORing against the *real* previous block then yields the
//! plaintext. No byte is ever guessed: each is pinned down by oracle
//! answers alone.

use crate::error::{validate, Error, Result};
use crate::padding;

use super::PaddingOracle;

/// Block size of the attacked ciphertext
const BLOCK_SIZE: usize = 16;

/// Recover the plaintext of `ciphertext` (laid out `IV ‖ blocks`) using
/// only the oracle's yes/no padding answers
///
/// Blocks are attacked independently, last to first; within a block, byte
/// positions go 15 down to 0. The scheme's own padding is stripped from
/// the result, so the caller receives the original message.
pub fn recover_plaintext<O: PaddingOracle + ?Sized>(
    oracle: &O,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    validate::ciphertext_len("oracle attack", ciphertext.len(), 2 * BLOCK_SIZE)?;
    validate::block_aligned("attacked ciphertext", ciphertext.len(), BLOCK_SIZE)?;

    let blocks: Vec<&[u8]> = ciphertext.chunks_exact(BLOCK_SIZE).collect();
    let mut recovered = vec![0u8; ciphertext.len() - BLOCK_SIZE];

    // the IV (block 0) is never a target; it only chains into block 1
    for i in (1..blocks.len()).rev() {
        let target = blocks[i];
        let prev_real = blocks[i - 1];

        let intermediate = recover_block(oracle, prev_real, target)?;
        for z in 0..BLOCK_SIZE {
            recovered[(i - 1) * BLOCK_SIZE + z] = intermediate[z] ^ prev_real[z];
        }
    }

    padding::remove_padding(&recovered)
}

/// Recover the intermediate value `D(target)` for a single block
fn recover_block<O: PaddingOracle + ?Sized>(
    oracle: &O,
    prev_real: &[u8],
    target: &[u8],
) -> Result<[u8; 16]> {
    let mut intermediate = [0u8; 16];
    let mut forged = [0u8; 16];
    forged.copy_from_slice(prev_real);

    for z in (0..BLOCK_SIZE).rev() {
        let pad_value = (BLOCK_SIZE - z) as u8;

        // make every already-solved position decrypt to the new target
        // padding value, so a hit at `z` completes a run of `pad_value`s
        for x in z + 1..BLOCK_SIZE {
            forged[x] = intermediate[x] ^ pad_value;
        }

        let candidate = find_padding_byte(oracle, &mut forged, target, z)?;
        intermediate[z] = candidate ^ pad_value;
    }

    Ok(intermediate)
}

/// Search all 256 values for `forged[z]` until the oracle accepts one
fn find_padding_byte<O: PaddingOracle + ?Sized>(
    oracle: &O,
    forged: &mut [u8; 16],
    target: &[u8],
    z: usize,
) -> Result<u8> {
    let mut message = [0u8; 2 * BLOCK_SIZE];
    message[BLOCK_SIZE..].copy_from_slice(target);

    for candidate in 0..=255u8 {
        forged[z] = candidate;
        message[..BLOCK_SIZE].copy_from_slice(forged);

        if !oracle.try_decrypt(&message) {
            continue;
        }

        // A success at position 15 can be a false positive: the target
        // block may have decrypted to a longer valid run (e.g. ..02 02)
        // rather than true length-1 padding. Disturb byte 14 and re-ask;
        // real length-1 padding does not care about byte 14.
        if z == BLOCK_SIZE - 1 {
            message[BLOCK_SIZE - 2] ^= 0x01;
            let still_valid = oracle.try_decrypt(&message);
            message[BLOCK_SIZE - 2] ^= 0x01;
            if !still_valid {
                continue;
            }
        }

        return Ok(candidate);
    }

    Err(Error::OracleExhausted { position: z })
}
