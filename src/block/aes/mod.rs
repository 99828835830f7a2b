//! AES-128 block cipher
//!
//! From-scratch implementation of the Rijndael cipher as specified in
//! FIPS 197, restricted to 128-bit keys: table-driven S-box, word-oriented
//! key expansion, and the ten-round SP structure over a 4x4 byte state.
//!
//! The state is kept as a flat `[u8; 16]` in the standard column-major
//! mapping: column `c`, row `r` lives at index `4*c + r`.
//!
//! This is a teaching-grade reference. It is functionally exact but makes
//! no constant-time claims: the S-box lookups and the GF(2^8) multiply are
//! data-dependent in timing.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Error, Result};
use crate::types::{Aes128Key, KeyMaterial};
use rand::{CryptoRng, RngCore};

mod tables;
use tables::{INV_S_BOX, S_BOX};

#[cfg(test)]
mod tests;

/// Number of rounds for a 128-bit key
const ROUNDS: usize = 10;

/// Round constants for key expansion, `rc(i)` in the high byte
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000,
    0x80000000, 0x1b000000, 0x36000000,
];

/// Multiply two bytes in GF(2^8) with AES's reduction poly x^8 + x^4 + x^3 + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        if b & 1 != 0 {
            p ^= a;
        }
        let hi = a & 0x80;
        a <<= 1;
        if hi != 0 {
            // reduce by the field polynomial
            a ^= 0x1B;
        }
        b >>= 1;
    }
    p
}

/// Rotate a key-schedule word left by one byte
#[inline(always)]
fn rotate_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Substitute each byte of a key-schedule word through the S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let bytes = word.to_be_bytes();
    u32::from_be_bytes([
        S_BOX[bytes[0] as usize],
        S_BOX[bytes[1] as usize],
        S_BOX[bytes[2] as usize],
        S_BOX[bytes[3] as usize],
    ])
}

/// AES-128 block cipher
///
/// Holds the full precomputed round-key schedule; the schedule is derived
/// once at construction and immutable afterwards, so block operations are
/// stateless and safe to share across threads.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    /// Round keys 0..=10, round 0 being the raw key
    round_keys: [[u8; 16]; 11],
}

// Round keys never appear in debug output
impl fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes128([REDACTED])")
    }
}

impl CipherAlgorithm for Aes128 {
    const KEY_SIZE: usize = 16;
    const BLOCK_SIZE: usize = 16;

    fn name() -> &'static str {
        "AES-128"
    }
}

impl Aes128 {
    /// Create a cipher from key material
    ///
    /// The key length is validated here, once; any size other than 16 bytes
    /// fails with [`Error::UnsupportedKeySize`] and no cipher exists.
    pub fn new(key: &impl KeyMaterial) -> Result<Self> {
        if key.len() != Self::KEY_SIZE {
            return Err(Error::UnsupportedKeySize(key.len()));
        }

        Ok(Aes128 {
            round_keys: Self::expand_key(key.as_bytes()),
        })
    }

    /// Generate a random AES-128 key
    pub fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Aes128Key {
        Aes128Key::random(rng)
    }

    /// Rijndael key expansion: 16 key bytes to 11 round keys
    ///
    /// Round 0 is the raw key; each later word is the previous word (rotated,
    /// substituted, and Rcon-mixed on 4-word boundaries) XOR the word four
    /// positions back.
    fn expand_key(key: &[u8]) -> [[u8; 16]; 11] {
        let mut words = [0u32; 44];

        for i in 0..4 {
            words[i] = u32::from_be_bytes([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]]);
        }

        for i in 4..44 {
            let mut temp = words[i - 1];
            if i % 4 == 0 {
                temp = sub_word(rotate_word(temp)) ^ RCON[i / 4];
            }
            words[i] = words[i - 4] ^ temp;
        }

        let mut round_keys = [[0u8; 16]; 11];
        for (round, chunk) in words.chunks_exact(4).enumerate() {
            for (w, word) in chunk.iter().enumerate() {
                round_keys[round][4 * w..4 * w + 4].copy_from_slice(&word.to_be_bytes());
            }
        }
        round_keys
    }

    /// SubBytes: replace each state byte through the S-box
    fn sub_bytes(state: &mut [u8; 16]) {
        for byte in state.iter_mut() {
            *byte = S_BOX[*byte as usize];
        }
    }

    /// InvSubBytes: replace each state byte through the inverse S-box
    fn inv_sub_bytes(state: &mut [u8; 16]) {
        for byte in state.iter_mut() {
            *byte = INV_S_BOX[*byte as usize];
        }
    }

    /// ShiftRows: rotate row `r` left by `r` positions
    fn shift_rows(state: &mut [u8; 16]) {
        let mut temp = [0u8; 16];
        temp.copy_from_slice(state);
        for c in 0..4 {
            for r in 0..4 {
                state[4 * c + r] = temp[4 * ((c + r) % 4) + r];
            }
        }
    }

    /// InvShiftRows: rotate row `r` right by `r` positions
    fn inv_shift_rows(state: &mut [u8; 16]) {
        let mut temp = [0u8; 16];
        temp.copy_from_slice(state);
        for c in 0..4 {
            for r in 0..4 {
                state[4 * ((c + r) % 4) + r] = temp[4 * c + r];
            }
        }
    }

    /// MixColumns: multiply each column by the fixed {2,3,1,1} circulant
    fn mix_columns(state: &mut [u8; 16]) {
        for c in 0..4 {
            let i = 4 * c;
            let (s0, s1, s2, s3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
            state[i] = gf_mul(0x02, s0) ^ gf_mul(0x03, s1) ^ s2 ^ s3;
            state[i + 1] = s0 ^ gf_mul(0x02, s1) ^ gf_mul(0x03, s2) ^ s3;
            state[i + 2] = s0 ^ s1 ^ gf_mul(0x02, s2) ^ gf_mul(0x03, s3);
            state[i + 3] = gf_mul(0x03, s0) ^ s1 ^ s2 ^ gf_mul(0x02, s3);
        }
    }

    /// InvMixColumns: multiply each column by the {14,11,13,9} circulant
    fn inv_mix_columns(state: &mut [u8; 16]) {
        for c in 0..4 {
            let i = 4 * c;
            let (s0, s1, s2, s3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
            state[i] = gf_mul(0x0e, s0) ^ gf_mul(0x0b, s1) ^ gf_mul(0x0d, s2) ^ gf_mul(0x09, s3);
            state[i + 1] = gf_mul(0x09, s0) ^ gf_mul(0x0e, s1) ^ gf_mul(0x0b, s2) ^ gf_mul(0x0d, s3);
            state[i + 2] = gf_mul(0x0d, s0) ^ gf_mul(0x09, s1) ^ gf_mul(0x0e, s2) ^ gf_mul(0x0b, s3);
            state[i + 3] = gf_mul(0x0b, s0) ^ gf_mul(0x0d, s1) ^ gf_mul(0x09, s2) ^ gf_mul(0x0e, s3);
        }
    }

    /// AddRoundKey: XOR the state with one round key (self-inverse)
    fn add_round_key(state: &mut [u8; 16], round_key: &[u8; 16]) {
        for i in 0..16 {
            state[i] ^= round_key[i];
        }
    }
}

impl BlockCipher for Aes128 {
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), Self::BLOCK_SIZE)?;

        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        // Round 0 is AddRoundKey only
        Self::add_round_key(&mut state, &self.round_keys[0]);

        for round in 1..ROUNDS {
            Self::sub_bytes(&mut state);
            Self::shift_rows(&mut state);
            Self::mix_columns(&mut state);
            Self::add_round_key(&mut state, &self.round_keys[round]);
        }

        // Final round skips MixColumns
        Self::sub_bytes(&mut state);
        Self::shift_rows(&mut state);
        Self::add_round_key(&mut state, &self.round_keys[ROUNDS]);

        block.copy_from_slice(&state);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), Self::BLOCK_SIZE)?;

        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        // Mirror of encryption, run in reverse round order
        Self::add_round_key(&mut state, &self.round_keys[ROUNDS]);

        for round in (1..ROUNDS).rev() {
            Self::inv_shift_rows(&mut state);
            Self::inv_sub_bytes(&mut state);
            Self::add_round_key(&mut state, &self.round_keys[round]);
            Self::inv_mix_columns(&mut state);
        }

        Self::inv_shift_rows(&mut state);
        Self::inv_sub_bytes(&mut state);
        Self::add_round_key(&mut state, &self.round_keys[0]);

        block.copy_from_slice(&state);
        Ok(())
    }
}
