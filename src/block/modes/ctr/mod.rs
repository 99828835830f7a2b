//! Counter (CTR) mode
//!
//! The cipher encrypts successive counter values to produce a keystream
//! that is XORed with the data, turning the block cipher into a stream
//! cipher; no padding is applied and encryption and decryption are the
//! same operation. The ciphertext layout is `nonce ‖ body`.
//!
//! The whole 16-byte counter block increments as one big-endian integer,
//! starting from the nonce itself. On total overflow of all 16 bytes the
//! counter grows an extra high byte instead of wrapping, and the cipher
//! consumes the low-order 16 bytes of the widened value. Keystream reuse
//! after 2^128 blocks is thereby avoided, at the price of not being a
//! standard CTR counter.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::Iv;

/// CTR mode over a block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Ctr<B> {
    /// Create a CTR mode instance over the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Encrypt a message under the given nonce
    ///
    /// Returns `nonce ‖ body` where the body has exactly the plaintext's
    /// length.
    pub fn encrypt(&self, plaintext: &[u8], nonce: &Iv) -> Result<Vec<u8>> {
        validate::length("CTR nonce", nonce.as_ref().len(), B::block_size())?;

        let mut ciphertext = Vec::with_capacity(B::block_size() + plaintext.len());
        ciphertext.extend_from_slice(nonce.as_ref());
        ciphertext.extend_from_slice(&self.apply_keystream(nonce.as_ref(), plaintext)?);
        Ok(ciphertext)
    }

    /// Decrypt a `nonce ‖ body` message
    ///
    /// Requires strictly more than one block, since an empty body still
    /// carries its 16-byte nonce.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::ciphertext_len("CTR", ciphertext.len(), block_size + 1)?;

        let (nonce, body) = ciphertext.split_at(block_size);
        self.apply_keystream(nonce, body)
    }

    /// XOR `data` with the keystream generated from `counter_start`
    fn apply_keystream(&self, counter_start: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        let mut counter = Zeroizing::new(counter_start.to_vec());
        let mut output = Vec::with_capacity(data.len());

        for chunk in data.chunks(block_size) {
            let mut keystream = Zeroizing::new(vec![0u8; block_size]);
            keystream.copy_from_slice(&counter[counter.len() - block_size..]);
            self.cipher.encrypt_block(&mut keystream)?;

            for (byte, ks) in chunk.iter().zip(keystream.iter()) {
                output.push(byte ^ ks);
            }

            increment_counter(&mut counter);
        }

        Ok(output)
    }
}

/// Increment a big-endian counter, growing it by one byte on full overflow
fn increment_counter(counter: &mut Vec<u8>) {
    for byte in counter.iter_mut().rev() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            return;
        }
    }
    counter.insert(0, 0x01);
}

#[cfg(test)]
mod tests;
