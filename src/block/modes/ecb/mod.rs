//! Electronic Codebook (ECB) mode
//!
//! Each padded plaintext block is encrypted independently; identical
//! plaintext blocks yield identical ciphertext blocks, which is the mode's
//! well-known weakness. Provided as the baseline composition of the block
//! engine and the padding scheme.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::padding;

/// ECB mode over a block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Ecb<B> {
    /// Create an ECB mode instance over the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Pad and encrypt a message
    ///
    /// Output length is the padded length: always a multiple of the block
    /// size and always strictly longer than the plaintext.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = padding::pad(plaintext);
        for block in ciphertext.chunks_exact_mut(B::block_size()) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(ciphertext)
    }

    /// Decrypt a message and strip its padding
    ///
    /// The ciphertext must be a non-empty multiple of the block size. A
    /// padding failure fails the whole call; with no chaining there is
    /// nothing to salvage.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::ciphertext_len("ECB", ciphertext.len(), block_size)?;
        validate::block_aligned("ECB ciphertext", ciphertext.len(), block_size)?;

        let mut plaintext = Zeroizing::new(ciphertext.to_vec());
        for block in plaintext.chunks_exact_mut(block_size) {
            self.cipher.decrypt_block(block)?;
        }
        padding::remove_padding(&plaintext)
    }
}
