//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the IV. The ciphertext layout
//! is `IV ‖ blocks`, so the IV travels with the message and decryption
//! reads it from the ciphertext itself.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::padding;
use crate::types::Iv;

/// CBC mode over a block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Cbc<B> {
    /// Create a CBC mode instance over the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Pad and encrypt a message, chaining from `iv`
    ///
    /// Returns `IV ‖ chained ciphertext blocks`. The IV must match the
    /// cipher's block size; `Iv` guarantees 16 bytes, which is validated
    /// against `B` at runtime.
    pub fn encrypt(&self, plaintext: &[u8], iv: &Iv) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::length("CBC initialization vector", iv.as_ref().len(), block_size)?;

        let mut padded = Zeroizing::new(padding::pad(plaintext));

        let mut ciphertext = Vec::with_capacity(block_size + padded.len());
        ciphertext.extend_from_slice(iv.as_ref());

        let mut prev = [0u8; 16];
        prev.copy_from_slice(iv.as_ref());

        for block in padded.chunks_exact_mut(block_size) {
            for (b, p) in block.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
            self.cipher.encrypt_block(block)?;
            ciphertext.extend_from_slice(block);
            prev.copy_from_slice(block);
        }

        Ok(ciphertext)
    }

    /// Decrypt an `IV ‖ blocks` message and strip its padding
    ///
    /// Requires at least 32 bytes (IV plus one block) and 16-byte
    /// alignment. [`Error::InvalidPadding`](crate::Error::InvalidPadding)
    /// from the final unpadding step is the one observable signal a
    /// padding oracle narrows to a boolean.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::ciphertext_len("CBC", ciphertext.len(), 2 * block_size)?;
        validate::block_aligned("CBC ciphertext", ciphertext.len(), block_size)?;

        let (iv, body) = ciphertext.split_at(block_size);

        let mut plaintext = Zeroizing::new(Vec::with_capacity(body.len()));
        let mut prev = [0u8; 16];
        prev.copy_from_slice(iv);

        for chunk in body.chunks_exact(block_size) {
            let mut block = [0u8; 16];
            block.copy_from_slice(chunk);

            self.cipher.decrypt_block(&mut block)?;
            for (b, p) in block.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }

            plaintext.extend_from_slice(&block);
            prev.copy_from_slice(chunk);
        }

        padding::remove_padding(&plaintext)
    }
}
