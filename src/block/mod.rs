//! Block cipher engine and modes of operation

use crate::error::Result;

pub mod aes;
pub mod modes;

pub use aes::Aes128;
pub use modes::{Cbc, Ctr, Ecb};

/// Compile-time constants describing a block cipher algorithm
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;

    /// Block size in bytes, as a runtime value
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }

    /// Key size in bytes, as a runtime value
    fn key_size() -> usize {
        Self::KEY_SIZE
    }
}

/// A keyed block cipher operating in place on single blocks
///
/// Both operations are total over all `BLOCK_SIZE`-byte inputs; the only
/// error condition at this layer is a slice of the wrong length.
pub trait BlockCipher: CipherAlgorithm {
    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}
