//! Mode-selecting facade over the AES-128 engine
//!
//! The convenience surface mirrors how the cipher is actually consumed:
//! pick a mode, hand over bytes, get bytes back. Fresh random IVs/nonces
//! come from the operating system RNG; deterministic callers (tests,
//! fixtures) can supply their own.

use rand::rngs::OsRng;

use crate::block::{Aes128, Cbc, Ctr, Ecb};
use crate::error::Result;
use crate::types::{Iv, KeyMaterial};

/// Mode of operation selector
///
/// An enum rather than a string or integer: an unrecognized mode is
/// unrepresentable, so no "invalid mode" error exists at this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Electronic codebook; blocks encrypted independently
    Ecb,
    /// Cipher block chaining; ciphertext laid out `IV ‖ blocks`
    Cbc,
    /// Counter mode; ciphertext laid out `nonce ‖ body`, no padding
    Ctr,
}

/// AES-128 with selectable mode of operation
#[derive(Debug)]
pub struct Aes {
    engine: Aes128,
}

impl Aes {
    /// Create a cipher from key material
    ///
    /// Fails with [`Error::UnsupportedKeySize`](crate::Error::UnsupportedKeySize)
    /// for anything but a 16-byte key.
    pub fn new(key: &impl KeyMaterial) -> Result<Self> {
        Ok(Self {
            engine: Aes128::new(key)?,
        })
    }

    /// Encrypt a message, drawing a fresh IV/nonce from the system RNG
    ///
    /// ECB takes no IV; for CBC and CTR the generated value is the first
    /// 16 bytes of the returned ciphertext.
    pub fn encrypt(&self, mode: Mode, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_with_iv(mode, plaintext, &Iv::random(&mut OsRng))
    }

    /// Encrypt a message with a caller-chosen IV/nonce (ignored for ECB)
    pub fn encrypt_with_iv(&self, mode: Mode, plaintext: &[u8], iv: &Iv) -> Result<Vec<u8>> {
        match mode {
            Mode::Ecb => Ecb::new(self.engine.clone()).encrypt(plaintext),
            Mode::Cbc => Cbc::new(self.engine.clone()).encrypt(plaintext, iv),
            Mode::Ctr => Ctr::new(self.engine.clone()).encrypt(plaintext, iv),
        }
    }

    /// Decrypt a message produced by [`Aes::encrypt`] under the same mode
    pub fn decrypt(&self, mode: Mode, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match mode {
            Mode::Ecb => Ecb::new(self.engine.clone()).decrypt(ciphertext),
            Mode::Cbc => Cbc::new(self.engine.clone()).decrypt(ciphertext),
            Mode::Ctr => Ctr::new(self.engine.clone()).decrypt(ciphertext),
        }
    }
}
