//! CBC padding oracle and the plaintext-recovery attack against it
//!
//! A padding oracle is any system that decrypts attacker-supplied CBC
//! ciphertext and reveals nothing except whether the padding validated,
//! such as a web server rejecting a tampered cookie. That single bit per
//! query is enough to recover the full plaintext without the key;
//! [`attack::recover_plaintext`] does exactly that.

use crate::block::{Aes128, Cbc};
use crate::error::Result;
use crate::types::KeyMaterial;

pub mod attack;

pub use attack::recover_plaintext;


/// Capability exposed by a padding-validation oracle
///
/// Exactly one operation, returning a binary result. Implementations must
/// leak nothing beyond success/failure: no plaintext, no distinction
/// between failure modes. The attack works against any conforming
/// implementor, including mocks.
pub trait PaddingOracle {
    /// Decrypt `ciphertext` (laid out `IV ‖ blocks`) under the oracle's
    /// private key and report only whether padding validated
    fn try_decrypt(&self, ciphertext: &[u8]) -> bool;
}

/// A padding oracle backed by AES-128-CBC with a private key
///
/// Stands in for the vulnerable server: it decrypts whatever it is handed
/// and answers yes or no. The key never leaves the oracle.
pub struct CbcPaddingOracle {
    cbc: Cbc<Aes128>,
}

impl CbcPaddingOracle {
    /// Create an oracle holding the given key
    pub fn new(key: &impl KeyMaterial) -> Result<Self> {
        Ok(Self {
            cbc: Cbc::new(Aes128::new(key)?),
        })
    }
}

impl PaddingOracle for CbcPaddingOracle {
    fn try_decrypt(&self, ciphertext: &[u8]) -> bool {
        // every failure mode collapses into the same boolean; the caller
        // cannot tell malformed input from bad padding
        self.cbc.decrypt(ciphertext).is_ok()
    }
}
