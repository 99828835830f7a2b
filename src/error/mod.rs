//! Error handling for the cipher, mode, and attack layers

use thiserror::Error;

/// The error type shared by every fallible operation in this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Key material of a size the cipher does not support was supplied at
    /// construction. No cipher instance exists after this error.
    #[error("unsupported key size: {0} bytes (only 16-byte keys are accepted)")]
    UnsupportedKeySize(usize),

    /// A buffer violated an exact-length contract (block, IV, nonce, or
    /// ciphertext alignment).
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A mode decrypt call received fewer bytes than its layout can carry.
    #[error("ciphertext too short for {mode}: {actual} bytes, need at least {min}")]
    CiphertextTooShort {
        /// Mode whose layout was violated
        mode: &'static str,
        /// Actual ciphertext length in bytes
        actual: usize,
        /// Minimum length the layout requires
        min: usize,
    },

    /// Decrypted padding failed validation. Corrupted ciphertext, a wrong
    /// key, and a forged block are indistinguishable here; this single bit
    /// is all a padding oracle ever leaks.
    #[error("invalid padding")]
    InvalidPadding,

    /// The oracle rejected every candidate byte at one position, so the
    /// ciphertext cannot have been produced under the oracle's key.
    #[error("padding oracle rejected all 256 candidates at position {position}")]
    OracleExhausted {
        /// Byte position within the block under attack (0..16)
        position: usize,
    },
}

/// Result type for all operations in this crate
pub type Result<T> = core::result::Result<T, Error>;

pub mod validate;
