//! Key material abstraction and the AES-128 key type
//!
//! The cipher engine consumes keys through the [`KeyMaterial`] capability
//! (raw bytes plus length) rather than a concrete struct, so a future
//! 192/256-bit variant is a new implementor, not an engine change.

use core::fmt;

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

/// Provider of raw symmetric key bytes
pub trait KeyMaterial {
    /// Raw key bytes
    fn as_bytes(&self) -> &[u8];

    /// Key length in bytes
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the key is empty (never true for a usable key)
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// 128-bit AES key, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key {
    material: [u8; 16],
}

impl Aes128Key {
    /// Size of the key in bytes
    pub const SIZE: usize = 16;

    /// Create a key from an existing array
    pub fn new(material: [u8; 16]) -> Self {
        Self { material }
    }

    /// Create a key from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("AES-128 key", slice.len(), Self::SIZE)?;

        let mut material = [0u8; 16];
        material.copy_from_slice(slice);
        Ok(Self { material })
    }

    /// Generate a random key
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut material = [0u8; 16];
        rng.fill_bytes(&mut material);
        Self { material }
    }
}

impl KeyMaterial for Aes128Key {
    fn as_bytes(&self) -> &[u8] {
        &self.material
    }
}

impl AsRef<[u8]> for Aes128Key {
    fn as_ref(&self) -> &[u8] {
        &self.material
    }
}

impl From<[u8; 16]> for Aes128Key {
    fn from(material: [u8; 16]) -> Self {
        Self::new(material)
    }
}

impl PartialEq for Aes128Key {
    fn eq(&self, other: &Self) -> bool {
        self.material.ct_eq(&other.material).into()
    }
}

impl Eq for Aes128Key {}

// Key bytes never appear in debug output
impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes128Key([REDACTED; 16])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn from_slice_validates_length() {
        assert!(Aes128Key::from_slice(&[0u8; 16]).is_ok());
        assert!(Aes128Key::from_slice(&[0u8; 15]).is_err());
        assert!(Aes128Key::from_slice(&[0u8; 24]).is_err());
        assert!(Aes128Key::from_slice(&[]).is_err());
    }

    #[test]
    fn capability_reports_raw_bytes() {
        let key = Aes128Key::new(*b"128bitsforkeysss");
        assert_eq!(key.as_bytes(), b"128bitsforkeysss");
        assert_eq!(KeyMaterial::len(&key), 16);
        assert!(!key.is_empty());
    }

    #[test]
    fn random_keys_differ() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let a = Aes128Key::random(&mut rng);
        let b = Aes128Key::random(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn debug_never_prints_material() {
        let key = Aes128Key::new([0xAB; 16]);
        let printed = format!("{key:?}");
        assert!(!printed.contains("ab"));
        assert!(!printed.contains("171"));
    }
}
