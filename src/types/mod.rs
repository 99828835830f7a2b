//! Typed wrappers for key material and initialization vectors

pub mod key;
pub mod nonce;

pub use key::{Aes128Key, KeyMaterial};
pub use nonce::{Iv, Nonce};
