//! Block cipher modes of operation
//!
//! ECB, CBC, and CTR over any [`BlockCipher`](super::BlockCipher). The
//! padded modes (ECB, CBC) apply the crate's padding scheme themselves;
//! CBC and CTR transport their IV/nonce as the first 16 bytes of the
//! ciphertext, so decryption needs nothing beyond the key.

pub mod cbc;
pub mod ctr;
pub mod ecb;

pub use cbc::Cbc;
pub use ctr::Ctr;
pub use ecb::Ecb;
