//! Teaching-grade AES-128 with modes of operation and a padding-oracle attack
//!
//! This crate is a from-scratch, byte-exact implementation of the Rijndael
//! cipher (128-bit keys only) together with the ECB, CBC, and CTR modes of
//! operation and a working demonstration of the CBC padding-oracle attack:
//! given nothing but a yes/no padding-validity oracle, the attack recovers
//! full plaintexts without the key.
//!
//! # Layers
//!
//! - [`block::Aes128`]: the block cipher engine (state transforms, key
//!   schedule, ten-round structure), validated against the FIPS 197
//!   appendix vectors.
//! - [`padding`]: PKCS#7-style padding with strict validation on removal.
//! - [`block::modes`]: ECB, CBC, and CTR compositions of the engine.
//! - [`oracle`]: the [`oracle::PaddingOracle`] capability and the
//!   byte-at-a-time recovery attack against CBC.
//! - [`cipher::Aes`]: a mode-selecting facade for whole-message use.
//!
//! # Security
//!
//! This is a reference implementation for studying the algorithms and the
//! attack. It is functionally correct but deliberately not hardened:
//! table lookups and field multiplications run in data-dependent time.
//! Do not protect real data with it.
//!
//! ```
//! use aes_oracle::{Aes, Aes128Key, CbcPaddingOracle, Mode, oracle};
//! use rand::rngs::OsRng;
//!
//! let key = Aes128Key::random(&mut OsRng);
//! let aes = Aes::new(&key)?;
//! let ciphertext = aes.encrypt(Mode::Cbc, b"attack at dawn")?;
//!
//! // the attacker sees only a boolean per query, yet recovers the message
//! let server = CbcPaddingOracle::new(&key)?;
//! let recovered = oracle::recover_plaintext(&server, &ciphertext)?;
//! assert_eq!(recovered, b"attack at dawn");
//! # Ok::<(), aes_oracle::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::{validate, Error, Result};

pub mod types;
pub use types::{Aes128Key, Iv, KeyMaterial, Nonce};

pub mod block;
pub use block::{Aes128, BlockCipher, Cbc, CipherAlgorithm, Ctr, Ecb};

pub mod padding;
pub use padding::{add_padding, remove_padding};

pub mod oracle;
pub use oracle::{recover_plaintext, CbcPaddingOracle, PaddingOracle};

mod cipher;
pub use cipher::{Aes, Mode};
