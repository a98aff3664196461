//! A from-scratch symmetric block-cipher construction kit: a generic
//! bit-permutation primitive, a generic Feistel network engine, a
//! FIPS 46-3 DES built on it, a DES-based DEAL (128-bit block), and a
//! mode-of-operation layer (ECB/CBC/PCBC/CFB/OFB/CTR/RandomDelta) with four
//! padding schemes, wired together behind one [`context::CipherContext`].
//!
//! Not in scope: authenticated encryption, key agreement, constant-time
//! side-channel resistance, and cipher constructions beyond DES/DEAL.

pub mod bits;
pub mod cipher;
pub mod context;
pub mod deal;
pub mod des;
pub mod error;
pub mod feistel;
pub mod modes;
pub mod padding;
pub mod random;

pub use cipher::BlockCipher;
pub use context::{CipherContext, ModeConfig};
pub use deal::DealCipher;
pub use des::DesCipher;
pub use error::{Error, Result};
pub use modes::CipherMode;
pub use padding::PaddingMode;
pub use random::{OsRandomSource, RandomSource};
