//! Mode-of-operation layer: one strategy per [`CipherMode`],
//! dispatched from [`crate::context::CipherContext`].
//!
//! Grounded on `examples/original_source/internal/modes/modes_ch.go`'s
//! strategy dispatch, flattened from an interface-per-type into a single enum
//! match (idiomatic Rust doesn't reach for a trait object here when the set of
//! modes is closed and known at compile time).

mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod helpers;
mod ofb;
mod pcbc;
mod random_delta;

use crate::cipher::BlockCipher;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    Ecb,
    Cbc,
    Pcbc,
    Cfb,
    Ofb,
    Ctr,
    RandomDelta,
}

impl CipherMode {
    /// Whether this mode consumes an IV (as opposed to a nonce/seed pair).
    pub fn needs_iv(self) -> bool {
        matches!(
            self,
            CipherMode::Cbc | CipherMode::Pcbc | CipherMode::Cfb | CipherMode::Ofb
        )
    }
}

/// Parameters a mode may need beyond the cipher, data, and direction.
/// Unused fields for a given mode are simply ignored.
pub struct ModeParams<'a> {
    pub iv: &'a [u8],
    pub nonce: &'a [u8],
    pub seed: u64,
}

pub fn process(
    mode: CipherMode,
    cipher: &dyn BlockCipher,
    data: &[u8],
    params: &ModeParams,
    encrypt: bool,
) -> Result<Vec<u8>> {
    match mode {
        CipherMode::Ecb => ecb::process(cipher, data, encrypt),
        CipherMode::Cbc => cbc::process(cipher, data, params.iv, encrypt),
        CipherMode::Pcbc => pcbc::process(cipher, data, params.iv, encrypt),
        CipherMode::Cfb => cfb::process(cipher, data, params.iv, encrypt),
        CipherMode::Ofb => ofb::process(cipher, data, params.iv, encrypt),
        CipherMode::Ctr => ctr::process(cipher, data, params.nonce, encrypt),
        CipherMode::RandomDelta => {
            random_delta::process(cipher, data, params.nonce, params.seed, encrypt)
        }
    }
}
