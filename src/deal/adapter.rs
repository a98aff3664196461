//! Adapts a full DES encryption into DEAL's Feistel round function.
//!
//! Grounded on `examples/original_source/internal/ciphers/deal/adapter.go`,
//! which keys a fresh DES instance per round key. A DEAL round key only ever
//! takes on one of `num_rounds` (6 or 8) distinct values for the lifetime of
//! a keyed cipher, so this keys one [`DesCipher`] per round up front, at
//! schedule-construction time, instead of lazily behind interior mutability:
//! a `RefCell` would make `DealRoundFunction` (and so `DealCipher`) `!Sync`,
//! which would disqualify DEAL from every parallelisable mode.

use crate::cipher::BlockCipher;
use crate::des::DesCipher;
use crate::error::Result;
use crate::feistel::{KeySchedule, RoundFunction};

pub struct DealRoundFunction {
    /// `(round key bytes, DES cipher keyed under them)`, one entry per round.
    round_ciphers: Vec<(Vec<u8>, DesCipher)>,
}

impl DealRoundFunction {
    pub fn new() -> Self {
        Self {
            round_ciphers: Vec::new(),
        }
    }

    /// Keys one [`DesCipher`] per round key in `schedule`, eagerly.
    pub fn from_schedule(schedule: &dyn KeySchedule) -> Result<Self> {
        let mut round_ciphers = Vec::with_capacity(schedule.num_rounds());
        for i in 0..schedule.num_rounds() {
            let round_key = schedule.round_key(i);
            round_ciphers.push((round_key.to_vec(), DesCipher::with_key(round_key)?));
        }
        Ok(Self { round_ciphers })
    }
}

impl Default for DealRoundFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundFunction for DealRoundFunction {
    fn half_size(&self) -> usize {
        8
    }

    fn apply(&self, half: &[u8], round_key: &[u8]) -> Result<Vec<u8>> {
        let (_, cipher) = self
            .round_ciphers
            .iter()
            .find(|(key, _)| key == round_key)
            .expect("round key belongs to this cipher's own schedule");
        cipher.encrypt_block(half)
    }
}
