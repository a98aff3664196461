//! The DEAL block cipher: a 128-bit-block Feistel network whose round
//! function is full DES encryption.
//!
//! Grounded on `examples/original_source/internal/ciphers/deal/deal.go`.

use tracing::debug;

use crate::cipher::BlockCipher;
use crate::deal::adapter::DealRoundFunction;
use crate::deal::key_schedule::DealKeySchedule;
use crate::error::{Error, Result};
use crate::feistel;

pub struct DealCipher {
    schedule: Option<DealKeySchedule>,
    round_fn: DealRoundFunction,
}

impl DealCipher {
    pub fn new() -> Self {
        Self {
            schedule: None,
            round_fn: DealRoundFunction::new(),
        }
    }

    pub fn with_key(key: &[u8]) -> Result<Self> {
        let mut cipher = Self::new();
        cipher.set_key(key)?;
        Ok(cipher)
    }
}

impl Default for DealCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for DealCipher {
    fn block_size(&self) -> usize {
        16
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        let schedule = DealKeySchedule::new(key)?;
        self.round_fn = DealRoundFunction::from_schedule(&schedule)?;
        self.schedule = Some(schedule);
        debug!(cipher = "DEAL", block_size = 16, "key installed");
        Ok(())
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        let schedule = self
            .schedule
            .as_ref()
            .ok_or(Error::NotKeyed { cipher: "DEAL" })?;
        if block.len() != 16 {
            return Err(Error::BlockSize {
                expected: 16,
                actual: block.len(),
            });
        }
        feistel::encrypt_rounds(&self.round_fn, schedule, block)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        let schedule = self
            .schedule
            .as_ref()
            .ok_or(Error::NotKeyed { cipher: "DEAL" })?;
        if block.len() != 16 {
            return Err(Error::BlockSize {
                expected: 16,
                actual: block.len(),
            });
        }
        feistel::decrypt_rounds(&self.round_fn, schedule, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // E6
    #[test]
    fn deal_round_trips_and_is_deterministic() {
        let key = [
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ];
        let pt = b"Hello world!!!!!";
        let cipher = DealCipher::with_key(&key).unwrap();

        let ct1 = cipher.encrypt_block(pt).unwrap();
        let ct2 = cipher.encrypt_block(pt).unwrap();
        assert_eq!(ct1, ct2, "DEAL encryption must be deterministic");

        let pt_back = cipher.decrypt_block(&ct1).unwrap();
        assert_eq!(pt_back, pt);
    }

    #[test]
    fn encrypt_before_set_key_fails() {
        let cipher = DealCipher::new();
        assert!(matches!(
            cipher.encrypt_block(&[0u8; 16]),
            Err(Error::NotKeyed { .. })
        ));
    }
}
