//! The DES block cipher proper: initial permutation, 16-round Feistel network,
//! final permutation wired together.
//!
//! Grounded on `examples/original_source/internal/ciphers/des/des.go` and, for
//! the trait shape, `examples/dennisss-dacha/pkg/crypto/src/des.rs`'s
//! `DESBlockCipher`.

use tracing::debug;

use crate::cipher::BlockCipher;
use crate::des::key_schedule::DesKeySchedule;
use crate::des::round_function::DesRoundFunction;
use crate::des::tables::{IP, IP_INV};
use crate::error::{Error, Result};
use crate::feistel;

/// Block size is fixed at 8 bytes regardless of whether a key is installed;
/// DES has no variable block size, so `block_size()` never needs a key to answer.
pub struct DesCipher {
    schedule: Option<DesKeySchedule>,
}

impl DesCipher {
    pub fn new() -> Self {
        Self { schedule: None }
    }

    pub fn with_key(key: &[u8]) -> Result<Self> {
        let mut cipher = Self::new();
        cipher.set_key(key)?;
        Ok(cipher)
    }
}

impl Default for DesCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for DesCipher {
    fn block_size(&self) -> usize {
        8
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.schedule = Some(DesKeySchedule::new(key)?);
        debug!(cipher = "DES", block_size = 8, "key installed");
        Ok(())
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        let schedule = self.schedule.as_ref().ok_or(Error::NotKeyed { cipher: "DES" })?;
        if block.len() != 8 {
            return Err(Error::BlockSize {
                expected: 8,
                actual: block.len(),
            });
        }
        let f = DesRoundFunction;
        let permuted = crate::bits::permute(block, &IP, true, true)?;
        let rounds = feistel::encrypt_rounds(&f, schedule, &permuted)?;
        crate::bits::permute(&rounds, &IP_INV, true, true)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        let schedule = self.schedule.as_ref().ok_or(Error::NotKeyed { cipher: "DES" })?;
        if block.len() != 8 {
            return Err(Error::BlockSize {
                expected: 8,
                actual: block.len(),
            });
        }
        let f = DesRoundFunction;
        let permuted = crate::bits::permute(block, &IP, true, true)?;
        let rounds = feistel::decrypt_rounds(&f, schedule, &permuted)?;
        crate::bits::permute(&rounds, &IP_INV, true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // E1: FIPS 46-3 worked example.
    #[test]
    fn known_answer_vector_e1() {
        let key = hex!("133457799BBCDFF1");
        let pt = hex!("0123456789ABCDEF");
        let expected_ct = hex!("85E813540F0AB405");

        let cipher = DesCipher::with_key(&key).unwrap();
        let ct = cipher.encrypt_block(&pt).unwrap();
        assert_eq!(ct, expected_ct);
        assert_eq!(cipher.decrypt_block(&ct).unwrap(), pt);
    }

    #[test]
    fn second_known_vector() {
        let key = hex!("2321f2d0e092045c");
        let pt = hex!("75130b9657220950");
        let expected_ct = hex!("eb98476e4418713b");

        let cipher = DesCipher::with_key(&key).unwrap();
        assert_eq!(cipher.encrypt_block(&pt).unwrap(), expected_ct);
    }

    #[test]
    fn encrypt_before_set_key_fails() {
        let cipher = DesCipher::new();
        assert!(matches!(
            cipher.encrypt_block(&[0u8; 8]),
            Err(Error::NotKeyed { .. })
        ));
    }

    #[test]
    fn rejects_wrong_key_size() {
        assert!(DesCipher::with_key(&[0u8; 7]).is_err());
    }
}
