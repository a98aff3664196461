//! DEAL's key schedule: each round key is a DES encryption, under a fixed
//! seed key, of the previous round key XORed with a rotating slice of the
//! master key and (once the master key's blocks are exhausted) a round
//! constant.
//!
//! Grounded on `examples/original_source/internal/ciphers/deal/key_expansion.go`.

use crate::cipher::BlockCipher;
use crate::des::DesCipher;
use crate::error::{Error, Result};
use crate::feistel::KeySchedule;

const FIXED_SEED_KEY: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

pub struct DealKeySchedule {
    round_keys: Vec<Vec<u8>>,
}

/// `C(b)`: an 8-byte value with a single bit set at bit `b` of the key.
fn round_constant(b: usize) -> [u8; 8] {
    let mut c = [0u8; 8];
    let byte_idx = b / 8;
    if byte_idx < 8 {
        c[byte_idx] = 1 << (b % 8);
    }
    c
}

impl DealKeySchedule {
    pub fn new(key: &[u8]) -> Result<Self> {
        if ![16, 24, 32].contains(&key.len()) {
            return Err(Error::Config {
                reason: format!("DEAL key must be 16, 24, or 32 bytes, got {}", key.len()),
            });
        }

        let m = key.len() / 8;
        let n = if key.len() <= 24 { 6 } else { 8 };
        let blocks: Vec<&[u8]> = (0..m).map(|i| &key[i * 8..(i + 1) * 8]).collect();

        let seed_cipher = DesCipher::with_key(&FIXED_SEED_KEY)?;
        let mut prev = [0u8; 8];
        let mut round_keys = Vec::with_capacity(n);

        for r in 0..n {
            let mut x = [0u8; 8];
            for i in 0..8 {
                x[i] = blocks[r % m][i] ^ prev[i];
            }
            if r >= m {
                let rc = round_constant(r - m + 1);
                for i in 0..8 {
                    x[i] ^= rc[i];
                }
            }
            let rk = seed_cipher.encrypt_block(&x)?;
            prev.copy_from_slice(&rk);
            round_keys.push(rk);
        }

        Ok(Self { round_keys })
    }
}

impl KeySchedule for DealKeySchedule {
    fn num_rounds(&self) -> usize {
        self.round_keys.len()
    }

    fn round_key(&self, i: usize) -> &[u8] {
        &self.round_keys[i]
    }
}
