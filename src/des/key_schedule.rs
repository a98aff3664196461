//! DES key schedule: PC-1, sixteen rotating 28-bit C/D
//! halves, PC-2 per round.
//!
//! Grounded on `examples/original_source/internal/ciphers/des/key_expansion.go`.
//! The C/D halves straddle byte boundaries (28 bits), so they're handled as
//! loose bit vectors here rather than through the byte-oriented `bits::permute`
//! used for PC-1/PC-2 themselves and the rest of the cipher.

use crate::bits;
use crate::des::tables::{NUM_ROUNDS, PC1, PC2, SHIFT_SCHEDULE};
use crate::error::{Error, Result};
use crate::feistel::KeySchedule;

pub struct DesKeySchedule {
    round_keys: Vec<Vec<u8>>,
}

impl DesKeySchedule {
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.len() != 8 {
            return Err(Error::KeySize {
                cipher: "DES",
                expected: 8,
                actual: key.len(),
            });
        }

        let cd = bits::permute(key, &PC1, true, true)?; // 56 bits, 7 bytes
        let mut c = extract_bits(&cd, 0, 28);
        let mut d = extract_bits(&cd, 28, 28);

        let mut round_keys = Vec::with_capacity(NUM_ROUNDS);
        for &shift in SHIFT_SCHEDULE.iter() {
            rotate_left(&mut c, shift as usize);
            rotate_left(&mut d, shift as usize);

            let mut cd_bits = c.clone();
            cd_bits.extend_from_slice(&d);
            let cd_bytes = pack_bits(&cd_bits);
            round_keys.push(bits::permute(&cd_bytes, &PC2, true, true)?);
        }

        Ok(Self { round_keys })
    }
}

impl KeySchedule for DesKeySchedule {
    fn num_rounds(&self) -> usize {
        NUM_ROUNDS
    }

    fn round_key(&self, i: usize) -> &[u8] {
        &self.round_keys[i]
    }
}

/// Pulls `len` MSB-first bits starting at `start` out of `data`, one `u8`
/// (0 or 1) per output element.
pub(super) fn extract_bits(data: &[u8], start: usize, len: usize) -> Vec<u8> {
    (start..start + len)
        .map(|bit_pos| {
            let byte_idx = bit_pos / 8;
            let shift = 7 - (bit_pos % 8);
            (data[byte_idx] >> shift) & 1
        })
        .collect()
}

pub(super) fn pack_bits(bits: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; (bits.len() + 7) / 8];
    for (i, &b) in bits.iter().enumerate() {
        if b != 0 {
            out[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    out
}

fn rotate_left(bits: &mut Vec<u8>, n: usize) {
    let n = n % bits.len();
    bits.rotate_left(n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn schedule_produces_sixteen_48_bit_round_keys() {
        let key = hex!("133457799BBCDFF1");
        let ks = DesKeySchedule::new(&key).unwrap();
        assert_eq!(ks.num_rounds(), 16);
        for i in 0..16 {
            assert_eq!(ks.round_key(i).len(), 6);
        }
    }

    #[test]
    fn rejects_wrong_key_size() {
        assert!(DesKeySchedule::new(&[0u8; 7]).is_err());
    }
}
