//! DES round function `F(R, K)`: E-expansion, XOR, eight S-box substitutions,
//! P-permutation.
//!
//! Grounded on `examples/original_source/internal/ciphers/des/round_function.go`;
//! row/column extraction from each 6-bit S-box chunk (`row = b0<<1 | b5`,
//! `col = b1<<3 | b2<<2 | b3<<1 | b4`) follows FIPS 46-3 directly.

use crate::des::key_schedule::{extract_bits, pack_bits};
use crate::des::tables::{E, P, S_BOXES};
use crate::error::{Error, Result};
use crate::feistel::RoundFunction;

pub struct DesRoundFunction;

impl RoundFunction for DesRoundFunction {
    fn half_size(&self) -> usize {
        4
    }

    fn apply(&self, half: &[u8], round_key: &[u8]) -> Result<Vec<u8>> {
        if half.len() != 4 {
            return Err(Error::BlockSize {
                expected: 4,
                actual: half.len(),
            });
        }
        if round_key.len() != 6 {
            return Err(Error::Config {
                reason: "DES round key must be 6 bytes (48 bits)".into(),
            });
        }

        let expanded = crate::bits::permute(half, &E, true, true)?; // 48 bits
        let xored: Vec<u8> = expanded
            .iter()
            .zip(round_key)
            .map(|(a, b)| a ^ b)
            .collect();

        let sub = substitute(&xored);
        crate::bits::permute(&sub, &P, true, true)
    }
}

/// Runs the eight S-boxes over a 48-bit (6-byte) value, returning 32 bits (4 bytes).
fn substitute(xored: &[u8]) -> Vec<u8> {
    let mut out_bits = Vec::with_capacity(32);
    for i in 0..8 {
        let chunk = extract_bits(xored, i * 6, 6);
        let row = ((chunk[0] << 1) | chunk[5]) as usize;
        let col = ((chunk[1] << 3) | (chunk[2] << 2) | (chunk[3] << 1) | chunk[4]) as usize;
        let val = S_BOXES[i][row][col];
        for b in (0..4).rev() {
            out_bits.push((val >> b) & 1);
        }
    }
    pack_bits(&out_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_rejects_wrong_half_size() {
        let f = DesRoundFunction;
        assert!(f.apply(&[0u8; 3], &[0u8; 6]).is_err());
    }

    #[test]
    fn apply_rejects_wrong_round_key_size() {
        let f = DesRoundFunction;
        assert!(f.apply(&[0u8; 4], &[0u8; 5]).is_err());
    }

    #[test]
    fn apply_produces_a_32_bit_output() {
        let f = DesRoundFunction;
        let out = f.apply(&[0u8; 4], &[0u8; 6]).unwrap();
        assert_eq!(out.len(), 4);
    }
}
