//! Small shared helpers for the mode strategies.
//!
//! Grounded on `examples/original_source/internal/modes/helpers.go`'s `XOR`
//! and its rayon-friendly block-parallel loop, generalized into one helper
//! reused by ECB, CBC-decrypt, CFB-decrypt, CTR, and RandomDelta.

use rayon::prelude::*;

use crate::error::{Error, Result};

pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(Error::Config {
            reason: "XOR: slices must have equal length".into(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}

/// Splits `data` into `block_size`-sized chunks, maps each chunk through `f`
/// in parallel (block index, block bytes), and concatenates the results in
/// order. The first error encountered (by block index, not wall-clock
/// completion order) is returned.
pub fn par_process_blocks<F>(data: &[u8], block_size: usize, f: F) -> Result<Vec<u8>>
where
    F: Fn(usize, &[u8]) -> Result<Vec<u8>> + Sync,
{
    let results: Vec<Result<Vec<u8>>> = data
        .par_chunks(block_size)
        .enumerate()
        .map(|(i, chunk)| f(i, chunk))
        .collect();

    let mut out = Vec::with_capacity(data.len());
    for r in results {
        out.extend(r?);
    }
    Ok(out)
}

/// Encodes `value` as `width` big-endian bytes. If `width` is less than 8,
/// the high-order bytes of the u64 are dropped (the counter is assumed to
/// fit); if greater, the extra leading bytes are zero-filled.
pub fn be_counter_bytes(value: u64, width: usize) -> Vec<u8> {
    let full = value.to_be_bytes();
    let copy_len = full.len().min(width);
    let mut out = vec![0u8; width];
    out[width - copy_len..].copy_from_slice(&full[8 - copy_len..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_rejects_mismatched_lengths() {
        assert!(xor(&[1, 2, 3], &[1, 2]).is_err());
    }

    #[test]
    fn xor_is_its_own_inverse() {
        let a = [0xDEu8, 0xAD, 0xBE, 0xEF];
        let b = [0x01u8, 0x02, 0x03, 0x04];
        let c = xor(&a, &b).unwrap();
        let back = xor(&c, &b).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn be_counter_bytes_truncates_to_width() {
        assert_eq!(be_counter_bytes(0x0102, 4), vec![0x00, 0x00, 0x01, 0x02]);
        assert_eq!(be_counter_bytes(0x0102, 1), vec![0x02]);
    }

    #[test]
    fn par_process_blocks_preserves_order() {
        let data: Vec<u8> = (0..16).collect();
        let out = par_process_blocks(&data, 4, |i, chunk| {
            Ok(chunk.iter().map(|b| b.wrapping_add(i as u8)).collect())
        })
        .unwrap();
        assert_eq!(out.len(), 16);
        assert_eq!(out[0], 0); // block 0, byte 0: 0 + 0
        assert_eq!(out[4], 4 + 1); // block 1, byte 0: 4 + 1
    }
}
