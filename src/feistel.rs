//! Generic Feistel network engine.
//!
//! Grounded on `examples/original_source/internal/ciphers/feistel/feistel.go`: a
//! round function plus a round-key schedule drive a fixed number of half-block
//! swaps, with decryption running the same rounds in reverse key order.

use crate::error::{Error, Result};

/// Produces the per-round subkeys consumed by a [`RoundFunction`].
///
/// Implementations own whatever master-key material they were built from;
/// `round_key(i)` is expected to be cheap (precomputed at construction time).
pub trait KeySchedule {
    /// Number of rounds this schedule was derived for.
    fn num_rounds(&self) -> usize;

    /// The subkey used by round `i` (0-indexed, `i < num_rounds()`).
    fn round_key(&self, i: usize) -> &[u8];
}

/// The per-round mixing function `F(half, round_key) -> half`.
pub trait RoundFunction {
    /// Size, in bytes, of one Feistel half (so the full block is twice this).
    fn half_size(&self) -> usize;

    /// Computes `F(right, round_key)`, returning a value of `half_size()` bytes.
    fn apply(&self, half: &[u8], round_key: &[u8]) -> Result<Vec<u8>>;
}

fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

/// Runs a Feistel network forward (encryption direction): round keys are
/// consumed in ascending order, and the final round's half-swap is omitted
/// (the standard "no final swap" construction) so the cipher is an involution
/// of itself under [`decrypt_rounds`].
pub fn encrypt_rounds<F: RoundFunction>(
    f: &F,
    schedule: &dyn KeySchedule,
    block: &[u8],
) -> Result<Vec<u8>> {
    run_rounds(f, schedule, block, false)
}

/// Runs a Feistel network backward (decryption direction): round keys are
/// consumed in descending order.
pub fn decrypt_rounds<F: RoundFunction>(
    f: &F,
    schedule: &dyn KeySchedule,
    block: &[u8],
) -> Result<Vec<u8>> {
    run_rounds(f, schedule, block, true)
}

fn run_rounds<F: RoundFunction>(
    f: &F,
    schedule: &dyn KeySchedule,
    block: &[u8],
    reverse: bool,
) -> Result<Vec<u8>> {
    let half = f.half_size();
    if block.len() != half * 2 {
        return Err(Error::BlockSize {
            expected: half * 2,
            actual: block.len(),
        });
    }

    let (mut l, mut r) = (block[..half].to_vec(), block[half..].to_vec());
    let rounds = schedule.num_rounds();

    for round in 0..rounds {
        let key_idx = if reverse { rounds - 1 - round } else { round };
        let rk = schedule.round_key(key_idx);
        let f_out = f.apply(&r, rk)?;
        let new_r = xor(&l, &f_out);
        l = r;
        r = new_r;
    }

    // Undo the dangling swap left by the last round so the output is L||R
    // in the same half order the input arrived in.
    let mut out = Vec::with_capacity(half * 2);
    out.extend_from_slice(&r);
    out.extend_from_slice(&l);
    Ok(out)
}
