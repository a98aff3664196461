//! RandomDelta: like CTR, but the counter value is `seed + i` for a
//! configured 64-bit seed (default 52) instead of a plain block index.
//! Fully parallel both directions.
//!
//! Grounded on `examples/original_source/internal/modes/random_delta.go`.

use crate::cipher::BlockCipher;
use crate::error::{Error, Result};
use crate::modes::helpers::{be_counter_bytes, par_process_blocks, xor};

pub fn process(
    cipher: &dyn BlockCipher,
    data: &[u8],
    nonce: &[u8],
    seed: u64,
    _encrypt: bool,
) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();
    if block_size == 0 {
        return Err(Error::Config {
            reason: "RandomDelta: invalid block size".into(),
        });
    }
    if nonce.len() >= block_size {
        return Err(Error::Config {
            reason: "RandomDelta: nonce length must be less than the block size".into(),
        });
    }
    let counter_bytes = block_size - nonce.len();
    if counter_bytes > 8 {
        return Err(Error::Config {
            reason: "RandomDelta: counter field too wide (max 8 bytes)".into(),
        });
    }

    par_process_blocks(data, block_size, |i, block| {
        let counter_value = seed.wrapping_add(i as u64);
        let mut counter_block = vec![0u8; block_size];
        counter_block[..nonce.len()].copy_from_slice(nonce);
        counter_block[block_size - counter_bytes..]
            .copy_from_slice(&be_counter_bytes(counter_value, counter_bytes));

        let keystream = cipher.encrypt_block(&counter_block)?;
        xor(block, &keystream[..block.len()])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::des::DesCipher;
    use hex_literal::hex;

    #[test]
    fn random_delta_round_trips() {
        let cipher = DesCipher::with_key(&hex!("133457799BBCDFF1")).unwrap();
        let nonce = hex!("0011");
        let pt = hex!("0123456789ABCDEF FEDCBA9876543210");
        let ct = process(&cipher, &pt, &nonce, 52, true).unwrap();
        assert_eq!(process(&cipher, &ct, &nonce, 52, false).unwrap(), pt.to_vec());
    }

    #[test]
    fn random_delta_rejects_nonce_as_long_as_block() {
        let cipher = DesCipher::with_key(&hex!("133457799BBCDFF1")).unwrap();
        let nonce = [0u8; 8];
        assert!(process(&cipher, &hex!("0011223344556677"), &nonce, 52, true).is_err());
    }

    #[test]
    fn random_delta_differs_from_ctr_for_a_nonzero_seed() {
        let cipher = DesCipher::with_key(&hex!("133457799BBCDFF1")).unwrap();
        let nonce = hex!("00112233");
        let pt = hex!("0123456789ABCDEF");
        let rd = process(&cipher, &pt, &nonce, 52, true).unwrap();
        let ctr = super::super::ctr::process(&cipher, &pt, &nonce, true).unwrap();
        assert_ne!(rd, ctr);
    }
}
