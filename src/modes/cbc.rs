//! CBC: `C_i = E(P_i XOR C_{i-1})`. Encryption is strictly sequential;
//! decryption's `D(C_i)` step parallelises, with the `XOR C_{i-1}` chain
//! applied sequentially afterwards against the original ciphertext.
//!
//! Grounded on `examples/original_source/internal/modes/cbc.go`.

use crate::cipher::BlockCipher;
use crate::error::Result;
use crate::modes::helpers::{par_process_blocks, xor};

pub fn process(cipher: &dyn BlockCipher, data: &[u8], iv: &[u8], encrypt: bool) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();

    if encrypt {
        let mut result = Vec::with_capacity(data.len());
        let mut current_iv = iv.to_vec();
        for block in data.chunks(block_size) {
            let mixed = xor(block, &current_iv)?;
            let encrypted = cipher.encrypt_block(&mixed)?;
            current_iv = encrypted.clone();
            result.extend(encrypted);
        }
        Ok(result)
    } else {
        let decrypted_blocks = par_process_blocks(data, block_size, |_, block| {
            cipher.decrypt_block(block)
        })?;

        let mut result = Vec::with_capacity(data.len());
        let mut prev_block = iv;
        for (i, decrypted) in decrypted_blocks.chunks(block_size).enumerate() {
            result.extend(xor(decrypted, prev_block)?);
            prev_block = &data[i * block_size..(i + 1) * block_size];
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::des::DesCipher;
    use hex_literal::hex;

    #[test]
    fn cbc_round_trips_multiple_blocks() {
        let cipher = DesCipher::with_key(&hex!("133457799BBCDFF1")).unwrap();
        let iv = hex!("0011223344556677");
        let pt = hex!("0123456789ABCDEF FEDCBA9876543210");
        let ct = process(&cipher, &pt, &iv, true).unwrap();
        assert_eq!(process(&cipher, &ct, &iv, false).unwrap(), pt.to_vec());
    }

    #[test]
    fn cbc_chains_so_identical_plaintext_blocks_diverge() {
        let cipher = DesCipher::with_key(&hex!("133457799BBCDFF1")).unwrap();
        let iv = hex!("0011223344556677");
        let pt = hex!("0123456789ABCDEF 0123456789ABCDEF");
        let ct = process(&cipher, &pt, &iv, true).unwrap();
        assert_ne!(ct[..8], ct[8..]);
    }
}
