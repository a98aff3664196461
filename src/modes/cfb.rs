//! CFB: `C_i = P_i XOR E(S_{i-1})`, `S_i = C_i` on both directions.
//! Encryption is sequential (`S_{i-1}` isn't known until the previous block
//! is encrypted); decryption parallelises because the full ciphertext stream
//! is available up front, so every `E(C_{i-1})` keystream block can be
//! computed independently.
//!
//! Grounded on `examples/original_source/internal/modes/cfb.go`.

use crate::cipher::BlockCipher;
use crate::error::Result;
use crate::modes::helpers::{par_process_blocks, xor};

pub fn process(cipher: &dyn BlockCipher, data: &[u8], iv: &[u8], encrypt: bool) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();

    if encrypt {
        let mut result = Vec::with_capacity(data.len());
        let mut current_iv = iv.to_vec();
        for block in data.chunks(block_size) {
            let keystream = cipher.encrypt_block(&current_iv)?;
            let out = xor(block, &keystream)?;
            current_iv = out.clone();
            result.extend(out);
        }
        Ok(result)
    } else {
        par_process_blocks(data, block_size, |i, block| {
            let prev = if i == 0 {
                iv
            } else {
                &data[(i - 1) * block_size..i * block_size]
            };
            let keystream = cipher.encrypt_block(prev)?;
            xor(block, &keystream)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::des::DesCipher;
    use hex_literal::hex;

    #[test]
    fn cfb_round_trips_multiple_blocks() {
        let cipher = DesCipher::with_key(&hex!("133457799BBCDFF1")).unwrap();
        let iv = hex!("0011223344556677");
        let pt = hex!("0123456789ABCDEF FEDCBA9876543210");
        let ct = process(&cipher, &pt, &iv, true).unwrap();
        assert_eq!(process(&cipher, &ct, &iv, false).unwrap(), pt.to_vec());
    }
}
