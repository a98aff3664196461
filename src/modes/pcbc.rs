//! PCBC: `C_i = E(P_i XOR S_{i-1})`, `S_i = P_i XOR C_i`, `S_0 = IV`. Neither
//! direction parallelises — each block's chaining value depends on the
//! previous block's plaintext and ciphertext.
//!
//! Grounded on `examples/original_source/internal/modes/pcbc.go`.

use crate::cipher::BlockCipher;
use crate::error::Result;
use crate::modes::helpers::xor;

pub fn process(cipher: &dyn BlockCipher, data: &[u8], iv: &[u8], encrypt: bool) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();
    let mut result = Vec::with_capacity(data.len());
    let mut current_iv = iv.to_vec();

    for block in data.chunks(block_size) {
        if encrypt {
            let mixed = xor(block, &current_iv)?;
            let encrypted = cipher.encrypt_block(&mixed)?;
            current_iv = xor(block, &encrypted)?;
            result.extend(encrypted);
        } else {
            let decrypted = cipher.decrypt_block(block)?;
            let plain = xor(&decrypted, &current_iv)?;
            current_iv = xor(block, &plain)?;
            result.extend(plain);
        }
    }

    Ok(result)
}
