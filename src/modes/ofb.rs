//! OFB: `K_i = E(K_{i-1})` with `K_0 = IV`; both directions are `P_i XOR K_i`.
//! Keystream generation is a strict chain, so this mode never parallelises.
//!
//! Grounded on `examples/original_source/internal/modes/ofb.go`.

use crate::cipher::BlockCipher;
use crate::error::Result;
use crate::modes::helpers::xor;

pub fn process(cipher: &dyn BlockCipher, data: &[u8], iv: &[u8], _encrypt: bool) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();
    let mut result = Vec::with_capacity(data.len());
    let mut current_iv = iv.to_vec();

    for block in data.chunks(block_size) {
        let keystream = cipher.encrypt_block(&current_iv)?;
        result.extend(xor(block, &keystream)?);
        current_iv = keystream;
    }

    Ok(result)
}
