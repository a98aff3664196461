//! CTR: counter block = `nonce || bigEndian(i)` filling to the block size.
//! `K_i = E(counter_i)`, output = `P_i XOR K_i`. Fully parallel both
//! directions since every counter block is independent.
//!
//! Grounded on `examples/original_source/internal/modes/ctr.go`.

use crate::cipher::BlockCipher;
use crate::error::{Error, Result};
use crate::modes::helpers::{be_counter_bytes, par_process_blocks, xor};

pub fn process(cipher: &dyn BlockCipher, data: &[u8], nonce: &[u8], _encrypt: bool) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();
    if nonce.is_empty() {
        return Err(Error::Config {
            reason: "CTR mode requires a nonce parameter".into(),
        });
    }
    if nonce.len() > block_size {
        return Err(Error::Config {
            reason: "CTR nonce is longer than the block size".into(),
        });
    }

    par_process_blocks(data, block_size, |i, block| {
        let mut counter = vec![0u8; block_size];
        counter[..nonce.len()].copy_from_slice(nonce);
        let width = block_size - nonce.len();
        counter[nonce.len()..].copy_from_slice(&be_counter_bytes(i as u64, width));

        let keystream = cipher.encrypt_block(&counter)?;
        xor(block, &keystream[..block.len()])
    })
}
