//! ECB: each block is independent, both directions parallelise.
//!
//! Grounded on `examples/original_source/internal/modes/ecb.go`.

use crate::cipher::BlockCipher;
use crate::error::Result;
use crate::modes::helpers::par_process_blocks;

pub fn process(cipher: &dyn BlockCipher, data: &[u8], encrypt: bool) -> Result<Vec<u8>> {
    let block_size = cipher.block_size();
    par_process_blocks(data, block_size, |_, block| {
        if encrypt {
            cipher.encrypt_block(block)
        } else {
            cipher.decrypt_block(block)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::des::DesCipher;
    use hex_literal::hex;

    #[test]
    fn ecb_round_trips_multiple_blocks() {
        let cipher = DesCipher::with_key(&hex!("133457799BBCDFF1")).unwrap();
        let pt = hex!("0123456789ABCDEF 0123456789ABCDEF");
        let ct = process(&cipher, &pt, true).unwrap();
        assert_ne!(ct, pt.to_vec());
        assert_eq!(process(&cipher, &ct, false).unwrap(), pt.to_vec());
    }
}
