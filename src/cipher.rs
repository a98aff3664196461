//! The cipher interface exposed to the mode-of-operation layer.
//!
//! Grounded on `examples/dennisss-dacha/pkg/crypto/src/cipher.rs`'s `BlockCipher`
//! trait, generalized with `set_key` (the Go source's `SymmetricCipher.SetSymmetricKey`)
//! so a cipher instance can be constructed without a key and reinstalled later.

use crate::error::Result;

/// A keyed, block-at-a-time symmetric cipher.
///
/// `Send + Sync` so a keyed cipher can be shared across the worker threads
/// the parallelisable modes (ECB, CBC-decrypt, CFB-decrypt, CTR,
/// RandomDelta) dispatch onto.
pub trait BlockCipher: Send + Sync {
    /// Size, in bytes, of a single block this cipher operates on.
    fn block_size(&self) -> usize;

    /// Installs (or replaces) the key. Round keys are derived and cached atomically:
    /// a failed call leaves any previously installed key untouched.
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Encrypts exactly one block. Fails with `NotKeyed` if no key was installed.
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts exactly one block. Fails with `NotKeyed` if no key was installed.
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;
}
