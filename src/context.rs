//! The cipher context: glues a keyed [`BlockCipher`], a [`CipherMode`], and a
//! [`PaddingMode`] together behind one `encrypt`/`decrypt` API, with lazy IV
//! materialization.
//!
//! Grounded on `examples/original_source/internal/modes/context.go` and
//! `process_block.go`. The Go source guards IV materialization with an
//! `RWMutex` because callers may invoke `Encrypt`/`Decrypt` concurrently on a
//! shared context; this uses `std::sync::OnceLock` instead, which gives the
//! same "read many, write once" discipline without a lock on the hot read path.

use std::sync::OnceLock;

use tracing::debug;

use crate::cipher::BlockCipher;
use crate::error::{Error, Result};
use crate::modes::{self, CipherMode, ModeParams};
use crate::padding::{self, PaddingMode};
use crate::random::RandomSource;

/// Extra construction-time parameters a mode may need: an explicit nonce
/// (CTR/RandomDelta) and/or an explicit RandomDelta seed. If absent, a
/// nonce is generated (`block_size / 2` random bytes) and the seed defaults
/// to 52.
#[derive(Debug, Clone, Default)]
pub struct ModeConfig {
    pub nonce: Option<Vec<u8>>,
    pub seed: Option<i64>,
}

pub struct CipherContext<'a> {
    cipher: Box<dyn BlockCipher + 'a>,
    block_size: usize,
    mode: CipherMode,
    padding: PaddingMode,
    iv: OnceLock<Vec<u8>>,
    explicit_iv: Option<Vec<u8>>,
    mode_config: ModeConfig,
    rng: Box<dyn RandomSource + 'a>,
}

impl<'a> CipherContext<'a> {
    pub fn new(
        cipher: Box<dyn BlockCipher + 'a>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
        mode_config: ModeConfig,
        rng: Box<dyn RandomSource + 'a>,
    ) -> Self {
        let block_size = cipher.block_size();
        debug!(block_size, "cipher context constructed");
        Self {
            cipher,
            block_size,
            mode,
            padding,
            iv: OnceLock::new(),
            explicit_iv: iv,
            mode_config,
            rng,
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>> {
        let padded = padding::apply(message, self.block_size, self.padding, self.rng.as_ref())?;
        self.process_blocks(&padded, true)
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let decrypted = self.process_blocks(ciphertext, false)?;
        padding::strip(&decrypted, self.block_size, self.padding)
    }

    /// Thin wrapper with no independent logic beyond read-all/write-all.
    pub fn encrypt_file(&self, input_path: &std::path::Path, output_path: &std::path::Path) -> Result<()> {
        let data = std::fs::read(input_path).map_err(|e| Error::Config {
            reason: format!("reading {}: {e}", input_path.display()),
        })?;
        let encrypted = self.encrypt(&data)?;
        std::fs::write(output_path, encrypted).map_err(|e| Error::Config {
            reason: format!("writing {}: {e}", output_path.display()),
        })
    }

    /// Thin wrapper with no independent logic beyond read-all/write-all.
    pub fn decrypt_file(&self, input_path: &std::path::Path, output_path: &std::path::Path) -> Result<()> {
        let data = std::fs::read(input_path).map_err(|e| Error::Config {
            reason: format!("reading {}: {e}", input_path.display()),
        })?;
        let decrypted = self.decrypt(&data)?;
        std::fs::write(output_path, decrypted).map_err(|e| Error::Config {
            reason: format!("writing {}: {e}", output_path.display()),
        })
    }

    fn process_blocks(&self, data: &[u8], encrypt: bool) -> Result<Vec<u8>> {
        if data.len() % self.block_size != 0 {
            return Err(Error::Config {
                reason: "data length must be a multiple of block size".into(),
            });
        }

        let iv = self.materialize_iv()?;
        let nonce = self.nonce();
        let seed = self.seed();
        let params = ModeParams {
            iv: &iv,
            nonce: &nonce,
            seed,
        };
        modes::process(self.mode, self.cipher.as_ref(), data, &params, encrypt)
    }

    fn materialize_iv(&self) -> Result<Vec<u8>> {
        if let Some(existing) = self.iv.get() {
            return Ok(existing.clone());
        }
        let generated = match &self.explicit_iv {
            Some(iv) => iv.clone(),
            None => {
                let mut buf = vec![0u8; self.block_size];
                self.rng.fill(&mut buf)?;
                buf
            }
        };
        match self.iv.set(generated.clone()) {
            Ok(()) => debug!("IV materialized"),
            Err(_) => {
                // another caller won the race; use whatever's there now
            }
        }
        Ok(self.iv.get().cloned().unwrap_or(generated))
    }

    fn nonce(&self) -> Vec<u8> {
        if let Some(nonce) = &self.mode_config.nonce {
            return nonce.clone();
        }
        let nonce_size = self.block_size / 2;
        let mut buf = vec![0u8; nonce_size];
        if self.rng.fill(&mut buf).is_err() {
            buf.fill(0);
        }
        buf
    }

    fn seed(&self) -> u64 {
        self.mode_config.seed.unwrap_or(52) as u64
    }
}
