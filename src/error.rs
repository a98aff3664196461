//! Crate-wide error type.
//!
//! A small, closed set of error kinds covering key/block sizing, unkeyed
//! ciphers, invalid padding, configuration, and random-source failures.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("key size error: {cipher} expects a {expected}-byte key, got {actual}")]
    KeySize {
        cipher: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("block size error: expected a {expected}-byte block, got {actual}")]
    BlockSize { expected: usize, actual: usize },

    #[error("{cipher}: encrypt/decrypt called before a key was installed")]
    NotKeyed { cipher: &'static str },

    #[error("invalid padding: {reason}")]
    InvalidPadding { reason: &'static str },

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("random source error: {reason}")]
    Random { reason: String },
}
