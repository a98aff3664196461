//! DES: a from-scratch FIPS 46-3 implementation.

mod cipher;
mod key_schedule;
mod round_function;
mod tables;

pub use cipher::DesCipher;
