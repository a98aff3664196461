//! DEAL: a 128-bit Feistel cipher built on DES.

mod adapter;
mod cipher;
mod key_schedule;

pub use cipher::DealCipher;
