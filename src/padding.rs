//! Padding schemes: Zeros, PKCS#7, ANSI X.923, ISO 10126.
//!
//! Grounded on `examples/original_source/internal/modes/padding.go`, including
//! its block-aligned-input special case (an already-aligned message still
//! gets a full block of padding under the three reversible schemes, so the
//! unpadder always has a padding byte to interpret) and Zeros padding's
//! honestly-documented non-bijectivity: stripping it removes every trailing
//! zero byte, which eats into a plaintext that itself ends in zero bytes.

use tracing::trace;

use crate::error::{Error, Result};
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    Zeros,
    Pkcs7,
    AnsiX923,
    Iso10126,
}

impl PaddingMode {
    fn name(self) -> &'static str {
        match self {
            PaddingMode::Zeros => "Zeros",
            PaddingMode::Pkcs7 => "PKCS7",
            PaddingMode::AnsiX923 => "ANSI X.923",
            PaddingMode::Iso10126 => "ISO 10126",
        }
    }
}

pub fn apply(
    data: &[u8],
    block_size: usize,
    mode: PaddingMode,
    rng: &dyn RandomSource,
) -> Result<Vec<u8>> {
    let mut pad_size = block_size - (data.len() % block_size);

    if pad_size == block_size {
        match mode {
            PaddingMode::Pkcs7 | PaddingMode::AnsiX923 | PaddingMode::Iso10126 => {
                // already aligned: add a full block anyway so there's a size byte to read back
            }
            PaddingMode::Zeros => {
                trace!("Zeros padding: data is already block-aligned, no padding added");
                return Ok(data.to_vec());
            }
        }
    }
    // pad_size now always lies in (0, block_size].

    let mut padded = vec![0u8; data.len() + pad_size];
    padded[..data.len()].copy_from_slice(data);

    match mode {
        PaddingMode::Zeros => {
            // trailing bytes are already zero from the allocation above
        }
        PaddingMode::Pkcs7 => {
            for b in &mut padded[data.len()..] {
                *b = pad_size as u8;
            }
        }
        PaddingMode::Iso10126 => {
            let tail_len = padded.len();
            rng.fill(&mut padded[data.len()..tail_len - 1])?;
            *padded.last_mut().unwrap() = pad_size as u8;
        }
        PaddingMode::AnsiX923 => {
            let tail_len = padded.len();
            for b in &mut padded[data.len()..tail_len - 1] {
                *b = 0x00;
            }
            *padded.last_mut().unwrap() = pad_size as u8;
        }
    }

    trace!(mode = mode.name(), bytes_added = pad_size, "applied padding");
    Ok(padded)
}

pub fn strip(data: &[u8], block_size: usize, mode: PaddingMode) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::InvalidPadding {
            reason: "data is empty",
        });
    }

    let pad_size = match mode {
        PaddingMode::Zeros => {
            let mut last_non_zero = data.len() as isize - 1;
            while last_non_zero >= 0 && data[last_non_zero as usize] == 0 {
                last_non_zero -= 1;
            }
            if last_non_zero < data.len() as isize - 1 {
                let pad_size = data.len() - (last_non_zero + 1) as usize;
                trace!(mode = mode.name(), bytes_removed = pad_size, "removed padding");
                return Ok(data[..(last_non_zero + 1) as usize].to_vec());
            }
            return Ok(data.to_vec());
        }
        PaddingMode::Pkcs7 | PaddingMode::AnsiX923 | PaddingMode::Iso10126 => {
            let pad_size = *data.last().unwrap() as usize;
            if pad_size == 0 || pad_size > block_size || data.len() < pad_size {
                return Err(Error::InvalidPadding {
                    reason: "padding size byte is out of range",
                });
            }

            if mode == PaddingMode::Pkcs7 {
                for &b in &data[data.len() - pad_size..] {
                    if b != pad_size as u8 {
                        return Err(Error::InvalidPadding {
                            reason: "PKCS7 padding bytes don't match the size byte",
                        });
                    }
                }
            } else if mode == PaddingMode::AnsiX923 {
                for &b in &data[data.len() - pad_size..data.len() - 1] {
                    if b != 0x00 {
                        return Err(Error::InvalidPadding {
                            reason: "ANSI X.923 padding must be zero-filled before the size byte",
                        });
                    }
                }
            }
            // ISO 10126's filler bytes are random and unchecked.

            pad_size
        }
    };

    trace!(mode = mode.name(), bytes_removed = pad_size, "removed padding");
    Ok(data[..data.len() - pad_size].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::test_support::FixedSource;
    use crate::random::OsRandomSource;

    #[test]
    fn pkcs7_round_trips_unaligned_input() {
        let data = b"Hello, World!";
        let padded = apply(data, 8, PaddingMode::Pkcs7, &OsRandomSource).unwrap();
        assert_eq!(padded.len() % 8, 0);
        assert_eq!(strip(&padded, 8, PaddingMode::Pkcs7).unwrap(), data);
    }

    #[test]
    fn pkcs7_adds_a_full_block_when_already_aligned() {
        let data = [0xABu8; 8];
        let padded = apply(&data, 8, PaddingMode::Pkcs7, &OsRandomSource).unwrap();
        assert_eq!(padded.len(), 16);
        assert_eq!(strip(&padded, 8, PaddingMode::Pkcs7).unwrap(), data);
    }

    #[test]
    fn zeros_leaves_aligned_input_untouched() {
        let data = [0xABu8; 8];
        let padded = apply(&data, 8, PaddingMode::Zeros, &OsRandomSource).unwrap();
        assert_eq!(padded, data);
    }

    #[test]
    fn zeros_strip_eats_trailing_zero_plaintext_bytes() {
        // Documented limitation: Zeros padding is not a bijection.
        let data = [0x41u8, 0x00, 0x00];
        let padded = apply(&data, 8, PaddingMode::Zeros, &OsRandomSource).unwrap();
        let stripped = strip(&padded, 8, PaddingMode::Zeros).unwrap();
        assert_ne!(stripped, data);
        assert_eq!(stripped, vec![0x41]);
    }

    #[test]
    fn ansi_x923_round_trips() {
        let data = b"abcdefghijk";
        let padded = apply(data, 8, PaddingMode::AnsiX923, &OsRandomSource).unwrap();
        assert_eq!(strip(&padded, 8, PaddingMode::AnsiX923).unwrap(), data);
    }

    #[test]
    fn iso10126_round_trips_with_a_fixed_source() {
        let data = b"abcdefghijk";
        let rng = FixedSource(0x42);
        let padded = apply(data, 8, PaddingMode::Iso10126, &rng).unwrap();
        assert_eq!(strip(&padded, 8, PaddingMode::Iso10126).unwrap(), data);
    }

    #[test]
    fn pkcs7_strip_rejects_bad_padding_bytes() {
        let mut padded = apply(b"abc", 8, PaddingMode::Pkcs7, &OsRandomSource).unwrap();
        let last = padded.len() - 2;
        padded[last] ^= 0xFF;
        assert!(strip(&padded, 8, PaddingMode::Pkcs7).is_err());
    }

    #[test]
    fn strip_rejects_empty_input() {
        assert!(strip(&[], 8, PaddingMode::Pkcs7).is_err());
    }
}
