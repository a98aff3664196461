//! Random-byte acquisition, kept to an interface: this crate only consumes
//! randomness, it doesn't implement a CSPRNG.
//!
//! Grounded on `examples/other_examples/manifests/tobygrice-aesp/Cargo.toml`'s
//! `rand` dependency, the idiomatic choice in this pack for CSPRNG access
//! rather than hand-rolling one over `/dev/urandom`.

use rand::RngCore;

use crate::error::{Error, Result};

/// A source of cryptographically-suitable random bytes.
///
/// ISO 10126 padding and the RandomDelta mode both need one; both take it as
/// a `&dyn RandomSource` so callers can substitute a deterministic source in
/// tests without the production path ever using anything but the OS CSPRNG.
pub trait RandomSource {
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// The default [`RandomSource`], backed by `rand`'s OS-seeded CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        rand::rngs::OsRng.try_fill_bytes(buf).map_err(|e| Error::Random {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Deterministic stand-in for tests that need reproducible ISO 10126 /
    /// RandomDelta output.
    pub struct FixedSource(pub u8);

    impl RandomSource for FixedSource {
        fn fill(&self, buf: &mut [u8]) -> Result<()> {
            buf.fill(self.0);
            Ok(())
        }
    }
}
