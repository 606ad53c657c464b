//! Chromosome representation.
//!
//! A [`Chromosome`] is a fixed-length ordered sequence of bits. The
//! length is set at creation and never changes; operators that need to
//! write bits go through [`bits_mut`](Chromosome::bits_mut) so the
//! buffer is always mutated in place rather than resized.

use rand::Rng;
use std::fmt;

/// A fixed-length bit string candidate solution.
///
/// Bits are stored as `bool` (`true` = 1). [`Display`](fmt::Display)
/// renders the pattern as a plain `0`/`1` string, e.g. `"01101000"`.
///
/// # Examples
///
/// ```
/// use bitga::Chromosome;
///
/// let c = Chromosome::from_bits(vec![false, true, true, false]);
/// assert_eq!(c.len(), 4);
/// assert_eq!(c.ones(), 2);
/// assert_eq!(c.to_string(), "0110");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome with bits drawn independently and uniformly
    /// from {0, 1}.
    ///
    /// Consumes exactly `length` draws from `rng`, in bit order, so two
    /// identically seeded RNGs produce identical chromosomes.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let bits = (0..length).map(|_| rng.random_bool(0.5)).collect();
        Self { bits }
    }

    /// Wraps an existing bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the chromosome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Count of set bits (popcount).
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Read-only view of the bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Mutable view of the bits. Length cannot change through this.
    pub fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
