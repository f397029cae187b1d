//! Deterministic pseudo-random numbers for maze carving.
//!
//! Mazes are reproduced from their seed alone, so the generator must give the same stream on
//! every platform. `Lcg31` is a small linear congruential generator whose exact formula is part
//! of that contract:
//!
//! `state = (1103515245 * state + 12345) mod 2^31`

use error_chain::bail;

use crate::errors::*;

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;
const STATE_MASK: u32 = 0x7fff_ffff;

/// The largest value `Lcg31` can produce, and the largest meaningful seed.
pub const MAX_SEED: u32 = STATE_MASK;

/// A source of random draws for the maze generators.
///
/// Implementations must be fully determined by their construction and the order of calls.
pub trait RandomSource {
    /// Advance the state and return the next raw draw.
    fn next_u31(&mut self) -> u32;

    /// A draw in `0..n`, taken as `next_u31() % n`.
    ///
    /// Fails with `ErrorKind::RandomRange` when `n` is zero, without advancing the state.
    fn range(&mut self, n: usize) -> Result<usize> {
        if n == 0 {
            bail!(ErrorKind::RandomRange(n));
        }
        Ok(self.next_u31() as usize % n)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Lcg31 {
    state: u32,
}

impl Lcg31 {
    pub fn new(seed: u32) -> Lcg31 {
        Lcg31 { state: seed & STATE_MASK }
    }

    /// Reset to a new seed. Only the low 31 bits of the seed matter.
    pub fn seed(&mut self, seed: u32) {
        self.state = seed & STATE_MASK;
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for Lcg31 {
    #[inline]
    fn next_u31(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & STATE_MASK;
        self.state
    }
}
