//! Pools of zero-based ten-sided dice.

use rand::Rng;

use super::Die;

/// A number of d10s rolled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D10Pool {
    count: u32,
}

impl D10Pool {
    /// Create a pool of `count` dice.
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    /// Roll every die in the pool, in draw order.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
        (0..self.count).map(|_| Die::D10.roll(rng)).collect()
    }
}

/// The two smallest values of a roll, ascending.
///
/// Returns `None` when fewer than two values are given. Duplicates are
/// kept, so `[6, 6, 9]` yields `(6, 6)`.
pub fn two_lowest(rolls: &[u32]) -> Option<(u32, u32)> {
    let mut sorted = rolls.to_vec();
    sorted.sort_unstable();
    match sorted.as_slice() {
        [a, b, ..] => Some((*a, *b)),
        _ => None,
    }
}
