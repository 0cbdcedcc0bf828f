//! The rule deciding who wins a duel is supplied by the caller.

use crate::models::{Parity, Person};
use rand::rngs::StdRng;

/// Decides a single duel between an odd-partition and an even-partition person.
///
/// Implementations may draw from `rng` (the game's own generator) so that a seeded game
/// stays reproducible; they must not keep randomness of their own.
pub trait Combat {
    /// Returns the side of the winner.
    fn duel(&mut self, odd: &Person, even: &Person, rng: &mut StdRng) -> Parity;
}

impl<F> Combat for F
where
    F: FnMut(&Person, &Person, &mut StdRng) -> Parity,
{
    fn duel(&mut self, odd: &Person, even: &Person, rng: &mut StdRng) -> Parity {
        self(odd, even, rng)
    }
}
