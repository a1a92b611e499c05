//! Seeded randomness for sessions and playouts.
//!
//! The rules are deterministic; randomness only enters through the starting
//! seat and through callers that sample moves for random playouts. Both go
//! through `GameRng`, so a seed fixes a whole game.
//!
//! ```
//! use blokus_engine::core::{GameRng, PlayerId};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.starting_seat(4), b.starting_seat(4));
//! assert!(a.starting_seat(4) < PlayerId::new(4));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::player::PlayerId;

/// Golden-ratio increment spacing out forked seeds.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream tied to the seed it was built from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A child stream for one playout. The n-th fork of a seed is always
    /// the same stream, whatever this stream has drawn so far.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform draw from `range`. Panics on an empty range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform seat in `0..player_count`.
    pub fn starting_seat(&mut self, player_count: usize) -> PlayerId {
        assert!(
            (1..=256).contains(&player_count),
            "Must have between 1 and 256 players"
        );
        PlayerId::new(self.gen_range_usize(0..player_count) as u8)
    }

    /// Uniform element of `slice`, `None` if empty. Used to sample moves.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_seats() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);

        let seats_a: Vec<_> = (0..50).map(|_| a.starting_seat(4)).collect();
        let seats_b: Vec<_> = (0..50).map(|_| b.starting_seat(4)).collect();
        assert_eq!(seats_a, seats_b);
        assert!(seats_a.iter().all(|s| s.index() < 4));
    }

    #[test]
    fn test_every_seat_reachable() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.starting_seat(4).index()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_single_seat() {
        let mut rng = GameRng::new(0);
        assert_eq!(rng.starting_seat(1), PlayerId::new(0));
    }

    #[test]
    #[should_panic(expected = "Must have between 1 and 256 players")]
    fn test_no_seats() {
        let _ = GameRng::new(0).starting_seat(0);
    }

    #[test]
    fn test_forks_ignore_parent_draws() {
        let mut quiet = GameRng::new(9);
        let mut busy = GameRng::new(9);
        for _ in 0..10 {
            busy.gen_range_usize(0..100);
        }

        let mut f1 = quiet.fork();
        let mut f2 = busy.fork();
        assert_eq!(f1.seed(), f2.seed());
        assert_ne!(f1.seed(), 9);
        assert_eq!(f1.gen_range_usize(0..1 << 20), f2.gen_range_usize(0..1 << 20));

        // Second fork is a different stream.
        assert_ne!(quiet.fork().seed(), f1.seed());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let moves = ["a", "b", "c"];

        assert!(rng.choose(&moves).is_some_and(|m| moves.contains(m)));
        assert!(rng.choose::<&str>(&[]).is_none());
    }
}
