//! RNG module - random piece spawning
//!
//! A new piece goes to a uniformly chosen free cell and is a 2 or a 4 with
//! equal probability. The cell is picked as an index into the free cells in
//! row-major order, so uniformity depends on the board's free counter being
//! exact.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Tile, SPAWN_EXPONENTS};

/// Build the game RNG: deterministic when seeded, OS entropy otherwise.
pub fn game_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw a spawn: (index among the `free` empty cells, tile value).
///
/// `free` must be non-zero.
pub fn draw_spawn<R: Rng + ?Sized>(rng: &mut R, free: usize) -> (usize, Tile) {
    let slot = rng.gen_range(0..free);
    let exponent = rng.gen_range(SPAWN_EXPONENTS);
    (slot, 1 << exponent)
}
