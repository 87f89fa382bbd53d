//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Provides functions to derive unique-but-deterministic seeds for different
//! game contexts (seating, dealing) from a base game seed, so a whole game
//! can be replayed from one number.

/// Derive the seed used to shuffle the seating order at game start.
pub fn derive_seating_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1)
}

/// Derive a seed for dealing one hand.
///
/// # Arguments
///
/// * `game_seed` - Base seed of the game
/// * `set_index` - Set number (0-based)
/// * `hand_index` - Hand number within the set (0-based)
///
/// # Returns
///
/// Derived seed that is unique per (game, set, hand) combination.
pub fn derive_dealing_seed(game_seed: u64, set_index: u8, hand_index: u8) -> u64 {
    // Different multipliers keep set and hand contributions apart
    game_seed
        .wrapping_add((set_index as u64).wrapping_mul(1_000_000))
        .wrapping_add((hand_index as u64).wrapping_mul(1_000))
        .wrapping_add(2) // Offset to distinguish from the seating seed
}
