//! Six-sided movement die with the high-roll remap
//!
//! Faces 1 to 4 move that many tiles. A 5 counts as a 3 and a 6 counts as a
//! 2, so a standard die favours two and three tile moves without a reroll.

use rand::Rng;

use crate::io::configuration::{DIE_FACES, MAX_STEP_DISTANCE};

/// Roll the movement die
pub fn roll_d6<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(1..=DIE_FACES)
}

/// Step distance produced by a raw die face
///
/// Returns `None` for values that are not die faces.
pub const fn effective_distance(roll: u8) -> Option<u8> {
    match roll {
        1..=4 => Some(roll),
        5 => effective_distance(3),
        6 => effective_distance(2),
        _ => None,
    }
}

/// Exact probability of each step distance, indexed by `distance - 1`
///
/// Derived by enumerating the die faces through [`effective_distance`].
pub fn distance_distribution() -> [f64; MAX_STEP_DISTANCE] {
    let mut counts = [0u32; MAX_STEP_DISTANCE];
    for face in 1..=DIE_FACES {
        if let Some(slot) = effective_distance(face)
            .and_then(|distance| counts.get_mut(usize::from(distance) - 1))
        {
            *slot += 1;
        }
    }

    counts.map(|count| f64::from(count) / f64::from(DIE_FACES))
}
