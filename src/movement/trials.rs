//! Repeated movement trials for checking the step distribution

use rand::Rng;

use crate::io::configuration::MAX_STEP_DISTANCE;
use crate::io::error::{BoardError, Result};
use crate::movement::dice::{effective_distance, roll_d6};
use crate::movement::facing::FacingDirection;
use crate::spatial::Board;
use crate::spatial::tiles::GridPosition;

/// Tallies from a batch of movement trials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialSummary {
    /// Draws per step distance, indexed by `distance - 1`
    pub distance_counts: [usize; MAX_STEP_DISTANCE],
    /// Draws whose destination left the board
    pub out_of_bounds: usize,
    /// Total draws
    pub trials: usize,
}

impl TrialSummary {
    /// Observed share of each step distance, indexed by `distance - 1`
    ///
    /// All zeros when no trials were run.
    pub fn frequencies(&self) -> [f64; MAX_STEP_DISTANCE] {
        if self.trials == 0 {
            return [0.0; MAX_STEP_DISTANCE];
        }
        self.distance_counts
            .map(|count| count as f64 / self.trials as f64)
    }

    fn record(&mut self, distance: u8) {
        if let Some(count) = self
            .distance_counts
            .get_mut(usize::from(distance).saturating_sub(1))
        {
            *count += 1;
        }
    }
}

/// Roll and move from `start` `trials` times without moving the token
///
/// Every draw starts from `start`. Draws that leave the board are counted in
/// [`TrialSummary::out_of_bounds`] and still contribute their step distance.
/// `on_progress` receives the number of completed trials.
///
/// # Errors
///
/// Returns [`BoardError::IndexOutOfRange`] if `start` is off the board; any
/// other movement error than [`BoardError::OutOfBounds`] is propagated
pub fn run_trials<R, F>(
    board: &Board,
    start: GridPosition,
    facing: FacingDirection,
    trials: usize,
    rng: &mut R,
    mut on_progress: F,
) -> Result<TrialSummary>
where
    R: Rng,
    F: FnMut(usize),
{
    let start_tile = board.tile_at(start)?;
    let mut summary = TrialSummary::default();

    for completed in 1..=trials {
        let roll = roll_d6(rng);
        if let Some(distance) = effective_distance(roll) {
            summary.record(distance);
        }

        match board.resolve_roll(start_tile, roll, facing) {
            Ok(_) => {}
            Err(BoardError::OutOfBounds { .. }) => summary.out_of_bounds += 1,
            Err(error) => return Err(error),
        }

        summary.trials = completed;
        on_progress(completed);
    }

    Ok(summary)
}
