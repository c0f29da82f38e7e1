//! Command-line interface for running movement trials on a configured board

use crate::io::configuration::{DEFAULT_BOARD_SIZE, DEFAULT_SEED, DEFAULT_TILE_SIZE, DEFAULT_TRIALS};
use crate::io::error::{IoContext, Result};
use crate::io::progress::TrialProgress;
use crate::movement::dice::distance_distribution;
use crate::movement::facing::FacingDirection;
use crate::movement::resolver::BoundaryPolicy;
use crate::movement::trials::{TrialSummary, run_trials};
use crate::spatial::{Board, BoardConfig};
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "tileboard")]
#[command(
    author,
    version,
    about = "Roll the movement die repeatedly and report the step distribution"
)]
/// Command-line arguments for the trial runner
pub struct Cli {
    /// Board edge length in tiles
    #[arg(short = 'n', long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: i32,

    /// World-space edge length of one tile
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: f32,

    /// Random seed for reproducible trials
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of die rolls to perform
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Direction the token faces
    #[arg(short, long, value_enum, default_value_t = FacingDirection::Up)]
    pub facing: FacingDirection,

    /// Starting column
    #[arg(short = 'x', long, default_value_t = 0)]
    pub start_x: i32,

    /// Starting row
    #[arg(short = 'y', long, default_value_t = 0)]
    pub start_y: i32,

    /// What to do with moves that leave the board
    #[arg(short, long, value_enum, default_value_t = BoundaryPolicy::Reject)]
    pub boundary: BoundaryPolicy,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Board parameters requested on the command line
    pub const fn board_config(&self) -> BoardConfig {
        BoardConfig {
            size: self.size,
            tile_size: self.tile_size,
            boundary_policy: self.boundary,
        }
    }
}

/// Builds the board, runs the trials and reports the results
pub struct TrialRunner {
    cli: Cli,
}

impl TrialRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the trials and write the report to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the board configuration is invalid, the start
    /// tile is off the board, or the report cannot be written
    pub fn process(&self) -> Result<()> {
        let summary = self.run()?;
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_report(&summary, &mut handle)
    }

    /// Run the trials without writing anything
    ///
    /// # Errors
    ///
    /// Returns an error if the board configuration is invalid or the start
    /// tile is off the board
    pub fn run(&self) -> Result<TrialSummary> {
        let board = Board::new(self.cli.board_config())?;
        let start = [self.cli.start_x, self.cli.start_y];
        let trials = self.cli.trials;

        info!(
            "running {trials} trials on a {size}x{size} board from {start:?} facing {facing} (seed {seed})",
            size = board.size(),
            facing = self.cli.facing,
            seed = self.cli.seed,
        );

        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut progress = if self.cli.should_show_progress() {
            TrialProgress::new(trials)
        } else {
            TrialProgress::hidden(trials)
        };

        let outcome = run_trials(&board, start, self.cli.facing, trials, &mut rng, |done| {
            progress.update(done);
        });
        progress.finish();

        let summary = outcome?;
        info!(
            "finished {} trials, {} left the board",
            summary.trials, summary.out_of_bounds
        );
        Ok(summary)
    }
}

/// Write the observed and expected step distribution as a table
///
/// # Errors
///
/// Returns [`crate::BoardError::Io`] if writing fails
pub fn write_report<W: Write>(summary: &TrialSummary, writer: &mut W) -> Result<()> {
    let expected = distance_distribution();
    let observed = summary.frequencies();

    writeln!(writer, "distance  count  observed  expected").with_operation("report write")?;
    for (index, ((count, observed), expected)) in summary
        .distance_counts
        .iter()
        .zip(observed)
        .zip(expected)
        .enumerate()
    {
        writeln!(
            writer,
            "{:>8}  {count:>5}  {observed:>8.4}  {expected:>8.4}",
            index + 1
        )
        .with_operation("report write")?;
    }
    writeln!(
        writer,
        "out of bounds: {}/{}",
        summary.out_of_bounds, summary.trials
    )
    .with_operation("report write")?;

    Ok(())
}
