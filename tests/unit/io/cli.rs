//! Tests for command-line parsing, the trial runner and report output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tileboard::io::cli::{Cli, TrialRunner, write_report};
    use tileboard::io::configuration::{DEFAULT_BOARD_SIZE, DEFAULT_SEED, DEFAULT_TRIALS};
    use tileboard::movement::trials::TrialSummary;
    use tileboard::{BoardError, BoundaryPolicy, FacingDirection};

    // Tests defaults are applied when no flags are given
    // Guards against wiring defaults to the wrong constants
    #[test]
    fn test_default_arguments() {
        let cli = Cli::try_parse_from(["tileboard"]).unwrap();

        assert_eq!(cli.size, DEFAULT_BOARD_SIZE);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.trials, DEFAULT_TRIALS);
        assert_eq!(cli.facing, FacingDirection::Up);
        assert_eq!(cli.boundary, BoundaryPolicy::Reject);
        assert_eq!([cli.start_x, cli.start_y], [0, 0]);
        assert!(cli.should_show_progress());
    }

    // Tests every flag reaches its field
    // Guards against short flags colliding
    #[test]
    fn test_custom_arguments() {
        let cli = Cli::try_parse_from([
            "tileboard", "-n", "9", "--tile-size", "2.5", "-s", "7", "-t", "100", "-f", "left",
            "-x", "4", "-y", "5", "-b", "wrap", "-q",
        ])
        .unwrap();

        assert_eq!(cli.size, 9);
        assert!((cli.tile_size - 2.5).abs() < f32::EPSILON);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.trials, 100);
        assert_eq!(cli.facing, FacingDirection::Left);
        assert_eq!([cli.start_x, cli.start_y], [4, 5]);
        assert_eq!(cli.boundary, BoundaryPolicy::Wrap);
        assert!(!cli.should_show_progress());

        let config = cli.board_config();
        assert_eq!(config.size, 9);
        assert_eq!(config.boundary_policy, BoundaryPolicy::Wrap);
    }

    // Tests unknown facings are rejected at parse time
    // Guards against silently defaulting command-line input
    #[test]
    fn test_unknown_facing_rejected() {
        assert!(Cli::try_parse_from(["tileboard", "--facing", "north"]).is_err());
    }

    // Tests the runner is reproducible for a fixed seed
    // Guards against seeding from entropy
    #[test]
    fn test_runner_is_reproducible() {
        let args = ["tileboard", "-q", "-t", "250", "-s", "99"];
        let first = TrialRunner::new(Cli::try_parse_from(args).unwrap())
            .run()
            .unwrap();
        let second = TrialRunner::new(Cli::try_parse_from(args).unwrap())
            .run()
            .unwrap();

        assert_eq!(first.trials, 250);
        assert_eq!(first, second);
    }

    // Tests invalid board sizes surface as configuration errors
    // Guards against running trials on an empty board
    #[test]
    fn test_runner_rejects_invalid_size() {
        let cli = Cli::try_parse_from(["tileboard", "-q", "-n", "0"]).unwrap();
        let result = TrialRunner::new(cli).run();
        assert!(matches!(
            result,
            Err(BoardError::InvalidConfiguration { .. })
        ));
    }

    // Tests the report lists every distance and the out-of-bounds tally
    // Guards against dropping the out-of-bounds line
    #[test]
    fn test_write_report() {
        let summary = TrialSummary {
            distance_counts: [1, 2, 2, 1],
            out_of_bounds: 3,
            trials: 6,
        };
        let mut buffer = Vec::new();
        write_report(&summary, &mut buffer).unwrap();

        let report = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("distance"));
        assert!(lines[2].contains("0.3333"));
        assert_eq!(lines[5], "out of bounds: 3/6");
    }
}
