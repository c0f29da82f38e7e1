//! Tests for board constants and defaults

#[cfg(test)]
mod tests {
    use tileboard::io::configuration::{
        DEFAULT_BOARD_SIZE, DEFAULT_SEED, DEFAULT_TILE_COLOR, DEFAULT_TILE_SIZE, DEFAULT_TRIALS,
        DIE_FACES, MAX_BOARD_SIZE, MAX_STEP_DISTANCE, PROGRESS_UPDATE_INTERVAL,
    };
    use tileboard::{BoardConfig, BoundaryPolicy};

    // Tests the default board is the classic 7x7 of unit tiles
    // Guards against changing the board dimensions
    #[test]
    fn test_default_board_dimensions() {
        assert_eq!(DEFAULT_BOARD_SIZE, 7);
        assert!((DEFAULT_TILE_SIZE - 1.0).abs() < f32::EPSILON);
    }

    // Tests the default configuration is valid and rejects off-board moves
    // Guards against a default that fails its own validation
    #[test]
    fn test_default_config_validates() {
        let config = BoardConfig::default();
        assert_eq!(config.validate().unwrap(), 7);
        assert_eq!(config.boundary_policy, BoundaryPolicy::Reject);
    }

    // Tests the size limit is itself a valid size
    // Guards against an off-by-one limit
    #[test]
    fn test_max_board_size_is_valid() {
        let config = BoardConfig {
            size: MAX_BOARD_SIZE,
            ..BoardConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(DEFAULT_BOARD_SIZE < MAX_BOARD_SIZE);
    }

    // Tests die constants agree with the remap
    // Guards against a die with more faces than the remap handles
    #[test]
    fn test_die_constants() {
        assert_eq!(DIE_FACES, 6);
        assert_eq!(MAX_STEP_DISTANCE, 4);
    }

    // Tests new tiles start opaque
    // Guards against a transparent default
    #[test]
    fn test_default_tile_color_is_opaque() {
        assert_eq!(DEFAULT_TILE_COLOR[3], u8::MAX);
    }

    // Tests runtime defaults
    // Guards against changing seed or trial count
    #[test]
    fn test_runtime_defaults() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(DEFAULT_TRIALS, 10_000);
        assert!(PROGRESS_UPDATE_INTERVAL > 0);
    }
}
