//! Tests for tile state and color mutation

#[cfg(test)]
mod tests {
    use tileboard::Tile;
    use tileboard::io::configuration::DEFAULT_TILE_COLOR;

    // Tests a new tile keeps its coordinates and starts with the default color
    // Guards against swapping world and grid positions in the constructor
    #[test]
    fn test_new_tile_state() {
        let tile = Tile::new([1.5, 0.0, 2.5], [1, 2]);

        assert_eq!(tile.grid_position(), [1, 2]);
        let [x, y, z] = tile.world_position();
        assert!((x - 1.5).abs() < f32::EPSILON);
        assert!(y.abs() < f32::EPSILON);
        assert!((z - 2.5).abs() < f32::EPSILON);
        assert_eq!(tile.color(), DEFAULT_TILE_COLOR);
    }

    // Tests set_color replaces the color and nothing else
    // Guards against set_color being a no-op
    #[test]
    fn test_set_color() {
        let mut tile = Tile::new([0.5, 0.0, 0.5], [0, 0]);
        let original = tile.clone();

        tile.set_color([10, 20, 30, 40]);
        assert_eq!(tile.color(), [10, 20, 30, 40]);
        assert_eq!(tile.grid_position(), original.grid_position());
        assert_ne!(tile, original);

        tile.set_color(DEFAULT_TILE_COLOR);
        assert_eq!(tile, original);
    }
}
