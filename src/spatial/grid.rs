//! Square board with world-space lookup, selection outlines and movement
//!
//! Tiles are stored row-major: the tile at linear index `i` has grid
//! coordinate `(i % size, i / size)` and its center at
//! `tile_size * (x + 0.5, 0, y + 0.5)`. All lookups are bounds-checked and
//! fail with a [`BoardError`] instead of reading a neighbouring row.

use log::trace;
use ndarray::Array2;
use num_traits::ToPrimitive;
use rand::Rng;

use crate::io::configuration::{DEFAULT_BOARD_SIZE, DEFAULT_TILE_SIZE, MAX_BOARD_SIZE};
use crate::io::error::{BoardError, Result, invalid_configuration};
use crate::movement::dice::roll_d6;
use crate::movement::facing::FacingDirection;
use crate::movement::resolver::{BoundaryPolicy, MovementResolver};
use crate::spatial::selection::{SelectionOrientation, SelectionSet};
use crate::spatial::tiles::{Color, GridPosition, Tile, WorldPosition};

/// Parameters for building a [`Board`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    /// Edge length in tiles (must be positive)
    pub size: i32,
    /// World-space edge length of one tile (must be positive, and finite once
    /// multiplied by `size`)
    pub tile_size: f32,
    /// How movement treats destinations off the board
    pub boundary_policy: BoundaryPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            boundary_policy: BoundaryPolicy::default(),
        }
    }
}

impl BoardConfig {
    /// Check every parameter, returning the edge length as an index type
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] if the size is not in
    /// `1..=MAX_BOARD_SIZE`, the tile size is not positive and finite, or
    /// `tile_size * size` overflows to infinity
    pub fn validate(&self) -> Result<usize> {
        if self.size <= 0 {
            return Err(invalid_configuration(
                "size",
                &self.size,
                &"board size must be positive",
            ));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(invalid_configuration(
                "size",
                &self.size,
                &format!("board size must not exceed {MAX_BOARD_SIZE}"),
            ));
        }
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(invalid_configuration(
                "tile_size",
                &self.tile_size,
                &"tile size must be positive and finite",
            ));
        }
        if !(self.tile_size * self.size as f32).is_finite() {
            return Err(invalid_configuration(
                "tile_size",
                &self.tile_size,
                &"board extent (tile_size * size) must be finite",
            ));
        }

        usize::try_from(self.size)
            .map_err(|error| invalid_configuration("size", &self.size, &error))
    }
}

/// The game board: a fixed square of tiles plus the active selection
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    tile_size: f32,
    /// Indexed `[y, x]`, so logical iteration order is row-major
    tiles: Array2<Tile>,
    selection: SelectionSet,
    resolver: MovementResolver,
}

impl Board {
    /// Build a board from validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] if `config` fails validation
    pub fn new(config: BoardConfig) -> Result<Self> {
        let size = config.validate()?;
        let tile_size = config.tile_size;

        let tiles = Array2::from_shape_fn((size, size), |(y, x)| {
            let grid_position = [x as i32, y as i32];
            Tile::new(center_of(tile_size, grid_position), grid_position)
        });

        Ok(Self {
            size,
            tile_size,
            tiles,
            selection: SelectionSet::new(),
            resolver: MovementResolver::new(config.size, config.boundary_policy)?,
        })
    }

    /// Build a board of `size` × `size` tiles with default tile size and policy
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] if `size` is not positive
    /// or exceeds the maximum board size
    pub fn with_size(size: i32) -> Result<Self> {
        Self::new(BoardConfig {
            size,
            ..BoardConfig::default()
        })
    }

    /// Edge length in tiles
    pub const fn size(&self) -> usize {
        self.size
    }

    /// World-space edge length of one tile
    pub const fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Boundary policy used by movement
    pub const fn boundary_policy(&self) -> BoundaryPolicy {
        self.resolver.policy()
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Whether `position` names a tile on this board
    pub fn contains(&self, position: GridPosition) -> bool {
        self.index_of(position).is_some()
    }

    /// World-space center of the tile at `position`
    ///
    /// Pure arithmetic; `position` need not be on the board.
    pub fn tile_center(&self, position: GridPosition) -> WorldPosition {
        center_of(self.tile_size, position)
    }

    /// World-space center of the whole board on the `y = 0` plane
    pub fn center_position(&self) -> WorldPosition {
        let half_extent = self.size as f32 / 2.0 * self.tile_size;
        [half_extent, 0.0, half_extent]
    }

    /// Tile at a grid coordinate
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] if either axis is outside `[0, size)`
    pub fn tile_at(&self, position: GridPosition) -> Result<&Tile> {
        self.index_of(position)
            .and_then(|index| self.tiles.get(index))
            .ok_or(BoardError::IndexOutOfRange {
                position,
                size: self.size,
            })
    }

    fn tile_at_mut(&mut self, position: GridPosition) -> Result<&mut Tile> {
        let out_of_range = BoardError::IndexOutOfRange {
            position,
            size: self.size,
        };
        match self.index_of(position) {
            Some(index) => self.tiles.get_mut(index).ok_or(out_of_range),
            None => Err(out_of_range),
        }
    }

    /// Grid coordinate under a world position, after clamping onto the board
    ///
    /// The upper clamp differs per axis: `x` is only pulled back once it
    /// passes `tile_size * size`, while `z` is pulled back past
    /// `tile_size * (size - 0.5)`. An `x` of exactly `tile_size * size`
    /// therefore maps to column `size`, which [`Board::tile_at`] rejects.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NonFiniteCoordinate`] if `x` or `z` is NaN
    pub fn grid_position_at(&self, world_position: WorldPosition) -> Result<GridPosition> {
        let [mut x, _, mut z] = world_position;
        let extent = self.tile_size * self.size as f32;
        let last_center = self.tile_size * (self.size as f32 - 0.5);

        // TODO: confirm whether x should share z's upper bound
        if x > extent {
            x = last_center;
        }
        if z > last_center {
            z = last_center;
        }
        if x < 0.0 {
            x = 0.0;
        }
        if z < 0.0 {
            z = 0.0;
        }

        let column = (x / self.tile_size).floor().to_i32();
        let row = (z / self.tile_size).floor().to_i32();
        match (column, row) {
            (Some(column), Some(row)) => Ok([column, row]),
            _ => Err(BoardError::NonFiniteCoordinate {
                position: world_position,
            }),
        }
    }

    /// Tile under a world position, after clamping onto the board
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NonFiniteCoordinate`] for NaN input and
    /// [`BoardError::IndexOutOfRange`] for an `x` of exactly
    /// `tile_size * size` (see [`Board::grid_position_at`])
    pub fn tile_at_world_position(&self, world_position: WorldPosition) -> Result<&Tile> {
        let position = self.grid_position_at(world_position)?;
        self.tile_at(position)
    }

    /// Set the highlight color of the tile under a world position
    ///
    /// Leaves the selection untouched.
    ///
    /// # Errors
    ///
    /// Fails as [`Board::tile_at_world_position`] does
    pub fn set_tile_color(&mut self, world_position: WorldPosition, color: Color) -> Result<()> {
        let position = self.grid_position_at(world_position)?;
        self.tile_at_mut(position)?.set_color(color);
        Ok(())
    }

    /// Set the highlight color of every outlined tile
    ///
    /// The world position is accepted for call-site compatibility and ignored;
    /// only the current selection decides which tiles change.
    pub fn set_tiles_color(&mut self, _world_position: WorldPosition, color: Color) {
        let positions = self.selection.positions().to_vec();
        for position in positions {
            if let Ok(tile) = self.tile_at_mut(position) {
                tile.set_color(color);
            }
        }
    }

    /// Replace the selection with the pair around a world position
    ///
    /// The selection is always cleared first. With `activate` false it stays
    /// empty; tiles colored earlier keep their color. The color argument is
    /// accepted and ignored; use [`Board::set_tiles_color`] to paint.
    ///
    /// A horizontal outline centred on the last column fails: its `+x` probe
    /// lands exactly on `tile_size * size`, which the x clamp does not pull
    /// back (see [`Board::grid_position_at`]). Vertical outlines on the last
    /// row clamp and succeed.
    ///
    /// # Errors
    ///
    /// Fails as [`Board::selected_tiles`] does, leaving the selection empty
    pub fn set_selection_outline(
        &mut self,
        world_position: WorldPosition,
        _color: Color,
        orientation: SelectionOrientation,
        activate: bool,
    ) -> Result<()> {
        self.selection.clear();
        if !activate {
            trace!("selection cleared");
            return Ok(());
        }

        let positions = self
            .selected_tiles(world_position, orientation)?
            .map(Tile::grid_position);
        for position in positions {
            self.selection.push(position);
        }
        trace!("selection {orientation} at {world_position:?} -> {positions:?}");
        Ok(())
    }

    /// The two tiles half a tile either side of a world position
    ///
    /// Horizontal splits along x (plus side first), vertical along z. Near an
    /// edge both entries may be the same tile.
    ///
    /// # Errors
    ///
    /// Fails as [`Board::tile_at_world_position`] does for either probe
    pub fn selected_tiles(
        &self,
        world_position: WorldPosition,
        orientation: SelectionOrientation,
    ) -> Result<[&Tile; 2]> {
        let half = self.tile_size / 2.0;
        let [x, y, z] = world_position;
        let (ahead, behind) = match orientation {
            SelectionOrientation::Horizontal => ([x + half, y, z], [x - half, y, z]),
            SelectionOrientation::Vertical => ([x, y, z + half], [x, y, z - half]),
        };

        Ok([
            self.tile_at_world_position(ahead)?,
            self.tile_at_world_position(behind)?,
        ])
    }

    /// Current selection
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Outlined tiles in selection order
    pub fn outlined_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.selection
            .positions()
            .iter()
            .filter_map(|&position| self.tile_at(position).ok())
    }

    /// Roll the movement die and return the tile it sends `current` to
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the move leaves the board under
    /// the reject policy
    pub fn next_tile<R: Rng>(
        &self,
        current: &Tile,
        facing: FacingDirection,
        rng: &mut R,
    ) -> Result<&Tile> {
        let roll = roll_d6(rng);
        self.resolve_roll(current, roll, facing)
    }

    /// Tile reached from `current` for a given raw die roll
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the move leaves the board under
    /// the reject policy, or [`BoardError::IndexOutOfRange`] if `current`
    /// belongs to a larger board
    pub fn resolve_roll(
        &self,
        current: &Tile,
        roll: u8,
        facing: FacingDirection,
    ) -> Result<&Tile> {
        let destination = self
            .resolver
            .resolve(current.grid_position(), roll, facing)?;
        self.tile_at(destination)
    }

    fn index_of(&self, position: GridPosition) -> Option<[usize; 2]> {
        let x = usize::try_from(position[0]).ok()?;
        let y = usize::try_from(position[1]).ok()?;
        (x < self.size && y < self.size).then_some([y, x])
    }
}

fn center_of(tile_size: f32, position: GridPosition) -> WorldPosition {
    [
        tile_size * (position[0] as f32 + 0.5),
        0.0,
        tile_size * (position[1] as f32 + 0.5),
    ]
}
