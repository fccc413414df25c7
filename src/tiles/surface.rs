use std::collections::HashSet;
use std::num::NonZeroUsize;

use log::debug;

use crate::map::{GridSize, TileGrid, TilePos};

use super::{scale_grid, TileIndex, TileMapping, DUNGEON_TILESET};

/// A surface that tiles can be painted onto, e.g. the tile layer of a game engine
///
/// Calls happen in the order: `create_blank_layer`, `put_tiles_at`, `set_collision`, and then
/// any number of pixel size queries.
pub trait TileSurface {
    type Error;

    /// Creates a blank layer with the given number of tiles, each `tile_size` pixels square
    fn create_blank_layer(&mut self, size: GridSize, tile_size: u32) -> Result<(), Self::Error>;

    /// Paints the given rows of tiles with their top-left tile at `origin`. None leaves the
    /// position without a tile.
    fn put_tiles_at(&mut self, tiles: &[Vec<Option<TileIndex>>], origin: TilePos) -> Result<(), Self::Error>;

    /// Marks every tile with the given index as collidable
    fn set_collision(&mut self, index: TileIndex) -> Result<(), Self::Error>;

    fn width_in_pixels(&self) -> u32;

    fn height_in_pixels(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayerError {
    #[error("no layer has been created yet")]
    NoLayer,
    #[error("tiles placed at {origin:?} do not fit within a layer of size {size:?}")]
    OutOfBounds {
        origin: TilePos,
        size: GridSize,
    },
}

/// A tile layer kept in memory
///
/// Useful when there is no renderer, and for answering collision queries about an emitted map.
#[derive(Debug, Clone, Default)]
pub struct TileLayer {
    size: Option<GridSize>,
    tile_size: u32,
    tiles: Vec<Vec<Option<TileIndex>>>,
    collision: HashSet<TileIndex>,
}

impl TileLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The size of the layer in tiles, if it has been created
    pub fn size(&self) -> Option<GridSize> {
        self.size
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Returns the tile at the given position, or None if there is no tile there
    pub fn tile(&self, TilePos {row, col}: TilePos) -> Option<TileIndex> {
        self.tiles.get(row).and_then(|row| row.get(col)).copied().flatten()
    }

    /// Returns an iterator over every position in the layer and the tile at that position
    pub fn tiles(&self) -> impl Iterator<Item=(TilePos, Option<TileIndex>)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles.iter().enumerate().map(move |(col, &tile)| (TilePos {row, col}, tile))
        })
    }

    /// Returns true if the given tile index has been marked as collidable
    pub fn is_collision_index(&self, index: TileIndex) -> bool {
        self.collision.contains(&index)
    }

    /// Returns true if the tile at the given position blocks movement
    pub fn is_colliding(&self, pos: TilePos) -> bool {
        self.tile(pos).map(|index| self.is_collision_index(index)).unwrap_or(false)
    }
}

impl TileSurface for TileLayer {
    type Error = LayerError;

    fn create_blank_layer(&mut self, size: GridSize, tile_size: u32) -> Result<(), Self::Error> {
        self.size = Some(size);
        self.tile_size = tile_size;
        self.tiles = vec![vec![None; size.cols]; size.rows];
        self.collision.clear();
        Ok(())
    }

    fn put_tiles_at(&mut self, tiles: &[Vec<Option<TileIndex>>], origin: TilePos) -> Result<(), Self::Error> {
        let size = self.size.ok_or(LayerError::NoLayer)?;
        let fits = origin.row + tiles.len() <= size.rows
            && tiles.iter().all(|row| origin.col + row.len() <= size.cols);
        if !fits {
            return Err(LayerError::OutOfBounds {origin, size});
        }

        for (row_i, row) in tiles.iter().enumerate() {
            let dest = &mut self.tiles[origin.row + row_i][origin.col..origin.col + row.len()];
            dest.copy_from_slice(row);
        }
        Ok(())
    }

    fn set_collision(&mut self, index: TileIndex) -> Result<(), Self::Error> {
        if self.size.is_none() {
            return Err(LayerError::NoLayer);
        }
        self.collision.insert(index);
        Ok(())
    }

    fn width_in_pixels(&self) -> u32 {
        self.size.map(|size| size.cols as u32 * self.tile_size).unwrap_or(0)
    }

    fn height_in_pixels(&self) -> u32 {
        self.size.map(|size| size.rows as u32 * self.tile_size).unwrap_or(0)
    }
}

/// A point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPos {
    pub x: u32,
    pub y: u32,
}

/// What a surface reported back after a grid was emitted onto it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmittedMap {
    /// The size of the emitted (scaled) map in tiles
    pub size: GridSize,
    pub width_px: u32,
    pub height_px: u32,
    /// The point the player should spawn at (the center of the map)
    ///
    /// The first walker starts in the center of the grid, so this is always floor.
    pub player_start: PixelPos,
}

pub const DEFAULT_SCALE: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(factor) => factor,
    None => unreachable!(),
};

/// Turns occupancy grids into tiles on a tile surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileEmitter {
    /// The number of tiles (in each direction) that each cell of the grid becomes
    pub factor: NonZeroUsize,
    /// The width and height of each tile in pixels
    pub tile_size: u32,
    pub mapping: TileMapping,
}

impl Default for TileEmitter {
    fn default() -> Self {
        Self {
            factor: DEFAULT_SCALE,
            tile_size: DUNGEON_TILESET.tile_size,
            mapping: TileMapping::default(),
        }
    }
}

impl TileEmitter {
    /// Scales the grid, paints it onto the surface and makes the walls collidable
    pub fn emit<S: TileSurface>(&self, grid: &TileGrid, surface: &mut S) -> Result<EmittedMap, S::Error> {
        let scaled = scale_grid(grid, self.factor);
        let size = scaled.size();

        surface.create_blank_layer(size, self.tile_size)?;
        surface.put_tiles_at(&self.mapping.map_grid(&scaled), TilePos::new(0, 0))?;
        // We only need one tile index (the walls) to be colliding
        surface.set_collision(self.mapping.wall)?;

        let width_px = surface.width_in_pixels();
        let height_px = surface.height_in_pixels();
        debug!("emitted {}x{} tiles ({}x{} px)", size.width(), size.height(), width_px, height_px);

        Ok(EmittedMap {
            size,
            width_px,
            height_px,
            player_start: PixelPos {x: width_px / 2, y: height_px / 2},
        })
    }
}
