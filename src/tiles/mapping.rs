use crate::map::{GridSpace, TileGrid};

/// The index of a tile within a tileset
pub type TileIndex = u32;

/// Maps each kind of grid cell to the tile used to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileMapping {
    pub floor: TileIndex,
    pub wall: TileIndex,
}

impl Default for TileMapping {
    fn default() -> Self {
        Self {
            floor: 6,
            wall: 20,
        }
    }
}

impl TileMapping {
    /// Returns the tile for the given cell, or None if nothing should be drawn
    pub fn tile_for(self, space: GridSpace) -> Option<TileIndex> {
        match space {
            GridSpace::Empty => None,
            GridSpace::Floor => Some(self.floor),
            GridSpace::Wall => Some(self.wall),
        }
    }

    /// Returns the tiles for every cell in the grid, row by row
    pub fn map_grid(self, grid: &TileGrid) -> Vec<Vec<Option<TileIndex>>> {
        grid.rows()
            .map(|row| row.iter().map(|&space| self.tile_for(space)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::map::GridSpace::*;

    #[test]
    fn maps_every_cell() {
        let grid = TileGrid::from_rows(vec![
            vec![Wall, Floor],
            vec![Empty, Wall],
        ]);
        let mapping = TileMapping {floor: 1, wall: 2};
        assert_eq!(mapping.map_grid(&grid), vec![
            vec![Some(2), Some(1)],
            vec![None, Some(2)],
        ]);
        assert_eq!(TileMapping::default().tile_for(Floor), Some(6));
        assert_eq!(TileMapping::default().tile_for(Wall), Some(20));
    }
}
