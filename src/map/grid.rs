use std::fmt;
use std::collections::{HashSet, VecDeque};
use std::ops::Index;

use super::{GridSize, GridSpace, TilePos};

/// A single row of the grid
pub type Row = [GridSpace];

/// A 2D occupancy grid stored row by row
#[derive(Clone, PartialEq, Eq)]
pub struct TileGrid(Vec<Vec<GridSpace>>);

impl Index<usize> for TileGrid {
    type Output = Row;

    fn index(&self, index: usize) -> &Self::Output {
        self.0.index(index)
    }
}

impl fmt::Debug for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use colored::*;

        for row in self.rows() {
            for &space in row {
                let text = space.to_string();
                write!(f, "{}", match space {
                    GridSpace::Empty => text.on_black(),
                    GridSpace::Floor => text.black().on_yellow(),
                    GridSpace::Wall => text.bright_black().on_blue(),
                })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl TileGrid {
    /// Create a new grid with the given size where every cell has the given value
    pub fn new(GridSize {rows, cols}: GridSize, fill: GridSpace) -> Self {
        assert!(rows > 0 && cols > 0, "Cannot create a grid with zero rows or zero columns");
        TileGrid(vec![vec![fill; cols]; rows])
    }

    /// Create a grid from its rows. Every row must have the same, non-zero, length.
    pub fn from_rows(rows: Vec<Vec<GridSpace>>) -> Self {
        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        assert!(cols > 0, "Cannot create a grid with zero rows or zero columns");
        assert!(rows.iter().all(|row| row.len() == cols), "All rows of a grid must have the same length");
        TileGrid(rows)
    }

    /// Returns the number of rows in this grid
    pub fn rows_len(&self) -> usize {
        self.0.len()
    }

    /// Returns the number of columns in this grid
    pub fn cols_len(&self) -> usize {
        self[0].len()
    }

    pub fn size(&self) -> GridSize {
        GridSize {rows: self.rows_len(), cols: self.cols_len()}
    }

    /// Returns an iterator over each row
    pub fn rows(&self) -> impl Iterator<Item=&Row> {
        self.0.iter().map(|r| r.as_slice())
    }

    /// Gets the value of the cell at the given position
    pub fn get(&self, TilePos {row, col}: TilePos) -> GridSpace {
        self[row][col]
    }

    /// Sets the value of the cell at the given position
    pub fn set(&mut self, TilePos {row, col}: TilePos, space: GridSpace) {
        self.0[row][col] = space;
    }

    /// Returns an iterator over the positions of all tiles contained within this grid
    pub fn tile_positions(&self) -> impl Iterator<Item=TilePos> {
        let cols = self.cols_len();
        (0..self.rows_len()).flat_map(move |row| (0..cols).map(move |col| TilePos {row, col}))
    }

    /// Returns the number of cells with the given value
    pub fn count(&self, space: GridSpace) -> usize {
        self.rows().flat_map(|row| row.iter()).filter(|&&s| s == space).count()
    }

    /// The fraction of the cells inside the border that are floor
    pub fn floor_fraction(&self) -> f64 {
        match self.size().interior_area() {
            0 => 0.0,
            interior => self.count(GridSpace::Floor) as f64 / interior as f64,
        }
    }

    /// Returns an iterator of tile positions adjacent to the given tile in the four cardinal
    /// directions. Only returns valid cell positions.
    pub fn adjacent_positions(&self, pos: TilePos) -> impl Iterator<Item=TilePos> {
        let rows = self.rows_len();
        let cols = self.cols_len();
        pos.adjacent_north().into_iter()
            .chain(pos.adjacent_east(cols))
            .chain(pos.adjacent_south(rows))
            .chain(pos.adjacent_west())
    }

    /// Returns every position reachable from `start` by stepping between adjacent cells with the
    /// same value as the cell at `start`
    pub fn connected_region(&self, start: TilePos) -> HashSet<TilePos> {
        let space = self.get(start);

        let mut seen = HashSet::new();
        let mut open = VecDeque::new();
        open.push_back(start);

        while let Some(node) = open.pop_front() {
            if !seen.insert(node) {
                continue;
            }

            open.extend(self.adjacent_positions(node)
                .filter(|&pt| self.get(pt) == space && !seen.contains(&pt)));
        }

        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::GridSpace::*;

    #[test]
    fn new_grid_is_filled() {
        let grid = TileGrid::new(GridSize::new(4, 3), Wall);
        assert_eq!(grid.size(), GridSize {rows: 3, cols: 4});
        assert_eq!(grid.count(Wall), 12);
        assert_eq!(grid.count(Floor), 0);
        assert_eq!(grid.tile_positions().count(), 12);
        assert_eq!(grid.floor_fraction(), 0.0);
    }

    #[test]
    fn set_uses_x_as_column() {
        let mut grid = TileGrid::new(GridSize::new(4, 3), Wall);
        grid.set(TilePos::new(3, 1), Floor);
        assert_eq!(grid[1][3], Floor);
        assert_eq!(grid.get(TilePos {row: 1, col: 3}), Floor);
        assert_eq!(grid.count(Floor), 1);
        // 2x1 interior
        assert_eq!(grid.floor_fraction(), 0.5);
    }

    #[test]
    fn connected_region_follows_matching_cells() {
        let grid = TileGrid::from_rows(vec![
            vec![Wall, Wall,  Wall,  Wall, Wall],
            vec![Wall, Floor, Floor, Wall, Wall],
            vec![Wall, Wall,  Floor, Wall, Wall],
            vec![Wall, Wall,  Wall,  Floor, Wall],
            vec![Wall, Wall,  Wall,  Wall, Wall],
        ]);

        let region = grid.connected_region(TilePos::new(1, 1));
        assert_eq!(region.len(), 3);
        assert!(region.contains(&TilePos::new(2, 2)));
        // Diagonals are not connected
        assert!(!region.contains(&TilePos::new(3, 3)));
        assert_eq!(grid.connected_region(TilePos::new(3, 3)).len(), 1);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn ragged_rows_rejected() {
        TileGrid::from_rows(vec![vec![Wall, Wall], vec![Wall]]);
    }
}
