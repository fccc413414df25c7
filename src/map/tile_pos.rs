use super::GridSize;

/// Represents the location of a single tile in a 2D grid of tiles
///
/// Columns correspond to x-coordinates and rows correspond to y-coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub row: usize,
    pub col: usize,
}

impl TilePos {
    /// Creates a position from an x (column) and y (row) coordinate
    pub fn new(x: usize, y: usize) -> Self {
        Self {row: y, col: x}
    }

    /// The x-coordinate (column) of this position
    pub fn x(self) -> usize {
        self.col
    }

    /// The y-coordinate (row) of this position
    pub fn y(self) -> usize {
        self.row
    }

    /// Returns the center tile of a grid with the given size
    ///
    /// For even sizes this rounds towards the bottom-right.
    pub fn center_of(size: GridSize) -> Self {
        Self {row: size.rows / 2, col: size.cols / 2}
    }

    /// Returns the position one tile north of this position, if any
    pub fn adjacent_north(self) -> Option<TilePos> {
        self.row.checked_sub(1).map(|row| TilePos {row, col: self.col})
    }

    /// Returns the position one tile east of this position, if any
    pub fn adjacent_east(self, ncols: usize) -> Option<TilePos> {
        if self.col + 1 < ncols {
            Some(TilePos {row: self.row, col: self.col + 1})
        } else {
            None
        }
    }

    /// Returns the position one tile south of this position, if any
    pub fn adjacent_south(self, nrows: usize) -> Option<TilePos> {
        if self.row + 1 < nrows {
            Some(TilePos {row: self.row + 1, col: self.col})
        } else {
            None
        }
    }

    /// Returns the position one tile west of this position, if any
    pub fn adjacent_west(self) -> Option<TilePos> {
        self.col.checked_sub(1).map(|col| TilePos {row: self.row, col})
    }

    /// Moves this position by the given (delta row, delta col) and clamps the result so that it
    /// stays off of the outer border of a grid with the given size
    ///
    /// The grid must have an interior (see `GridSize::has_interior`).
    pub fn offset_within_border(self, (drow, dcol): (isize, isize), size: GridSize) -> Self {
        debug_assert!(size.has_interior(), "bug: grid has no tiles inside of its border");
        let clamp = |value: usize, delta: isize, len: usize| {
            (value as isize + delta).max(1).min(len as isize - 2) as usize
        };

        Self {
            row: clamp(self.row, drow, size.rows),
            col: clamp(self.col, dcol, size.cols),
        }
    }

    /// Returns true if this position is on the outer border of a grid with the given size
    pub fn is_on_border(self, size: GridSize) -> bool {
        self.row == 0 || self.col == 0 || self.row + 1 == size.rows || self.col + 1 == size.cols
    }
}
