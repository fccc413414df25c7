use std::ops::Mul;

/// Represents the dimensions of a 2D span of tiles on a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    /// Creates a size from a width (number of columns) and a height (number of rows)
    pub fn new(width: usize, height: usize) -> Self {
        Self {rows: height, cols: width}
    }

    pub fn square(size: usize) -> Self {
        Self {rows: size, cols: size}
    }

    /// The number of columns
    pub fn width(self) -> usize {
        self.cols
    }

    /// The number of rows
    pub fn height(self) -> usize {
        self.rows
    }

    /// The total number of tiles in a grid of this size
    pub fn area(self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if a grid of this size has at least one tile inside of its 1 tile border
    pub fn has_interior(self) -> bool {
        self.rows >= 3 && self.cols >= 3
    }

    /// The number of tiles that are not on the outer border of a grid of this size
    pub fn interior_area(self) -> usize {
        self.rows.saturating_sub(2) * self.cols.saturating_sub(2)
    }
}

impl Mul<usize> for GridSize {
    type Output = GridSize;

    fn mul(self, factor: usize) -> Self {
        Self {
            rows: self.rows * factor,
            cols: self.cols * factor,
        }
    }
}
