use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::map::{GridSize, TilePos};

/// One of the four cardinal directions a walker can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The unit vector for this direction as (x, y). North is towards y = 0.
    pub fn vector(self) -> (isize, isize) {
        use self::Direction::*;
        match self {
            North => (0, -1),
            East => (1, 0),
            South => (0, 1),
            West => (-1, 0),
        }
    }

    /// The change in (row, col) when moving one tile in this direction
    fn row_col_delta(self) -> (isize, isize) {
        let (dx, dy) = self.vector();
        (dy, dx)
    }
}

/// Each direction is equally likely
impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        use self::Direction::*;
        match rng.gen_range(0, 4) {
            0 => North,
            1 => East,
            2 => South,
            _ => West,
        }
    }
}

/// An agent that carves out floor wherever it walks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker {
    pub pos: TilePos,
    pub dir: Direction,
}

impl Walker {
    /// Creates a walker at the given position facing a random direction
    pub fn facing_random<R: Rng + ?Sized>(rng: &mut R, pos: TilePos) -> Self {
        Self {pos, dir: rng.gen()}
    }

    /// Returns this walker after taking a single step forward, never stepping onto the border of
    /// a grid with the given size
    pub fn stepped(self, size: GridSize) -> Self {
        Self {
            pos: self.pos.offset_within_border(self.dir.row_col_delta(), size),
            ..self
        }
    }
}
