use std::fmt;

/// The state of a single cell of the occupancy grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSpace {
    /// A cell with nothing in it (rendered as no tile at all)
    Empty,
    /// A cell that has been carved out and can be traversed
    Floor,
    /// A cell that cannot be traversed
    Wall,
}

impl GridSpace {
    pub fn is_floor(self) -> bool {
        self == GridSpace::Floor
    }

    pub fn is_wall(self) -> bool {
        self == GridSpace::Wall
    }

    pub fn is_empty(self) -> bool {
        self == GridSpace::Empty
    }
}

impl fmt::Display for GridSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::GridSpace::*;
        write!(f, "{}", match *self {
            Empty => " ",
            Floor => ".",
            Wall => "#",
        })
    }
}
