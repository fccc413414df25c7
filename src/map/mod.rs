mod grid;
mod grid_size;
mod grid_space;
mod tile_pos;

pub use self::grid::*;
pub use self::grid_size::*;
pub use self::grid_space::*;
pub use self::tile_pos::*;
