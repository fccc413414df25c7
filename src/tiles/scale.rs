use std::iter::repeat;
use std::num::NonZeroUsize;

use crate::map::{GridSpace, TileGrid};

/// Returns a new grid where every cell of the given grid is replicated into a `factor` x `factor`
/// block of cells
///
/// Cell (x, y) of the given grid covers the cells (x*factor..(x+1)*factor, y*factor..(y+1)*factor)
/// of the returned grid.
pub fn scale_grid(grid: &TileGrid, factor: NonZeroUsize) -> TileGrid {
    let factor = factor.get();

    let rows = grid.rows().flat_map(|row| {
        let scaled_row: Vec<GridSpace> = row.iter()
            .flat_map(|&space| repeat(space).take(factor))
            .collect();
        repeat(scaled_row).take(factor)
    }).collect();

    TileGrid::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::generator::{generate, WalkerConfig};
    use crate::map::{GridSize, TilePos};
    use crate::map::GridSpace::*;

    fn factor(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn factor_one_is_identity() {
        let grid = generate(&mut StdRng::seed_from_u64(1), GridSize::new(12, 9), &WalkerConfig::default()).unwrap();
        assert_eq!(scale_grid(&grid, factor(1)), grid);
    }

    #[test]
    fn blocks_share_source_cell() {
        let grid = TileGrid::from_rows(vec![
            vec![Wall, Floor, Empty],
            vec![Floor, Wall, Wall],
        ]);
        let scaled = scale_grid(&grid, factor(2));
        assert_eq!(scaled, TileGrid::from_rows(vec![
            vec![Wall, Wall, Floor, Floor, Empty, Empty],
            vec![Wall, Wall, Floor, Floor, Empty, Empty],
            vec![Floor, Floor, Wall, Wall, Wall, Wall],
            vec![Floor, Floor, Wall, Wall, Wall, Wall],
        ]));
    }

    #[test]
    fn shape_law() {
        let grid = generate(&mut StdRng::seed_from_u64(8), GridSize::new(15, 11), &WalkerConfig::default()).unwrap();
        for f in 1..=4 {
            let scaled = scale_grid(&grid, factor(f));
            assert_eq!(scaled.size(), grid.size() * f);

            for pos in grid.tile_positions() {
                for i in 0..f {
                    for j in 0..f {
                        let scaled_pos = TilePos::new(pos.x() * f + i, pos.y() * f + j);
                        assert_eq!(scaled.get(scaled_pos), grid.get(pos), "factor {} at {:?}", f, scaled_pos);
                    }
                }
            }
        }
    }
}
