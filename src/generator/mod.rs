// Generation is split into the walk simulation itself (walk) and the pieces that it is built
// from. This module only contains the public entry points and the candidate selection that sits
// on top of the simulation.
mod config;
mod error;
mod map_key;
mod walk;
mod walker;

pub use self::config::*;
pub use self::error::*;
pub use self::map_key::*;
pub use self::walk::*;
pub use self::walker::*;

use std::cmp::Ordering;

use log::{debug, info};
use rand::{random, rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::map::{GridSize, GridSpace, TileGrid};

/// Carves a dungeon out of a grid of walls with the given size
///
/// The random number generator is the only source of randomness, so the same rng state always
/// produces the same grid.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    size: GridSize,
    config: &WalkerConfig,
) -> Result<TileGrid, GenerateError> {
    let grid = DrunkardsWalk::new(rng, size, config.clone())?.run(rng);
    debug!("carved {} floor tiles out of a {}x{} grid in {} iterations",
        grid.count(GridSpace::Floor), size.width(), size.height(), config.iterations);
    Ok(grid)
}

/// A generated dungeon along with the key needed to generate it again
#[derive(Debug, Clone)]
pub struct GenDungeon {
    pub key: MapKey,
    pub grid: TileGrid,
    /// The index of the candidate that was chosen
    pub candidate: usize,
}

#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    /// The number of columns (width) and rows (height) of the grid
    pub size: GridSize,
    /// Configures the walkers that carve out the dungeon
    pub walk: WalkerConfig,
    /// The number of dungeons to generate before picking the one closest to `target_fill`
    ///
    /// Candidates are generated in parallel.
    pub candidates: usize,
    /// The ideal fraction of the tiles inside the border that should be floor
    /// Value should be between 0.0 and 1.0
    pub target_fill: f64,
}

impl Default for DungeonGenerator {
    fn default() -> Self {
        Self {
            size: GridSize::square(50),
            walk: WalkerConfig::default(),
            candidates: 1,
            target_fill: 0.2,
        }
    }
}

impl DungeonGenerator {
    pub fn generate(&self) -> Result<GenDungeon, GenerateError> {
        self.generate_with_key(random())
    }

    pub fn generate_with_key(&self, key: MapKey) -> Result<GenDungeon, GenerateError> {
        // Validate up front so that no work is done for a configuration that can never succeed
        if !self.size.has_interior() {
            return Err(GenerateError::invalid_dimensions(self.size));
        }
        self.walk.validate()?;
        if self.candidates == 0 {
            return Err(ConfigError::NoCandidates.into());
        }

        // Each candidate gets its own rng seeded from the key. The seeds are taken in order before
        // anything runs in parallel, so the result does not depend on how the work is scheduled.
        let mut rng = key.to_rng();
        let seeds: Vec<[u8; 32]> = (0..self.candidates).map(|_| rng.gen()).collect();
        let grids: Vec<TileGrid> = seeds.into_par_iter()
            .map(|seed| generate(&mut StdRng::from_seed(seed), self.size, &self.walk))
            .collect::<Result<_, _>>()?;

        let (candidate, grid) = self.closest_to_target(grids)
            .expect("bug: should be at least one candidate");
        info!("chose candidate {} of {} with {:.1}% floor (target {:.1}%)",
            candidate + 1, self.candidates, grid.floor_fraction() * 100.0, self.target_fill * 100.0);

        Ok(GenDungeon {key, grid, candidate})
    }

    /// Returns the grid whose floor fraction is closest to the target fill. Ties go to the
    /// earliest candidate.
    fn closest_to_target(&self, grids: Vec<TileGrid>) -> Option<(usize, TileGrid)> {
        let distance = |grid: &TileGrid| (grid.floor_fraction() - self.target_fill).abs();
        grids.into_iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| distance(a).partial_cmp(&distance(b)).unwrap_or(Ordering::Equal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::mock::StepRng;

    use crate::map::TilePos;

    fn assert_border_is_wall(grid: &TileGrid) {
        let size = grid.size();
        for pos in grid.tile_positions().filter(|pos| pos.is_on_border(size)) {
            assert_eq!(grid.get(pos), GridSpace::Wall, "border tile at {:?} was carved", pos);
        }
    }

    #[test]
    fn still_walker_carves_only_center() {
        let config = WalkerConfig {
            change_direction_chance: 0.0,
            spawn_chance: 0.0,
            destroy_chance: 0.0,
            max_walkers: 10,
            iterations: 1,
        };
        let grid = generate(&mut StepRng::new(0, 0), GridSize::square(5), &config).unwrap();

        assert_eq!(grid.count(GridSpace::Floor), 1);
        assert_eq!(grid.get(TilePos::new(2, 2)), GridSpace::Floor);
        assert_eq!(grid.count(GridSpace::Wall), 24);
    }

    #[test]
    fn straight_walker_is_pinned_by_border() {
        // The walker never turns, so after reaching the border it stays in place
        let config = WalkerConfig {
            change_direction_chance: 0.0,
            spawn_chance: 0.0,
            destroy_chance: 0.0,
            max_walkers: 10,
            iterations: 10,
        };
        // Always returns zero, so the walker faces north
        let grid = generate(&mut StepRng::new(0, 0), GridSize::square(5), &config).unwrap();

        assert_eq!(grid.count(GridSpace::Floor), 2);
        assert_eq!(grid.get(TilePos::new(2, 2)), GridSpace::Floor);
        assert_eq!(grid.get(TilePos::new(2, 1)), GridSpace::Floor);
        assert_border_is_wall(&grid);
    }

    #[test]
    fn default_config_partially_fills() {
        let size = GridSize::square(50);
        let grid = generate(&mut StdRng::seed_from_u64(2020), size, &WalkerConfig::default()).unwrap();

        let floor = grid.count(GridSpace::Floor);
        assert!(floor > 0 && floor < size.interior_area(), "{} floor tiles", floor);
        assert_border_is_wall(&grid);
    }

    #[test]
    fn floor_is_connected_to_center() {
        for seed in 0..20 {
            let size = GridSize::new(40, 30);
            let grid = generate(&mut StdRng::seed_from_u64(seed), size, &WalkerConfig::default()).unwrap();

            let center = TilePos::center_of(size);
            assert_eq!(grid.get(center), GridSpace::Floor);
            let region = grid.connected_region(center);
            assert_eq!(region.len(), grid.count(GridSpace::Floor), "seed {} has unreachable floor", seed);
            assert_border_is_wall(&grid);
        }
    }

    #[test]
    fn same_rng_same_grid() {
        let size = GridSize::new(32, 24);
        let config = WalkerConfig::default();
        let first = generate(&mut StdRng::seed_from_u64(5), size, &config).unwrap();
        let second = generate(&mut StdRng::seed_from_u64(5), size, &config).unwrap();
        assert_eq!(first, second);

        let first = generate(&mut StepRng::new(3, 0x9e37_79b9_7f4a_7c15), size, &config).unwrap();
        let second = generate(&mut StepRng::new(3, 0x9e37_79b9_7f4a_7c15), size, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_small_grids() {
        let config = WalkerConfig::default();
        assert_eq!(
            generate(&mut StepRng::new(0, 0), GridSize::new(2, 50), &config).unwrap_err(),
            GenerateError::InvalidDimensions {width: 2, height: 50},
        );
        assert_eq!(
            generate(&mut StepRng::new(0, 0), GridSize::new(50, 1), &config).unwrap_err(),
            GenerateError::InvalidDimensions {width: 50, height: 1},
        );
        assert!(generate(&mut StepRng::new(0, 0), GridSize::square(3), &config).is_ok());
    }

    #[test]
    fn generator_is_deterministic_per_key() {
        let generator = DungeonGenerator {
            size: GridSize::new(30, 20),
            candidates: 4,
            ..DungeonGenerator::default()
        };
        let key: MapKey = random();
        let first = generator.generate_with_key(key).unwrap();
        let second = generator.generate_with_key(key).unwrap();
        assert_eq!(first.key, key);
        assert_eq!(first.candidate, second.candidate);
        assert_eq!(first.grid, second.grid);
    }

    #[test]
    fn generator_picks_closest_fill() {
        let generator = DungeonGenerator {
            size: GridSize::new(30, 20),
            candidates: 6,
            target_fill: 0.3,
            ..DungeonGenerator::default()
        };
        let key = MapKey::from_seed([42; 32]);
        let chosen = generator.generate_with_key(key).unwrap();

        // Regenerate every candidate by hand to check the choice
        let mut rng = key.to_rng();
        let seeds: Vec<[u8; 32]> = (0..6).map(|_| rng.gen()).collect();
        let distances: Vec<f64> = seeds.into_iter()
            .map(|seed| generate(&mut StdRng::from_seed(seed), generator.size, &generator.walk).unwrap())
            .map(|grid| (grid.floor_fraction() - 0.3).abs())
            .collect();
        let best = distances[chosen.candidate];
        assert!(distances.iter().all(|&d| d >= best), "{:?} chose {}", distances, chosen.candidate);
    }

    #[test]
    fn generator_validates_before_generating() {
        let generator = DungeonGenerator {candidates: 0, ..DungeonGenerator::default()};
        assert_eq!(generator.generate().unwrap_err(), GenerateError::InvalidConfig(ConfigError::NoCandidates));

        let generator = DungeonGenerator {size: GridSize::new(50, 2), ..DungeonGenerator::default()};
        assert!(matches!(generator.generate(), Err(GenerateError::InvalidDimensions {..})));
    }
}
