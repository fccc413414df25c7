use rand::Rng;

use crate::map::{GridSize, GridSpace, TileGrid, TilePos};

use super::{GenerateError, Walker, WalkerConfig};

/// Returns true with the given probability. A chance of 0.0 never succeeds and a chance of 1.0
/// always succeeds.
fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.gen::<f64>() < probability
}

/// The state of a drunkard's walk simulation in progress
///
/// Walkers start in a grid that is entirely wall and turn every tile they visit into floor. Each
/// call to `step` runs one iteration of the simulation.
#[derive(Debug, Clone)]
pub struct DrunkardsWalk {
    grid: TileGrid,
    /// Kept in creation order. Passes over the walkers always go in this order.
    walkers: Vec<Walker>,
    config: WalkerConfig,
    /// The number of iterations completed so far
    iteration: usize,
}

impl DrunkardsWalk {
    /// Sets up a new simulation with a single walker in the center of an all-wall grid
    ///
    /// Fails without consuming any randomness if the size or configuration is invalid.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        size: GridSize,
        config: WalkerConfig,
    ) -> Result<Self, GenerateError> {
        if !size.has_interior() {
            return Err(GenerateError::invalid_dimensions(size));
        }
        config.validate()?;

        let grid = TileGrid::new(size, GridSpace::Wall);
        let first = Walker::facing_random(rng, TilePos::center_of(size));

        Ok(Self {
            grid,
            walkers: vec![first],
            config,
            iteration: 0,
        })
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn into_grid(self) -> TileGrid {
        self.grid
    }

    /// The walkers that are currently alive, in creation order
    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// The number of iterations that have been run
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns true once the configured number of iterations have been run
    pub fn is_finished(&self) -> bool {
        self.iteration >= self.config.iterations
    }

    /// Runs all of the remaining iterations and returns the finished grid
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> TileGrid {
        while !self.is_finished() {
            self.step(rng);
        }
        self.into_grid()
    }

    /// Runs a single iteration of the simulation
    ///
    /// This may be called even after `is_finished` returns true. That just keeps walking.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // Iterations happen in "phases". Each phase is a single pass over the walkers.
        self.carve_floor();
        self.destroy_walker(rng);
        self.change_directions(rng);
        self.spawn_walkers(rng);
        self.move_walkers();

        self.iteration += 1;
    }

    /// Turns the tile under every walker into floor
    fn carve_floor(&mut self) {
        for walker in &self.walkers {
            self.grid.set(walker.pos, GridSpace::Floor);
        }
    }

    /// Destroys at most one walker, never the last one
    fn destroy_walker<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let destroy_chance = self.config.destroy_chance;
        // Randomness is drawn for every walker until one is destroyed, even if the population is
        // too small for anything to be destroyed. This keeps the random sequence predictable.
        let destroyed = (0..self.walkers.len())
            .find(|_| chance(rng, destroy_chance) && self.walkers.len() > 1);

        if let Some(index) = destroyed {
            self.walkers.remove(index);
        }
    }

    fn change_directions<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let change_direction_chance = self.config.change_direction_chance;
        for walker in &mut self.walkers {
            if chance(rng, change_direction_chance) {
                walker.dir = rng.gen();
            }
        }
    }

    /// Gives every walker a chance to spawn a new walker at its position
    ///
    /// Walkers spawned during this pass do not get a chance to spawn walkers themselves until the
    /// next iteration.
    fn spawn_walkers<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let spawn_chance = self.config.spawn_chance;
        let max_walkers = self.config.max_walkers;

        for i in 0..self.walkers.len() {
            if chance(rng, spawn_chance) && self.walkers.len() < max_walkers {
                let pos = self.walkers[i].pos;
                self.walkers.push(Walker::facing_random(rng, pos));
            }
        }
    }

    fn move_walkers(&mut self) {
        let size = self.grid.size();
        for walker in &mut self.walkers {
            *walker = walker.stepped(size);
        }
    }
}
