use super::ConfigError;

/// The default number of iterations that the walkers are simulated for
pub const DEFAULT_ITERATIONS: usize = 500;

/// Configures the behaviour of the walkers that carve out a dungeon
#[derive(Debug, Clone, PartialEq)]
pub struct WalkerConfig {
    /// The chance (per iteration, per walker) that a walker picks a new random direction
    pub change_direction_chance: f64,
    /// The chance (per iteration, per walker) that a walker spawns a copy of itself. Nothing is
    /// spawned once there are already `max_walkers` walkers.
    pub spawn_chance: f64,
    /// The chance (per iteration, per walker) that a walker is destroyed. At most one walker is
    /// destroyed per iteration and the last walker is never destroyed.
    pub destroy_chance: f64,
    /// The maximum number of walkers that can exist at the same time. Must be at least 1.
    pub max_walkers: usize,
    /// The number of iterations to simulate
    pub iterations: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            change_direction_chance: 0.5,
            spawn_chance: 0.05,
            destroy_chance: 0.05,
            max_walkers: 10,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl WalkerConfig {
    /// Checks that every value in the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            ("change_direction_chance", self.change_direction_chance),
            ("spawn_chance", self.spawn_chance),
            ("destroy_chance", self.destroy_chance),
        ];
        for &(name, value) in &probabilities {
            // NaN is not contained in any range
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability {name, value});
            }
        }

        if self.max_walkers < 1 {
            return Err(ConfigError::NoWalkers);
        }

        Ok(())
    }
}
