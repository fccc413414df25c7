use crate::map::GridSize;

/// The reasons a dungeon cannot be generated. Generation is refused before any work is done.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// The grid is too small to have both a 1 tile border and at least one interior tile
    #[error("a {width}x{height} grid has no room inside of its border (both sides must be at least 3)")]
    InvalidDimensions {
        width: usize,
        height: usize,
    },
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl GenerateError {
    pub(in crate) fn invalid_dimensions(size: GridSize) -> Self {
        GenerateError::InvalidDimensions {width: size.width(), height: size.height()}
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A probability that was not between 0.0 and 1.0 (inclusive), or was NaN
    #[error("`{name}` must be a probability between 0.0 and 1.0, got {value}")]
    Probability {
        name: &'static str,
        value: f64,
    },
    #[error("`max_walkers` must be at least 1")]
    NoWalkers,
    #[error("at least one candidate dungeon must be generated")]
    NoCandidates,
}
