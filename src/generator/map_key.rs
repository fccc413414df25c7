use std::str::FromStr;
use std::fmt;

use rand::{
    rngs::StdRng,
    Rng,
    SeedableRng,
    distributions::{
        Distribution,
        Standard,
    },
};
use base64::DecodeError;

/// The configuration of the encoder/decoder for the seed
const SEED_ENCODER_CONFIG: base64::Config = base64::URL_SAFE_NO_PAD;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidMapKey {
    #[error("map key decoded to the wrong number of bytes (expected {expected}, got {actual})")]
    InvalidLength {
        expected: usize,
        actual: usize,
    },
    #[error("map key is not valid base64: {0}")]
    DecodeError(#[from] DecodeError),
}

/// The seed of the random number generator
type Seed = <StdRng as SeedableRng>::Seed;

/// Uniquely identifies a generated dungeon
///
/// Passing the same key to the generator (with the same configuration) recreates the same
/// dungeon.
///
/// To create a random MapKey, use the `rand::random` function:
///
/// ```rust
/// # use rand::random;
/// # use burrow::MapKey;
/// let map_key: MapKey = random();
/// ```
///
/// MapKeys can be parsed from strings using `.parse()`:
///
/// ```rust,no_run
/// # use burrow::MapKey;
/// let map_key: Result<MapKey, _> = "yourvalidmapkey".parse();
/// ```
///
/// You can get the string representation of a MapKey either with `.to_string()` or
/// by directly using Display `{}` formatting:
///
/// ```rust
/// # use rand::random;
/// # use burrow::MapKey;
/// let map_key: MapKey = random();
/// assert_eq!(format!("{}", map_key), map_key.to_string());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapKey(Seed);

impl MapKey {
    /// Creates a key from the given seed bytes
    pub fn from_seed(seed: Seed) -> Self {
        MapKey(seed)
    }

    /// Returns a fresh random number generator seeded by this key
    pub fn to_rng(self) -> StdRng {
        StdRng::from_seed(self.0)
    }
}

impl Distribution<MapKey> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MapKey {
        MapKey(rng.gen())
    }
}

impl fmt::Debug for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MapKey(\"{}\")", self)
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", base64::encode_config(&self.0, SEED_ENCODER_CONFIG))
    }
}

impl FromStr for MapKey {
    type Err = InvalidMapKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut key: Seed = Default::default();
        let decoded = base64::decode_config(s, SEED_ENCODER_CONFIG)?;
        if decoded.len() != key.len() {
            return Err(InvalidMapKey::InvalidLength {expected: key.len(), actual: decoded.len()});
        }
        key.copy_from_slice(&decoded);
        Ok(MapKey(key))
    }
}
