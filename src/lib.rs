//! Carves dungeons out of solid rock with a drunkard's walk and turns them into tile maps.
//!
//! Generation happens in two steps:
//!
//! 1. A [`DungeonGenerator`] (or the lower level [`generate`] function) simulates walkers that
//!    turn every wall tile they visit into floor, producing a [`TileGrid`].
//! 2. A [`TileEmitter`] scales that grid up and paints it onto a [`TileSurface`], e.g. the tile
//!    layer of a game engine.
//!
//! Every dungeon is generated from a [`MapKey`], so any dungeon can be generated again.

#![deny(unused_must_use)]

pub mod generator;
pub mod map;
pub mod tiles;

pub use crate::generator::{
    generate, ConfigError, DungeonGenerator, GenDungeon, GenerateError, MapKey, WalkerConfig,
};
pub use crate::map::{GridSize, GridSpace, TileGrid, TilePos};
pub use crate::tiles::{scale_grid, EmittedMap, TileEmitter, TileLayer, TileSurface};
