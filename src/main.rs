#![deny(unused_must_use)]

use std::num::NonZeroUsize;
#[cfg(feature = "sdl")]
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use simplelog::LevelFilter;

use burrow::{
    generator::DEFAULT_ITERATIONS,
    tiles::{LayerError, DEFAULT_SCALE},
    DungeonGenerator, EmittedMap, GenerateError, GridSize, MapKey, TileEmitter, TileGrid, TileLayer,
    WalkerConfig,
};

/// Carves a random dungeon out of solid rock
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The width of the dungeon in tiles
    #[arg(long, env = "BURROW_WIDTH", default_value_t = 50)]
    width: usize,
    /// The height of the dungeon in tiles
    #[arg(long, env = "BURROW_HEIGHT", default_value_t = 50)]
    height: usize,
    /// Generate the dungeon with this key again instead of generating a new one
    #[arg(short, long, env = "BURROW_KEY")]
    key: Option<MapKey>,
    /// Generate this many dungeons and keep the one closest to 20% floor
    #[arg(long, default_value_t = 1)]
    candidates: usize,
    /// The number of steps the walkers take
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,
    /// The number of tiles (in each direction) that each cell of the dungeon becomes
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: NonZeroUsize,
    /// Don't print the dungeon to the terminal
    #[arg(short, long)]
    quiet: bool,
    /// Log the details of each generation step
    #[arg(short, long)]
    verbose: bool,
    /// Render the tile map to this PNG file
    #[cfg(feature = "sdl")]
    #[arg(long, value_name = "PATH")]
    png: Option<PathBuf>,
    /// Draw tiles from this tileset image (48px tiles, 1px margin, 2px spacing)
    #[cfg(feature = "sdl")]
    #[arg(long, value_name = "PATH", requires = "png")]
    tileset: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Layer(#[from] LayerError),
    #[error("unable to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[cfg(feature = "sdl")]
    #[error(transparent)]
    Render(#[from] burrow::tiles::SDLError),
}

fn init_logging(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let generator = DungeonGenerator {
        size: GridSize::new(args.width, args.height),
        walk: WalkerConfig {
            iterations: args.iterations,
            ..WalkerConfig::default()
        },
        candidates: args.candidates,
        ..DungeonGenerator::default()
    };
    let key = args.key.unwrap_or_else(rand::random);

    let dungeon = generator.generate_with_key(key).map_err(|err| {
        error!("Unable to generate a dungeon: {}", err);
        err
    })?;
    info!("Map Key: {}", dungeon.key);

    if !args.quiet {
        println!("{:?}", dungeon.grid);
    }

    let emitter = TileEmitter {
        factor: args.scale,
        ..TileEmitter::default()
    };
    let map = emit(&args, &emitter, &dungeon.grid)?;
    info!("Tile map is {}x{} px, player starts at ({}, {})",
        map.width_px, map.height_px, map.player_start.x, map.player_start.y);

    Ok(())
}

#[cfg(feature = "sdl")]
fn emit(args: &Args, emitter: &TileEmitter, grid: &TileGrid) -> Result<EmittedMap, AppError> {
    use burrow::tiles::PngSurface;

    let path = match &args.png {
        Some(path) => path,
        None => return emit_to_layer(emitter, grid),
    };

    let mut surface = match &args.tileset {
        Some(tileset) => PngSurface::with_tileset(tileset.clone()),
        None => PngSurface::new(),
    };
    let map = emitter.emit(grid, &mut surface)?;
    surface.render_to_file(path)?;
    info!("Rendered tile map to `{}`", path.display());

    Ok(map)
}

#[cfg(not(feature = "sdl"))]
fn emit(_args: &Args, emitter: &TileEmitter, grid: &TileGrid) -> Result<EmittedMap, AppError> {
    emit_to_layer(emitter, grid)
}

fn emit_to_layer(emitter: &TileEmitter, grid: &TileGrid) -> Result<EmittedMap, AppError> {
    let mut layer = TileLayer::new();
    Ok(emitter.emit(grid, &mut layer)?)
}
