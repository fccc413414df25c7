use std::path::{Path, PathBuf};

use sdl2::{
    image::{LoadSurface, SaveSurface},
    pixels::{Color, PixelFormatEnum},
    rect::Rect,
    surface::Surface,
};

use crate::map::{GridSize, TilePos};

use super::{LayerError, TileIndex, TileLayer, TileSurface, DUNGEON_TILESET};

const EMPTY_COLOR: Color = Color {r: 0, g: 0, b: 0, a: 255};
const FLOOR_COLOR: Color = Color {r: 196, g: 164, b: 112, a: 255};
const WALL_COLOR: Color = Color {r: 60, g: 52, b: 84, a: 255};

#[derive(Debug, Clone, thiserror::Error)]
#[error("SDL error: {0}")]
pub struct SDLError(pub String);

/// A tile surface that can be rendered to a PNG file
///
/// Tiles are drawn from a tileset image if one is given. Otherwise each tile is drawn as a flat
/// color depending on whether it is collidable.
#[derive(Debug, Clone, Default)]
pub struct PngSurface {
    layer: TileLayer,
    tileset: Option<PathBuf>,
}

impl PngSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws tiles from the tileset image at the given path (laid out like `DUNGEON_TILESET`)
    pub fn with_tileset<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            layer: TileLayer::new(),
            tileset: Some(path.into()),
        }
    }

    /// The tiles that have been painted so far
    pub fn layer(&self) -> &TileLayer {
        &self.layer
    }

    pub fn render_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SDLError> {
        let tile_size = self.layer.tile_size();
        let mut canvas = Surface::new(
            self.layer.width_in_pixels(),
            self.layer.height_in_pixels(),
            PixelFormatEnum::RGBA8888,
        ).map_err(SDLError)?;
        canvas.fill_rect(None, EMPTY_COLOR).map_err(SDLError)?;

        let tileset = match &self.tileset {
            Some(path) => Some(Surface::from_file(path).map_err(SDLError)?),
            None => None,
        };
        let columns = tileset.as_ref().map(|tileset| DUNGEON_TILESET.columns(tileset.width())).unwrap_or(0);

        for (TilePos {row, col}, tile) in self.layer.tiles() {
            let index = match tile {
                Some(index) => index,
                None => continue,
            };
            let dest = Rect::new(
                (col as u32 * tile_size) as i32,
                (row as u32 * tile_size) as i32,
                tile_size,
                tile_size,
            );

            match &tileset {
                Some(tileset) if columns > 0 => {
                    let (x, y) = DUNGEON_TILESET.tile_origin(index, columns);
                    let source = Rect::new(x as i32, y as i32, DUNGEON_TILESET.tile_size, DUNGEON_TILESET.tile_size);
                    tileset.blit_scaled(source, &mut canvas, dest).map_err(SDLError)?;
                },
                _ => {
                    let color = if self.layer.is_collision_index(index) { WALL_COLOR } else { FLOOR_COLOR };
                    canvas.fill_rect(dest, color).map_err(SDLError)?;
                },
            }
        }

        canvas.save(path).map_err(SDLError)
    }
}

impl TileSurface for PngSurface {
    type Error = LayerError;

    fn create_blank_layer(&mut self, size: GridSize, tile_size: u32) -> Result<(), Self::Error> {
        self.layer.create_blank_layer(size, tile_size)
    }

    fn put_tiles_at(&mut self, tiles: &[Vec<Option<TileIndex>>], origin: TilePos) -> Result<(), Self::Error> {
        self.layer.put_tiles_at(tiles, origin)
    }

    fn set_collision(&mut self, index: TileIndex) -> Result<(), Self::Error> {
        self.layer.set_collision(index)
    }

    fn width_in_pixels(&self) -> u32 {
        self.layer.width_in_pixels()
    }

    fn height_in_pixels(&self) -> u32 {
        self.layer.height_in_pixels()
    }
}
