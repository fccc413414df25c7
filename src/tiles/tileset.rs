use super::TileIndex;

/// Describes how tiles are packed into a tileset image
///
/// Tiles are square and laid out left to right, top to bottom. The image has `margin` pixels
/// around its edge and `spacing` pixels between neighbouring tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilesetLayout {
    pub tile_size: u32,
    pub margin: u32,
    pub spacing: u32,
}

/// The layout of the dungeon tileset (48px tiles, extruded by 1px)
pub const DUNGEON_TILESET: TilesetLayout = TilesetLayout {
    tile_size: 48,
    margin: 1,
    spacing: 2,
};

impl TilesetLayout {
    /// The number of whole tiles that fit in one row of an image with the given width
    pub fn columns(self, image_width: u32) -> u32 {
        let usable = image_width.saturating_sub(2 * self.margin) + self.spacing;
        usable / (self.tile_size + self.spacing)
    }

    /// Returns the top-left pixel (x, y) of the tile with the given index in an image that has
    /// `columns` tiles per row
    pub fn tile_origin(self, index: TileIndex, columns: u32) -> (u32, u32) {
        assert!(columns > 0, "bug: tileset must have at least one column");
        let stride = self.tile_size + self.spacing;
        let col = index % columns;
        let row = index / columns;
        (self.margin + col * stride, self.margin + row * stride)
    }
}
