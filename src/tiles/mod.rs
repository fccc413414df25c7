mod mapping;
mod scale;
mod surface;
mod tileset;
#[cfg(feature = "sdl")]
mod png_surface;

pub use self::mapping::*;
pub use self::scale::*;
pub use self::surface::*;
pub use self::tileset::*;
#[cfg(feature = "sdl")]
pub use self::png_surface::*;
