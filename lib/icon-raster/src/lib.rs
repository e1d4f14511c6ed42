pub mod geometry;
pub mod output;
pub mod raster;
pub mod shape;
pub mod style;
pub mod svg;

pub use geometry::{IconGeometry, PixelBox};
pub use output::{icon_file_name, save_png, save_svg, write_icon_set};
pub use raster::IconRasterizer;
pub use style::{IconStyle, parse_hex_color};

use image::RgbaImage;

pub type IconRasterResult<T> = Result<T, IconRasterError>;

#[derive(thiserror::Error, Debug)]
pub enum IconRasterError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Something that can be painted onto an icon canvas.
///
/// The built-in shapes clip to the canvas and never fail; the `Result` leaves
/// room for shapes that do.
pub trait Shape {
    fn draw(&self, canvas: &mut RgbaImage) -> IconRasterResult<()>;
}
