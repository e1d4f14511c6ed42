use crate::{
    IconGeometry, IconRasterResult, IconStyle, Shape,
    shape::{FilledDisc, FilledRect},
    style::CLEAR,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Draws the circle-and-cross icon at arbitrary pixel sizes.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct IconRasterizer {
    style: IconStyle,
}

impl IconRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    /// Render a `size` x `size` icon.
    ///
    /// Paint order: background square, disc, vertical bar, horizontal bar.
    pub fn render(&self, size: u32) -> IconRasterResult<RgbaImage> {
        let geometry = IconGeometry::from_size(size)?;
        let mut canvas = RgbaImage::from_pixel(size, size, CLEAR);

        for shape in self.shapes(&geometry) {
            shape.draw(&mut canvas)?;
        }

        Ok(canvas)
    }

    fn shapes(&self, geometry: &IconGeometry) -> Vec<Box<dyn Shape>> {
        vec![
            Box::new(FilledRect {
                area: geometry.background(),
                color: self.style.primary,
            }),
            Box::new(FilledDisc {
                center: (geometry.center, geometry.center),
                radius: geometry.circle_radius,
                color: self.style.disc,
            }),
            Box::new(FilledRect {
                area: geometry.vertical_bar(),
                color: self.style.primary,
            }),
            Box::new(FilledRect {
                area: geometry.horizontal_bar(),
                color: self.style.primary,
            }),
        ]
    }
}
