use crate::{IconRasterResult, PixelBox, Shape};
use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut},
    rect::Rect,
};

/// Axis aligned solid rectangle
#[derive(Debug, Clone, Copy)]
pub struct FilledRect {
    pub area: PixelBox,
    pub color: Rgba<u8>,
}

impl Shape for FilledRect {
    fn draw(&self, canvas: &mut RgbaImage) -> IconRasterResult<()> {
        // imageproc rejects zero-sized rects
        if self.area.is_empty() {
            return Ok(());
        }

        let rect = Rect::at(self.area.left as i32, self.area.top as i32)
            .of_size(self.area.width(), self.area.height());
        draw_filled_rect_mut(canvas, rect, self.color);

        Ok(())
    }
}

/// Solid circle centered on a pixel
#[derive(Debug, Clone, Copy)]
pub struct FilledDisc {
    pub center: (u32, u32),
    pub radius: u32,
    pub color: Rgba<u8>,
}

impl Shape for FilledDisc {
    fn draw(&self, canvas: &mut RgbaImage) -> IconRasterResult<()> {
        draw_filled_circle_mut(
            canvas,
            (self.center.0 as i32, self.center.1 as i32),
            self.radius as i32,
            self.color,
        );

        Ok(())
    }
}
