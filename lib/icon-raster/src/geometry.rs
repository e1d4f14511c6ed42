use crate::{IconRasterError, IconRasterResult};

/// Circle radius relative to the icon size
pub const CIRCLE_RATIO: f64 = 0.4;

/// Cross bar thickness relative to the icon size
pub const CROSS_WIDTH_RATIO: f64 = 0.11;

/// Cross arm length relative to the icon size
pub const CROSS_LENGTH_RATIO: f64 = 0.58;

/// Half-open pixel rectangle `[left, right) x [top, bottom)` in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelBox {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Proportional measurements of the icon, derived from its pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub center: u32,
    pub circle_radius: u32,
    pub cross_width: u32,
    pub cross_length: u32,
}

impl IconGeometry {
    pub fn from_size(size: u32) -> IconRasterResult<Self> {
        if size == 0 {
            return Err(IconRasterError::InvalidParameter(
                "icon size must be greater than zero".to_string(),
            ));
        }

        // RGBA8 buffer length must fit in memory addressing
        if (size as usize)
            .checked_mul(size as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .is_none()
        {
            return Err(IconRasterError::InvalidParameter(format!(
                "icon size {size} is too large"
            )));
        }

        let geometry = Self {
            size,
            center: size / 2,
            circle_radius: truncated(size, CIRCLE_RATIO),
            cross_width: rounded(size, CROSS_WIDTH_RATIO),
            cross_length: rounded(size, CROSS_LENGTH_RATIO),
        };

        log::debug!("icon geometry for {size}px: {geometry:?}");
        Ok(geometry)
    }

    pub fn background(&self) -> PixelBox {
        PixelBox {
            left: 0,
            top: 0,
            right: self.size,
            bottom: self.size,
        }
    }

    /// Bounding box of the disc. The disc is centered on the center pixel,
    /// so its diameter is `2 * radius + 1`.
    pub fn disc_bounds(&self) -> PixelBox {
        let (start, end) = self.centered_span(self.circle_radius * 2 + 1, self.circle_radius);
        PixelBox {
            left: start,
            top: start,
            right: end,
            bottom: end,
        }
    }

    pub fn vertical_bar(&self) -> PixelBox {
        let (left, right) = self.centered_span(self.cross_width, self.cross_width / 2);
        let (top, bottom) = self.centered_span(self.cross_length, self.cross_length / 2);
        PixelBox {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn horizontal_bar(&self) -> PixelBox {
        let bar = self.vertical_bar();
        PixelBox {
            left: bar.top,
            top: bar.left,
            right: bar.bottom,
            bottom: bar.right,
        }
    }

    // `len` pixels starting `before` pixels ahead of the center, clipped to the canvas.
    fn centered_span(&self, len: u32, before: u32) -> (u32, u32) {
        let start = self.center.saturating_sub(before);
        let end = (start + len).min(self.size);
        (start, end)
    }
}

fn truncated(size: u32, ratio: f64) -> u32 {
    (size as f64 * ratio) as u32
}

fn rounded(size: u32, ratio: f64) -> u32 {
    (size as f64 * ratio).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_192() {
        let geometry = IconGeometry::from_size(192).unwrap();

        assert_eq!(geometry.center, 96);
        assert_eq!(geometry.circle_radius, 76);
        assert_eq!(geometry.cross_width, 21);
        assert_eq!(geometry.cross_length, 111);
    }

    #[test]
    fn test_geometry_512() {
        let geometry = IconGeometry::from_size(512).unwrap();

        assert_eq!(geometry.center, 256);
        assert_eq!(geometry.circle_radius, 204);
        assert_eq!(geometry.cross_width, 56);
        assert_eq!(geometry.cross_length, 297);
    }

    #[test]
    fn test_zero_size_rejected() {
        let result = IconGeometry::from_size(0);
        assert!(matches!(result, Err(IconRasterError::InvalidParameter(_))));
    }

    #[test]
    fn test_too_large_size_rejected() {
        for size in [4_000_000_000, u32::MAX] {
            let result = IconGeometry::from_size(size);
            assert!(
                matches!(result, Err(IconRasterError::InvalidParameter(_))),
                "size {size}"
            );
        }
    }

    #[test]
    fn test_cross_follows_rounding() {
        for size in [1, 7, 16, 48, 96, 192, 333, 512, 1024] {
            let geometry = IconGeometry::from_size(size).unwrap();
            let round = |ratio: f64| (size as f64 * ratio).round() as u32;

            assert_eq!(geometry.cross_width, round(CROSS_WIDTH_RATIO), "width at {size}");
            assert_eq!(geometry.cross_length, round(CROSS_LENGTH_RATIO), "length at {size}");
        }
    }

    #[test]
    fn test_radius_within_one_pixel_of_rounding() {
        for size in [1, 7, 16, 48, 96, 192, 333, 512, 1024] {
            let geometry = IconGeometry::from_size(size).unwrap();
            let expected = (size as f64 * CIRCLE_RATIO).round();

            assert!(
                (geometry.circle_radius as f64 - expected).abs() <= 1.0,
                "radius at {size}"
            );
        }
    }

    #[test]
    fn test_bars_have_exact_extent() {
        let geometry = IconGeometry::from_size(512).unwrap();
        let vertical = geometry.vertical_bar();
        let horizontal = geometry.horizontal_bar();

        assert_eq!(vertical.width(), 56);
        assert_eq!(vertical.height(), 297);
        assert_eq!(vertical.left, 256 - 28);
        assert_eq!(vertical.top, 256 - 148);
        assert_eq!(horizontal.width(), 297);
        assert_eq!(horizontal.height(), 56);
    }

    #[test]
    fn test_disc_bounds_centered() {
        let geometry = IconGeometry::from_size(192).unwrap();
        let disc = geometry.disc_bounds();

        assert_eq!(disc.left, 96 - 76);
        assert_eq!(disc.right, 96 + 76 + 1);
        assert_eq!(disc.width(), disc.height());
    }

    #[test]
    fn test_tiny_size_has_empty_bars() {
        let geometry = IconGeometry::from_size(4).unwrap();

        assert_eq!(geometry.cross_width, 0);
        assert!(geometry.vertical_bar().is_empty());
        assert!(geometry.horizontal_bar().is_empty());
        assert_eq!(geometry.background().width(), 4);
    }

    #[test]
    fn test_boxes_stay_inside_canvas() {
        for size in 1..64 {
            let geometry = IconGeometry::from_size(size).unwrap();
            for area in [
                geometry.disc_bounds(),
                geometry.vertical_bar(),
                geometry.horizontal_bar(),
            ] {
                assert!(area.right <= size && area.bottom <= size, "size {size}");
            }
        }
    }
}
