use crate::{IconRasterError, IconRasterResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::Rgba;

/// Material blue, shared by the background square and the cross
pub const DEFAULT_PRIMARY: Rgba<u8> = Rgba([33, 150, 243, 255]);

pub const DEFAULT_DISC: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Starting canvas: transparent white
pub const CLEAR: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Icon colors
#[derive(Debug, Clone, Copy, PartialEq, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct IconStyle {
    /// Background square and cross
    #[derivative(Default(value = "DEFAULT_PRIMARY"))]
    pub primary: Rgba<u8>,
    #[derivative(Default(value = "DEFAULT_DISC"))]
    pub disc: Rgba<u8>,
}

impl IconStyle {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`; the leading `#` is optional.
pub fn parse_hex_color(text: &str) -> IconRasterResult<Rgba<u8>> {
    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(IconRasterError::InvalidColor(format!(
            "expected #RRGGBB or #RRGGBBAA, got `{text}`"
        )));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|e| IconRasterError::InvalidColor(format!("{text}: {e}")))
    };

    let alpha = if hex.len() == 8 { channel(3)? } else { 255 };
    Ok(Rgba([channel(0)?, channel(1)?, channel(2)?, alpha]))
}
