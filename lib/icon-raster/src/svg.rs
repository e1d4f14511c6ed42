//! Vector rendition of the icon, built from the same geometry as the rasters.

use crate::{IconGeometry, IconStyle, PixelBox};
use image::Rgba;
use std::fmt::Write;

pub fn render_svg(geometry: &IconGeometry, style: &IconStyle) -> String {
    let size = geometry.size;
    let primary = svg_color(style.primary);
    let disc = svg_color(style.disc);

    let mut svg = String::new();
    _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    push_rect(&mut svg, &geometry.background(), &primary);

    // pixel centers sit at +0.5
    let c = geometry.center as f64 + 0.5;
    _ = writeln!(
        svg,
        r#"  <circle cx="{c}" cy="{c}" r="{}" {disc}/>"#,
        geometry.circle_radius as f64 + 0.5
    );

    push_rect(&mut svg, &geometry.vertical_bar(), &primary);
    push_rect(&mut svg, &geometry.horizontal_bar(), &primary);
    svg.push_str("</svg>\n");

    svg
}

fn push_rect(svg: &mut String, area: &PixelBox, fill: &str) {
    if area.is_empty() {
        return;
    }

    _ = writeln!(
        svg,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" {fill}/>"#,
        area.left,
        area.top,
        area.width(),
        area.height()
    );
}

fn svg_color(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    if a == 255 {
        format!(r##"fill="#{r:02x}{g:02x}{b:02x}""##)
    } else {
        format!(
            r##"fill="#{r:02x}{g:02x}{b:02x}" fill-opacity="{:.3}""##,
            a as f64 / 255.0
        )
    }
}
