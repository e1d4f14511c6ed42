//! Persisting rendered icons.

use crate::{IconRasterResult, IconRasterizer};
use image::{ImageFormat, RgbaImage};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const SVG_FILE_NAME: &str = "icon.svg";

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Encode `image` as an RGBA PNG at `dir/icon-{size}.png`, creating `dir` if needed.
pub fn save_png(image: &RgbaImage, dir: impl AsRef<Path>, size: u32) -> IconRasterResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(icon_file_name(size));
    image.save_with_format(&path, ImageFormat::Png)?;
    log::info!("saved {}", path.display());

    Ok(path)
}

pub fn save_svg(svg: &str, dir: impl AsRef<Path>) -> IconRasterResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(SVG_FILE_NAME);
    fs::write(&path, svg)?;
    log::info!("saved {}", path.display());

    Ok(path)
}

/// Render and save every size in order. Stops at the first failure.
pub fn write_icon_set(
    rasterizer: &IconRasterizer,
    dir: impl AsRef<Path>,
    sizes: &[u32],
) -> IconRasterResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut paths = Vec::with_capacity(sizes.len());

    for &size in sizes {
        log::info!("generating {size}x{size} icon...");
        let icon = rasterizer.render(size)?;
        paths.push(save_png(&icon, dir, size)?);
    }

    Ok(paths)
}
