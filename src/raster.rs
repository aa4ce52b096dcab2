//! SVG to PNG rasterization.
//!
//! The layout engine only needs to hand the composed SVG document to
//! usvg/resvg and get pixels back; text shaping uses the system font
//! database, loaded once per process.

use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use image::RgbaImage;
use tiny_skia::{Pixmap, Transform};
use usvg::{fontdb, Options, Tree};

static FONTDB: OnceLock<Arc<fontdb::Database>> = OnceLock::new();

fn font_database() -> Arc<fontdb::Database> {
    FONTDB
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            Arc::new(db)
        })
        .clone()
}

/// Rasterize an SVG document to a PNG buffer of exactly width x height.
pub fn rasterize(svg: &str, width: u32, height: u32) -> Result<Vec<u8>> {
    let options = Options {
        fontdb: font_database(),
        font_family: "DejaVu Sans".to_string(),
        text_rendering: usvg::TextRendering::GeometricPrecision,
        shape_rendering: usvg::ShapeRendering::GeometricPrecision,
        ..Options::default()
    };

    let tree = Tree::from_str(svg, &options).context("Failed to parse wallpaper SVG")?;

    let mut pixmap = Pixmap::new(width, height).context("Failed to create pixmap")?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let img = RgbaImage::from_raw(width, height, rgba)
        .context("Failed to create image buffer from pixmap")?;

    let mut png_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut png_bytes), image::ImageFormat::Png)
        .context("Failed to encode PNG")?;

    Ok(png_bytes)
}
