use std::path::Path;

use crate::canvas::{Canvas, Color};

/// Output raster width in pixels.
pub const WIDTH: u32 = 1152;

/// Output raster height in pixels.
pub const HEIGHT: u32 = 768;

/// The flat background color. The original asset was described as a purple
/// gradient, but it has always been this single color.
pub const FILL: Color = Color {
    r: 102,
    g: 126,
    b: 234,
};

/// Where the logo lands, relative to the working directory.
pub const OUTPUT: &str = "logo.png";

/// Render the logo and write it to [`OUTPUT`] in the working directory.
pub fn generate() -> anyhow::Result<()> {
    generate_to(OUTPUT)
}

/// Render the logo and write it to `path`.
pub fn generate_to<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let canvas = Canvas::filled(WIDTH, HEIGHT, FILL);
    canvas.save(path)?;

    log::info!("wrote {}x{} logo to {}", WIDTH, HEIGHT, path.display());

    Ok(())
}
