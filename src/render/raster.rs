use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::{
    foundation::error::{TableshotError, TableshotResult},
    render::svg::SvgSurface,
    table::model::Table,
};

/// A rendered image.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Where to look for fonts in addition to the system font set.
#[derive(Clone, Debug, Default)]
pub struct FontOptions {
    pub font_dirs: Vec<PathBuf>,
    /// Skip system fonts; useful for reproducible output from bundled fonts only.
    pub skip_system_fonts: bool,
}

/// Rasterize an SVG document into premultiplied RGBA8.
#[tracing::instrument(skip(svg, fonts), fields(svg_len = svg.len()))]
pub fn rasterize_svg(svg: &str, fonts: &FontOptions) -> TableshotResult<FrameRGBA> {
    let opts = usvg::Options {
        fontdb: build_fontdb(fonts),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
        .map_err(|e| TableshotError::render(format!("parse svg tree: {e}")))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        TableshotError::render(format!("cannot allocate {width}x{height} pixmap"))
    })?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    tracing::debug!(width, height, "rasterized svg");
    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.take(),
        premultiplied: true,
    })
}

/// Draw `table` onto an SVG surface and return the document.
pub fn render_table_svg(table: &Table, mut surface: SvgSurface) -> TableshotResult<String> {
    table.draw(&mut surface)?;
    Ok(surface.finish())
}

/// Draw `table` and rasterize it.
pub fn render_table(
    table: &Table,
    surface: SvgSurface,
    fonts: &FontOptions,
) -> TableshotResult<FrameRGBA> {
    let svg = render_table_svg(table, surface)?;
    rasterize_svg(&svg, fonts)
}

/// Write a frame as PNG, creating parent directories as needed.
pub fn save_png(frame: &FrameRGBA, path: impl AsRef<Path>) -> TableshotResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn build_fontdb(fonts: &FontOptions) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    if !fonts.skip_system_fonts {
        db.load_system_fonts();
    }
    for dir in &fonts.font_dirs {
        load_fonts_from_dir(&mut db, dir);
    }
    if db.is_empty() {
        tracing::warn!("no fonts available; text will not be drawn");
    }
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        let is_font = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"));
        if path.is_file() && is_font {
            if let Err(e) = db.load_font_file(&path) {
                tracing::warn!(path = %path.display(), error = %e, "failed to load font");
            }
        }
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
