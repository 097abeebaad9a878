//! SVG drawing surface.
//!
//! Text calls become `<text>` elements on a pixel canvas. The resulting document can be written
//! as-is or rasterized with [`crate::rasterize_svg`].

use std::fmt::Write as _;

use crate::{
    foundation::core::Canvas,
    foundation::error::{TableshotError, TableshotResult},
    options::style::TextStyle,
    render::surface::{HAlign, RenderSurface, TextCall, VAlign},
};

pub(crate) const DEFAULT_FONT_SIZE_PX: f64 = 14.0;
pub(crate) const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub(crate) const DEFAULT_BACKGROUND: &str = "white";

/// Surface that accumulates an SVG document.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    canvas: Canvas,
    background: String,
    axes_ready: bool,
    body: String,
}

impl SvgSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            background: DEFAULT_BACKGROUND.to_string(),
            axes_ready: false,
            body: String::new(),
        }
    }

    /// Background fill as any SVG color string.
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Complete SVG document for everything drawn so far.
    pub fn finish(&self) -> String {
        let Canvas { width, height } = self.canvas;
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{bg}"/>"#,
                "{body}</svg>"
            ),
            w = width,
            h = height,
            bg = quick_xml::escape::escape(self.background.as_str()),
            body = self.body,
        )
    }
}

impl RenderSurface for SvgSurface {
    fn setup_axes(&mut self) -> TableshotResult<()> {
        // Unit extents map onto the full canvas; there are no axis decorations to hide.
        self.axes_ready = true;
        Ok(())
    }

    fn text(&mut self, call: TextCall) -> TableshotResult<()> {
        if !self.axes_ready {
            return Err(TableshotError::render(
                "setup_axes must be called before drawing text",
            ));
        }
        let p = self.canvas.to_pixels(call.anchor);
        let attrs = style_attributes(&call.style)?;
        write!(
            self.body,
            r#"<text x="{:.3}" y="{:.3}" text-anchor="{}" dominant-baseline="{}"{}>{}</text>"#,
            p.x,
            p.y,
            text_anchor(call.h_align),
            dominant_baseline(call.v_align),
            attrs,
            quick_xml::escape::escape(call.text.as_str()),
        )
        .map_err(svg_format_error)?;
        Ok(())
    }
}

fn text_anchor(align: HAlign) -> &'static str {
    match align {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    }
}

fn dominant_baseline(align: VAlign) -> &'static str {
    match align {
        VAlign::Top => "hanging",
        VAlign::Center => "central",
        VAlign::Bottom => "text-after-edge",
    }
}

/// Translate the style keys this surface understands into SVG attributes.
fn style_attributes(style: &TextStyle) -> TableshotResult<String> {
    let font_size = style
        .first_of(&["fontsize", "font_size", "size"])
        .and_then(serde_json::Value::as_f64)
        .unwrap_or(DEFAULT_FONT_SIZE_PX);
    let family = style
        .first_of(&["fontfamily", "font_family", "family"])
        .and_then(serde_json::Value::as_str)
        .unwrap_or(DEFAULT_FONT_FAMILY);
    let fill = style
        .first_of(&["color", "fill", "c"])
        .and_then(serde_json::Value::as_str)
        .unwrap_or("black");

    let mut out = format!(
        r#" font-size="{font_size}" font-family="{}" fill="{}""#,
        quick_xml::escape::escape(family),
        quick_xml::escape::escape(fill),
    );

    if let Some(weight) = style.first_of(&["fontweight", "font_weight", "weight"]) {
        let weight = match weight {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s.clone(),
            _ => String::new(),
        };
        if !weight.is_empty() {
            write!(
                out,
                r#" font-weight="{}""#,
                quick_xml::escape::escape(weight.as_str())
            )
            .map_err(svg_format_error)?;
        }
    }
    if let Some(font_style) = style
        .first_of(&["fontstyle", "font_style", "style"])
        .and_then(serde_json::Value::as_str)
    {
        write!(
            out,
            r#" font-style="{}""#,
            quick_xml::escape::escape(font_style)
        )
        .map_err(svg_format_error)?;
    }
    if let Some(alpha) = style
        .first_of(&["alpha", "opacity"])
        .and_then(serde_json::Value::as_f64)
    {
        write!(out, r#" opacity="{}""#, alpha.clamp(0.0, 1.0)).map_err(svg_format_error)?;
    }

    for (key, _) in style.iter() {
        if !KNOWN_STYLE_KEYS.contains(&key) {
            tracing::debug!(key, "ignoring unsupported text style key");
        }
    }
    Ok(out)
}

fn svg_format_error(e: std::fmt::Error) -> TableshotError {
    TableshotError::render(format!("format svg text element: {e}"))
}

const KNOWN_STYLE_KEYS: &[&str] = &[
    "fontsize",
    "font_size",
    "size",
    "fontfamily",
    "font_family",
    "family",
    "color",
    "fill",
    "c",
    "fontweight",
    "font_weight",
    "weight",
    "fontstyle",
    "font_style",
    "style",
    "alpha",
    "opacity",
];

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
