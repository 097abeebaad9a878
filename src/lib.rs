//! tableshot renders a data table as a static image.
//!
//! The interesting part is geometry: a grid of rows and columns plus an optional title band is
//! partitioned into fractions of the unit square ([`TableLayout`]). Drawing is delegated to a
//! [`RenderSurface`], which receives one `setup_axes` call followed by positioned text calls.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`TitleOptions`] are validated at construction time.
//! 2. **Lay out**: [`Table`] construction checks the data shape and computes a [`TableLayout`].
//! 3. **Draw**: [`Table::draw`] emits text calls to any [`RenderSurface`].
//! 4. **Rasterize** (optional): [`SvgSurface`] output is rendered with `resvg` and saved as PNG.
//!
//! Coordinates use the unit square with the origin at the bottom-left; row 0 is the topmost
//! row.
#![forbid(unsafe_code)]

mod foundation;
mod layout;
mod options;
mod render;
mod table;

pub use foundation::core::{Band, Canvas, Point};
pub use foundation::error::{TableshotError, TableshotResult};
pub use layout::grid::{
    TableLayout, cell_center, compute_column_boundaries, compute_row_boundaries,
    compute_title_and_table_bands, title_anchor_x,
};
pub use options::style::TextStyle;
pub use options::title::{TitleAlignment, TitleLocation, TitleOptions, TitleOptionsDef};
pub use render::raster::{
    FontOptions, FrameRGBA, rasterize_svg, render_table, render_table_svg, save_png,
};
pub use render::surface::{DrawCommand, HAlign, RecordingSurface, RenderSurface, TextCall, VAlign};
pub use render::svg::SvgSurface;
pub use table::document::{TableDocument, format_cell};
pub use table::model::{Table, TableBuilder, TableData, TableStyles};
