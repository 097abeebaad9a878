//! Unit-square geometry for a table: title band, table band and cell boundaries.
//!
//! All coordinates are fractions of the drawing surface with the origin at the bottom-left, so
//! row boundaries run downward from the top of the table band.

use crate::{
    foundation::core::{Band, Point, linspace},
    foundation::error::{TableshotError, TableshotResult},
    options::title::{TitleAlignment, TitleLocation, TitleOptions},
};

/// Split the unit height into a title band and the table band that remains.
///
/// Without a title the title band is the degenerate `(0, 0)` and the table fills `(0, 1)`.
pub fn compute_title_and_table_bands(
    title_present: bool,
    location: TitleLocation,
    height: f64,
) -> (Band, Band) {
    if !title_present {
        return (Band::EMPTY, Band::UNIT);
    }
    match location {
        TitleLocation::Top => (Band::new(1.0 - height, 1.0), Band::new(0.0, 1.0 - height)),
        TitleLocation::Bottom => (Band::new(0.0, height), Band::new(height, 1.0)),
    }
}

/// `n_columns + 1` evenly spaced x boundaries from 0 to 1.
pub fn compute_column_boundaries(n_columns: usize) -> TableshotResult<Vec<f64>> {
    if n_columns == 0 {
        return Err(TableshotError::invalid_configuration(
            "table must have at least one column",
        ));
    }
    Ok(linspace(0.0, 1.0, n_columns + 1))
}

/// Evenly spaced y boundaries over `table_band`, ordered top to bottom.
///
/// When `show_header` is set one extra row is reserved at index 0 for column names.
pub fn compute_row_boundaries(
    table_band: Band,
    n_rows: usize,
    show_header: bool,
) -> TableshotResult<Vec<f64>> {
    let rows = n_rows + usize::from(show_header);
    if rows == 0 {
        return Err(TableshotError::invalid_configuration(
            "table must have at least one row",
        ));
    }
    Ok(linspace(table_band.high, table_band.low, rows + 1))
}

/// X coordinate of the title anchor for the given alignment.
pub fn title_anchor_x(alignment: TitleAlignment, padding: f64) -> f64 {
    match alignment {
        TitleAlignment::Left => padding,
        TitleAlignment::Right => 1.0 - padding,
        TitleAlignment::Center => 0.5,
    }
}

/// Center of the cell at `(row_index, col_index)`.
///
/// Row 0 is the topmost row; with headers shown it holds the column names and data row `r`
/// lives at `r + 1`.
pub fn cell_center(
    row_boundaries: &[f64],
    column_boundaries: &[f64],
    row_index: usize,
    col_index: usize,
) -> TableshotResult<Point> {
    let y = interval_midpoint(row_boundaries, row_index)
        .ok_or_else(|| out_of_range("row", row_index, row_boundaries.len()))?;
    let x = interval_midpoint(column_boundaries, col_index)
        .ok_or_else(|| out_of_range("column", col_index, column_boundaries.len()))?;
    Ok(Point::new(x, y))
}

fn interval_midpoint(boundaries: &[f64], idx: usize) -> Option<f64> {
    let lo = *boundaries.get(idx)?;
    let hi = *boundaries.get(idx.checked_add(1)?)?;
    Some((lo + hi) / 2.0)
}

fn out_of_range(axis: &str, idx: usize, n_boundaries: usize) -> TableshotError {
    TableshotError::invalid_configuration(format!(
        "{axis} index {idx} is out of range for {} {axis}s",
        n_boundaries.saturating_sub(1)
    ))
}

/// Complete geometry for one table shape.
///
/// Computed once from the data shape and options; any change to either requires a fresh
/// [`TableLayout::compute`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TableLayout {
    pub title_band: Band,
    pub table_band: Band,
    pub column_boundaries: Vec<f64>,
    pub row_boundaries: Vec<f64>,
    /// Whether row 0 is reserved for column names.
    pub show_header: bool,
}

impl TableLayout {
    /// Compute the layout for `n_rows` data rows and `n_columns` columns.
    ///
    /// `title` carries the options of a present title; `None` means no title band.
    #[tracing::instrument(skip(title), fields(has_title = title.is_some()))]
    pub fn compute(
        n_rows: usize,
        n_columns: usize,
        show_header: bool,
        title: Option<&TitleOptions>,
    ) -> TableshotResult<Self> {
        let (location, height) = title
            .map(|o| (o.location(), o.height()))
            .unwrap_or((TitleLocation::Top, 0.0));
        let (title_band, table_band) =
            compute_title_and_table_bands(title.is_some(), location, height);
        let column_boundaries = compute_column_boundaries(n_columns)?;
        let row_boundaries = compute_row_boundaries(table_band, n_rows, show_header)?;

        tracing::debug!(
            rows = row_boundaries.len() - 1,
            columns = column_boundaries.len() - 1,
            table_low = table_band.low,
            table_high = table_band.high,
            "computed table layout"
        );

        Ok(Self {
            title_band,
            table_band,
            column_boundaries,
            row_boundaries,
            show_header,
        })
    }

    /// Number of column intervals.
    pub fn n_columns(&self) -> usize {
        self.column_boundaries.len().saturating_sub(1)
    }

    /// Number of row intervals, including the header row when shown.
    pub fn n_rows(&self) -> usize {
        self.row_boundaries.len().saturating_sub(1)
    }

    /// Anchor point for the title text.
    pub fn title_anchor(&self, options: &TitleOptions) -> Point {
        Point::new(
            title_anchor_x(options.alignment(), options.padding()),
            self.title_band.midpoint(),
        )
    }

    /// Center of the header cell for column `col`.
    pub fn header_center(&self, col: usize) -> TableshotResult<Point> {
        if !self.show_header {
            return Err(TableshotError::invalid_configuration(
                "layout has no header row",
            ));
        }
        cell_center(&self.row_boundaries, &self.column_boundaries, 0, col)
    }

    /// Center of the data cell at (`row`, `col`), accounting for the header row.
    pub fn data_center(&self, row: usize, col: usize) -> TableshotResult<Point> {
        let row_index = row
            .checked_add(usize::from(self.show_header))
            .ok_or_else(|| out_of_range("row", row, self.row_boundaries.len()))?;
        cell_center(&self.row_boundaries, &self.column_boundaries, row_index, col)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
