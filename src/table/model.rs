use crate::{
    foundation::error::{TableshotError, TableshotResult},
    layout::grid::TableLayout,
    options::style::TextStyle,
    options::title::TitleOptions,
    render::surface::{HAlign, RenderSurface, TextCall, VAlign},
};

/// Column names plus rows of already-formatted cell text.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Check that the grid is non-empty and rectangular.
    pub fn validate(&self) -> TableshotResult<()> {
        if self.columns.is_empty() {
            return Err(TableshotError::invalid_configuration(
                "table must have at least one column",
            ));
        }
        for (idx, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(TableshotError::invalid_configuration(format!(
                    "row {idx} has {} cells, expected {}",
                    row.len(),
                    self.columns.len()
                )));
            }
        }
        Ok(())
    }
}

/// Text styles for column names and data cells.
///
/// The title style lives in [`TitleOptions::extra_style`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableStyles {
    pub header: TextStyle,
    pub cell: TextStyle,
}

/// A table ready to be drawn.
///
/// The layout is computed on construction from the data shape, the header flag and the title
/// options; build a new `Table` after changing any of them.
#[derive(Clone, Debug)]
pub struct Table {
    data: TableData,
    show_column_names: bool,
    styles: TableStyles,
    title: Option<String>,
    title_options: TitleOptions,
    layout: TableLayout,
}

impl Table {
    /// Build a table with column names shown, default styles and no title.
    pub fn new(data: TableData) -> TableshotResult<Self> {
        TableBuilder::new(data).build()
    }

    pub fn builder(data: TableData) -> TableBuilder {
        TableBuilder::new(data)
    }

    pub fn data(&self) -> &TableData {
        &self.data
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn title_options(&self) -> &TitleOptions {
        &self.title_options
    }

    pub fn show_column_names(&self) -> bool {
        self.show_column_names
    }

    pub fn styles(&self) -> &TableStyles {
        &self.styles
    }

    /// Draw title, column names and cells onto `surface`.
    ///
    /// Issues one [`RenderSurface::setup_axes`] call first, then text calls in the order title,
    /// headers, cells (row-major).
    #[tracing::instrument(skip_all, fields(rows = self.data.rows.len(), columns = self.data.columns.len()))]
    pub fn draw(&self, surface: &mut dyn RenderSurface) -> TableshotResult<()> {
        surface.setup_axes()?;

        if let Some(title) = &self.title {
            surface.text(TextCall {
                anchor: self.layout.title_anchor(&self.title_options),
                text: title.clone(),
                h_align: self.title_options.alignment().into(),
                v_align: VAlign::Center,
                style: self.title_options.extra_style().clone(),
            })?;
        }

        if self.show_column_names {
            for (col, name) in self.data.columns.iter().enumerate() {
                surface.text(TextCall {
                    anchor: self.layout.header_center(col)?,
                    text: name.clone(),
                    h_align: HAlign::Center,
                    v_align: VAlign::Center,
                    style: self.styles.header.clone(),
                })?;
            }
        }

        for (row, cells) in self.data.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                surface.text(TextCall {
                    anchor: self.layout.data_center(row, col)?,
                    text: cell.clone(),
                    h_align: HAlign::Center,
                    v_align: VAlign::Center,
                    style: self.styles.cell.clone(),
                })?;
            }
        }

        tracing::debug!("table drawn");
        Ok(())
    }
}

/// Builder for [`Table`].
#[derive(Clone, Debug)]
pub struct TableBuilder {
    data: TableData,
    show_column_names: bool,
    styles: TableStyles,
    title: Option<String>,
    title_options: TitleOptions,
}

impl TableBuilder {
    pub fn new(data: TableData) -> Self {
        Self {
            data,
            show_column_names: true,
            styles: TableStyles::default(),
            title: None,
            title_options: TitleOptions::default(),
        }
    }

    pub fn show_column_names(mut self, show: bool) -> Self {
        self.show_column_names = show;
        self
    }

    pub fn header_style(mut self, style: TextStyle) -> Self {
        self.styles.header = style;
        self
    }

    pub fn cell_style(mut self, style: TextStyle) -> Self {
        self.styles.cell = style;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_options(mut self, options: TitleOptions) -> Self {
        self.title_options = options;
        self
    }

    /// Validate the data shape and compute the layout.
    pub fn build(self) -> TableshotResult<Table> {
        self.data.validate()?;
        let (n_rows, n_columns) = self.data.shape();
        let layout = TableLayout::compute(
            n_rows,
            n_columns,
            self.show_column_names,
            self.title.as_ref().map(|_| &self.title_options),
        )?;
        Ok(Table {
            data: self.data,
            show_column_names: self.show_column_names,
            styles: self.styles,
            title: self.title,
            title_options: self.title_options,
            layout,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/model.rs"]
mod tests;
