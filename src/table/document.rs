use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::Canvas,
    foundation::error::{TableshotError, TableshotResult},
    options::style::TextStyle,
    options::title::{TitleOptions, TitleOptionsDef},
    table::model::{Table, TableData},
};

/// JSON-facing description of a table image.
///
/// Cell values may be strings, numbers, booleans or null; they are formatted to text when the
/// document is turned into a [`Table`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDocument {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<serde_json::Value>>,
    #[serde(default = "default_true")]
    pub show_column_names: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_options: Option<TitleOptionsDef>,
    #[serde(default, alias = "col_headers_text_kwargs")]
    pub header_style: TextStyle,
    #[serde(default, alias = "cell_text_kwargs")]
    pub cell_style: TextStyle,
    #[serde(default)]
    pub canvas: Canvas,
    /// Background fill as a CSS color; `None` keeps the surface default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

fn default_true() -> bool {
    true
}

impl TableDocument {
    /// Parse a table document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TableshotResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TableshotError::serde(format!("parse table document JSON: {e}")))
    }

    /// Parse a table document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TableshotResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open table document '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate options and shape, then build the table and its layout.
    pub fn to_table(&self) -> TableshotResult<Table> {
        let title_options = match &self.title_options {
            Some(def) => TitleOptions::try_from(def.clone())?,
            None => TitleOptions::default(),
        };
        let data = TableData::new(
            self.columns.clone(),
            self.rows
                .iter()
                .map(|row| row.iter().map(format_cell).collect())
                .collect(),
        );

        let mut builder = Table::builder(data)
            .show_column_names(self.show_column_names)
            .header_style(self.header_style.clone())
            .cell_style(self.cell_style.clone())
            .title_options(title_options);
        if let Some(title) = &self.title {
            builder = builder.title(title.clone());
        }
        builder.build()
    }

    /// Canvas after checking it is non-empty.
    pub fn canvas(&self) -> TableshotResult<Canvas> {
        Canvas::new(self.canvas.width, self.canvas.height)
    }
}

/// Text shown for one cell value.
pub fn format_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/document.rs"]
mod tests;
