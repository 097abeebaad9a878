use std::fmt;
use std::str::FromStr;

use crate::{
    foundation::error::{TableshotError, TableshotResult},
    options::style::TextStyle,
};

/// Vertical placement of the title band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleLocation {
    /// Title above the table.
    #[default]
    Top,
    /// Title below the table.
    Bottom,
}

/// Horizontal alignment of the title text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl TitleLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl TitleAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for TitleLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TitleAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TitleLocation {
    type Err = TableshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(TableshotError::invalid_configuration(format!(
                "title location must be 'top' or 'bottom', got '{other}'"
            ))),
        }
    }
}

impl FromStr for TitleAlignment {
    type Err = TableshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(TableshotError::invalid_configuration(format!(
                "title alignment must be 'left', 'center' or 'right', got '{other}'"
            ))),
        }
    }
}

pub(crate) const DEFAULT_TITLE_HEIGHT: f64 = 0.1;
pub(crate) const DEFAULT_TITLE_PADDING: f64 = 0.01;

/// Validated placement options for a table title.
///
/// Instances only exist in a valid state: every constructor (including deserialization) checks
/// that `height` and `padding` lie in `[0, 1]` and that `height + padding <= 1`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "TitleOptionsDef")]
pub struct TitleOptions {
    location: TitleLocation,
    height: f64,
    alignment: TitleAlignment,
    padding: f64,
    extra_style: TextStyle,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            location: TitleLocation::Top,
            height: DEFAULT_TITLE_HEIGHT,
            alignment: TitleAlignment::Center,
            padding: DEFAULT_TITLE_PADDING,
            extra_style: TextStyle::default(),
        }
    }
}

impl TitleOptions {
    /// Build validated title options.
    pub fn new(
        location: TitleLocation,
        height: f64,
        alignment: TitleAlignment,
        padding: f64,
        extra_style: TextStyle,
    ) -> TableshotResult<Self> {
        validate_fractions(height, padding)?;
        Ok(Self {
            location,
            height,
            alignment,
            padding,
            extra_style,
        })
    }

    pub fn location(&self) -> TitleLocation {
        self.location
    }

    /// Vertical extent of the title band as a fraction of the image.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn alignment(&self) -> TitleAlignment {
        self.alignment
    }

    /// Horizontal inset used by left/right alignment.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn extra_style(&self) -> &TextStyle {
        &self.extra_style
    }

    pub fn with_location(self, location: TitleLocation) -> Self {
        Self { location, ..self }
    }

    pub fn with_alignment(self, alignment: TitleAlignment) -> Self {
        Self { alignment, ..self }
    }

    pub fn with_height(self, height: f64) -> TableshotResult<Self> {
        Self::new(
            self.location,
            height,
            self.alignment,
            self.padding,
            self.extra_style,
        )
    }

    pub fn with_padding(self, padding: f64) -> TableshotResult<Self> {
        Self::new(
            self.location,
            self.height,
            self.alignment,
            padding,
            self.extra_style,
        )
    }

    pub fn with_extra_style(self, extra_style: TextStyle) -> Self {
        Self {
            extra_style,
            ..self
        }
    }
}

fn validate_fractions(height: f64, padding: f64) -> TableshotResult<()> {
    for (name, value) in [("height", height), ("padding", padding)] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(TableshotError::invalid_configuration(format!(
                "title {name} must be within [0, 1], got {value}"
            )));
        }
    }
    if height + padding > 1.0 {
        return Err(TableshotError::invalid_configuration(format!(
            "title height + padding must be <= 1, got {height} + {padding}"
        )));
    }
    Ok(())
}

/// Loosely-typed title options as they appear in documents.
///
/// Enum fields stay strings here so unknown names surface as
/// [`TableshotError::InvalidConfiguration`] on conversion.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleOptionsDef {
    pub location: String,
    pub height: f64,
    pub alignment: String,
    pub padding: f64,
    #[serde(alias = "text_kwargs")]
    pub extra_style: TextStyle,
}

impl Default for TitleOptionsDef {
    fn default() -> Self {
        Self {
            location: TitleLocation::default().to_string(),
            height: DEFAULT_TITLE_HEIGHT,
            alignment: TitleAlignment::default().to_string(),
            padding: DEFAULT_TITLE_PADDING,
            extra_style: TextStyle::default(),
        }
    }
}

impl TryFrom<TitleOptionsDef> for TitleOptions {
    type Error = TableshotError;

    fn try_from(def: TitleOptionsDef) -> Result<Self, Self::Error> {
        Self::new(
            def.location.parse()?,
            def.height,
            def.alignment.parse()?,
            def.padding,
            def.extra_style,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/title.rs"]
mod tests;
