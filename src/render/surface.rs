use crate::{
    foundation::core::Point, foundation::error::TableshotResult, options::style::TextStyle,
    options::title::TitleAlignment,
};

/// Horizontal alignment of text relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical alignment of text relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl From<TitleAlignment> for HAlign {
    fn from(value: TitleAlignment) -> Self {
        match value {
            TitleAlignment::Left => HAlign::Left,
            TitleAlignment::Center => HAlign::Center,
            TitleAlignment::Right => HAlign::Right,
        }
    }
}

/// One text element handed to a surface, positioned in unit-square coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextCall {
    pub anchor: Point,
    pub text: String,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub style: TextStyle,
}

/// A drawing target for table text.
///
/// Coordinates are fractions of the surface with the origin at the bottom-left.
pub trait RenderSurface {
    /// Fix extents to `[0, 1] x [0, 1]` and hide axis decorations. Called once before any text.
    fn setup_axes(&mut self) -> TableshotResult<()>;

    /// Draw one text element.
    fn text(&mut self, call: TextCall) -> TableshotResult<()>;
}

/// A call observed by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetupAxes,
    Text(TextCall),
}

/// Surface that records every call instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the text calls, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextCall> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t),
            DrawCommand::SetupAxes => None,
        })
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl RenderSurface for RecordingSurface {
    fn setup_axes(&mut self) -> TableshotResult<()> {
        self.commands.push(DrawCommand::SetupAxes);
        Ok(())
    }

    fn text(&mut self, call: TextCall) -> TableshotResult<()> {
        self.commands.push(DrawCommand::Text(call));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
