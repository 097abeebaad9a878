use crate::foundation::error::{TableshotError, TableshotResult};

pub use kurbo::Point;

/// A `(low, high)` fractional interval along one axis of the unit square.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Band {
    /// Lower edge.
    pub low: f64,
    /// Upper edge.
    pub high: f64,
}

impl Band {
    /// The degenerate band at the origin, used for an absent title.
    pub const EMPTY: Self = Self::new(0.0, 0.0);
    /// The full axis.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// Build a band from its edges.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Midpoint of the band; this is the anchor coordinate for text placed in it.
    pub fn midpoint(self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// `high - low`.
    pub fn extent(self) -> f64 {
        self.high - self.low
    }

    /// Whether the band covers no area.
    pub fn is_empty(self) -> bool {
        self.extent() == 0.0
    }
}

/// Output image dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> TableshotResult<Self> {
        if width == 0 || height == 0 {
            return Err(TableshotError::invalid_configuration(
                "canvas width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Map a unit-square point (y up) to pixel coordinates (y down).
    pub fn to_pixels(self, p: Point) -> Point {
        Point::new(
            p.x * f64::from(self.width),
            (1.0 - p.y) * f64::from(self.height),
        )
    }
}

/// `num` evenly spaced values from `start` to `stop`, both inclusive.
///
/// The final element is exactly `stop` so partitions close without drift.
pub(crate) fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut out: Vec<f64> = (0..num).map(|i| start + (i as f64) * step).collect();
            out[num - 1] = stop;
            out
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
