use crate::graph::Position;

/// A point in screen (client) coordinates, as delivered by a drop event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas transform: model space is shown shifted by `pan` and scaled by `zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Screen position of the model origin.
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(pan_x: f64, pan_y: f64, zoom: f64) -> Self {
        Self { pan_x, pan_y, zoom }
    }

    /// Converts drop coordinates into a model-space position.
    ///
    /// A non-positive or non-finite zoom is treated as `1.0`.
    pub fn screen_to_flow(&self, point: ScreenPoint) -> Position {
        let zoom = if self.zoom.is_finite() && self.zoom > 0.0 {
            self.zoom
        } else {
            1.0
        };
        Position::new((point.x - self.pan_x) / zoom, (point.y - self.pan_y) / zoom)
    }
}
