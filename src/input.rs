// Positional input events.
//
// A frontend hands the session two shapes of event: mouse-style (one
// position) and touch-style (a list of active touch points, first one
// wins). The shape is resolved here, once, into a Point; the session
// never looks inside an event itself.

use crate::error::Error;
use crate::types::Point;

/// One pointer event in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mouse-style event carrying a single position.
    Mouse { x: f32, y: f32 },
    /// Touch-style event carrying the active touch points.
    Touch { points: Vec<Point> },
}

impl PointerInput {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self::Mouse { x, y }
    }

    pub fn touch(points: Vec<Point>) -> Self {
        Self::Touch { points }
    }

    /// The event's viewport position.
    ///
    /// A touch event with no active points has no position to draw at;
    /// that is a frontend wiring bug, so it fails fast instead of
    /// defaulting to some corner of the surface.
    pub fn position(&self) -> Result<Point, Error> {
        match self {
            Self::Mouse { x, y } => Ok(Point::new(*x, *y)),
            Self::Touch { points } => points
                .first()
                .copied()
                .ok_or(Error::InvalidEvent("touch event with no touch points")),
        }
    }

    /// The event's position relative to a surface whose top-left corner
    /// sits at `origin` in viewport coordinates.
    pub fn surface_position(&self, origin: Point) -> Result<Point, Error> {
        let p = self.position()?;
        Ok(Point::new(p.x - origin.x, p.y - origin.y))
    }
}
