// The drawing session: surface lifecycle plus the stroke state machine.
//
// One session owns one surface and the two bits of gesture state that
// gate it: the drawing flag and the last-point anchor. Frontends feed it
// down/move/up events and trigger clear; everything the user sees on the
// surface goes through here.

use log::{debug, info, trace};

use crate::draw;
use crate::error::Error;
use crate::input::PointerInput;
use crate::types::{BACKGROUND_COLOR, Canvas, Point, StrokeStyle};

pub struct DrawSession {
    canvas: Option<Canvas>, // None before initialize() and after teardown()
    origin: Point,          // surface top-left in viewport coordinates
    style: StrokeStyle,
    drawing: bool,          // a down has been seen and no up yet
    last: Option<Point>,    // anchor: latest inked point of the open stroke
}

impl DrawSession {
    /// A session with no surface yet. Handlers fail fast until
    /// `initialize` is called.
    pub fn new() -> Self {
        Self {
            canvas: None,
            origin: Point::new(0.0, 0.0),
            style: StrokeStyle::default(),
            drawing: false,
            last: None,
        }
    }

    /// Allocate the surface and flood it with the background color.
    /// Calling it again discards whatever was drawn and leaves the surface
    /// exactly as a first call would.
    /// Visual: a blank lightgray sheet.
    pub fn initialize(&mut self, width: usize, height: usize) {
        self.canvas = Some(Canvas {
            width,
            height,
            pixels: vec![BACKGROUND_COLOR; width * height],
        });
        info!("surface initialized ({width}x{height})");
    }

    /// Flood the surface with the background color again. Pixel for pixel
    /// the result is the same as a fresh `initialize` at the same size.
    pub fn clear(&mut self) -> Result<(), Error> {
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(Error::SurfaceMissing("clear with no live surface"));
        };
        draw::fill(canvas, BACKGROUND_COLOR);
        debug!("surface cleared");
        Ok(())
    }

    /// Drop the surface. Handlers fail fast afterwards; a gesture left
    /// open across teardown stays open and the next move reports the
    /// missing surface.
    pub fn teardown(&mut self) {
        self.canvas = None;
        info!("surface torn down");
    }

    /// Where the surface's top-left corner sits in the viewport. Events
    /// arrive in viewport coordinates and are shifted by this before any
    /// ink lands.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// The live surface, for presenting or exporting.
    pub fn canvas(&self) -> Result<&Canvas, Error> {
        self.surface("no live surface")
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Down event: open a stroke. The event's own position is not read;
    /// the first move decides where ink lands. A second down while already
    /// drawing just resets the anchor.
    pub fn pointer_down(&mut self, _event: PointerInput) -> Result<(), Error> {
        self.surface("pointer down with no live surface")?;
        self.drawing = true;
        self.last = None;
        debug!("stroke opened");
        Ok(())
    }

    /// Move event: while a stroke is open, stamp one segment from the
    /// anchor to the event's position and advance the anchor. Right after
    /// a down there is no anchor yet, so the segment starts at the event's
    /// own position and leaves a dot. Moves while idle are ignored, even
    /// on a session with no surface.
    pub fn pointer_move(&mut self, event: PointerInput) -> Result<(), Error> {
        if !self.drawing {
            return Ok(());
        }
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(Error::SurfaceMissing("pointer move with no live surface"));
        };
        let p = event.surface_position(self.origin)?;
        let anchor = self.last.unwrap_or(p);
        draw::stroke_segment(canvas, anchor, p, self.style);
        self.last = Some(p);
        trace!(
            "segment ({:.1},{:.1}) -> ({:.1},{:.1})",
            anchor.x, anchor.y, p.x, p.y
        );
        Ok(())
    }

    /// Up event: close the open stroke and forget the anchor. The event's
    /// position is not read; ink only ever lands on moves.
    pub fn pointer_up(&mut self, _event: PointerInput) -> Result<(), Error> {
        self.surface("pointer up with no live surface")?;
        self.drawing = false;
        self.last = None;
        debug!("stroke closed");
        Ok(())
    }

    fn surface(&self, at: &'static str) -> Result<&Canvas, Error> {
        self.canvas.as_ref().ok_or(Error::SurfaceMissing(at))
    }
}

impl Default for DrawSession {
    fn default() -> Self {
        Self::new()
    }
}
