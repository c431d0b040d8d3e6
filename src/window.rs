// The on-screen frontend: a minifb window that presents the surface and
// reports the pointer and key state the main loop turns into events.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::types::Canvas;

/// Frames presented per second. Input is polled at the same cadence.
const TARGET_FPS: usize = 60;

pub struct CanvasWindow {
    window: Window, // the on-screen window you see
}

impl CanvasWindow {
    /// Open a window sized to the drawing surface.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(TARGET_FPS);
        Ok(Self { window })
    }

    /// Push the surface's pixels to the screen.
    /// Visual: the window immediately shows the current drawing.
    pub fn present(&mut self, canvas: &Canvas) -> Result<(), Error> {
        self.window
            .update_with_buffer(&canvas.pixels, canvas.width, canvas.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current pointer position in window pixel coordinates (clamped to the
    /// window), or None until the pointer first enters.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Clamp)
    }

    /// Visual: while this is true, ink follows the pointer.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Visual: when pressed, the whole drawing disappears.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Visual: when pressed, image.jpeg lands in the working directory.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}
