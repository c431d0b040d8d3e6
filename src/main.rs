// What you SEE when this runs:
// • An 800x400 lightgray canvas in its own window.
// • Hold Left Mouse and drag: a 3 px black line follows the pointer.
// • C wipes the canvas back to blank. S saves image.jpeg in the working
//   directory. ESC (or closing the window) quits.

use log::info;

use inkpad::export;
use inkpad::window::CanvasWindow;
use inkpad::{DrawSession, Error, PointerInput};

/// Fixed surface dimensions, set once at startup (no resizing).
const SURFACE_WIDTH: usize = 800;
const SURFACE_HEIGHT: usize = 400;

fn main() -> Result<(), Error> {
    env_logger::init();

    /* --- Window + session setup ---
       Visual: window opens showing a blank lightgray sheet. */
    let mut window = CanvasWindow::new(
        "Inkpad (LMB: draw, C: clear, S: save, ESC: quit)",
        SURFACE_WIDTH,
        SURFACE_HEIGHT,
    )?;
    let mut session = DrawSession::new();
    session.initialize(SURFACE_WIDTH, SURFACE_HEIGHT);
    info!("controls: hold LMB to draw, C clears, S exports, ESC quits");

    /* --- Pointer edge detection ---
       minifb reports button *level*; the session wants down/move/up
       events, so remember the previous frame's state. The last cursor
       position backs the up event when the release lands off-window. */
    let mut was_down = false;
    let mut cursor = (0.0_f32, 0.0_f32);

    /* ------------------------------ Main loop ------------------------------ */
    while window.is_open() && !window.esc_pressed() {
        /* 1) Explicit triggers. */
        if window.c_pressed_once() {
            session.clear()?; // visual: the drawing disappears
        }
        if window.s_pressed_once() {
            export::save_jpeg(session.canvas()?)?; // visual: nothing; image.jpeg appears on disk
        }

        /* 2) Pointer: newly pressed -> down; held and moved -> move;
              newly released -> up. Unmoved frames emit nothing. */
        let down = window.left_mouse_down();
        if let Some((x, y)) = window.mouse_pos() {
            let moved = (x, y) != cursor;
            cursor = (x, y);
            if down && !was_down {
                session.pointer_down(PointerInput::mouse(x, y))?;
            } else if down && moved {
                session.pointer_move(PointerInput::mouse(x, y))?; // visual: ink follows the pointer
            }
        }
        if !down && was_down {
            session.pointer_up(PointerInput::mouse(cursor.0, cursor.1))?;
        }
        was_down = down;

        /* 3) Present (this is when the on-screen image updates). */
        window.present(session.canvas()?)?;
    }

    Ok(())
}
