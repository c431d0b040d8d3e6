#![warn(clippy::all, rust_2018_idioms)]

pub mod draw;
pub mod error;
pub mod export;
pub mod input;
pub mod session;
pub mod types;
pub mod window;

pub use error::Error;
pub use input::PointerInput;
pub use session::DrawSession;
pub use types::{BACKGROUND_COLOR, Canvas, Point, StrokeStyle};
