//! 3-D scatter view: orbit camera, projection and picking
//!
//! The math is platform-agnostic; the egui surface that paints it is only
//! built with the `wasm` feature.

mod camera;
mod pick;
#[cfg(feature = "wasm")]
mod surface;

pub use camera::{Camera, SceneBounds};
pub use pick::{pick_nearest, ScreenPoint};
#[cfg(feature = "wasm")]
pub use surface::EguiSurface;
