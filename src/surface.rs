// Drawing target for the backdrop. The browser canvas implements this in
// `canvas.rs`; tests use a recording fake.

use crate::color::Color;
use std::fmt;

/// The surface went away mid-frame (canvas detached, context lost).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SurfaceLost;

impl fmt::Display for SurfaceLost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drawing surface is no longer available")
    }
}

impl std::error::Error for SurfaceLost {}

pub trait Surface {
    /// Checked before every frame; returning false halts the loop quietly.
    fn is_available(&self) -> bool {
        true
    }

    fn set_size(&mut self, width: u32, height: u32);

    fn clear(&mut self, width: f64, height: f64) -> Result<(), SurfaceLost>;

    fn fill_circle(
        &mut self,
        center: [f64; 2],
        radius: f64,
        color: &Color,
    ) -> Result<(), SurfaceLost>;

    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        color: &Color,
        line_width: f64,
    ) -> Result<(), SurfaceLost>;
}
