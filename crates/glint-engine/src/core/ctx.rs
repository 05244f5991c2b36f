use winit::window::{Window, WindowId};

use crate::device::{Drawable, GlowDriver};
use crate::time::FrameTime;

/// Window handle and metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Context passed to `App::on_init`.
pub struct InitCtx<'a> {
    pub window: WindowCtx<'a>,
    pub gl: &'a GlowDriver,
    pub drawable: Drawable,
}

/// Per-frame context passed to `App::on_frame`.
///
/// `drawable` is read from the window right before the callback, so a resize
/// is visible on the first frame after it.
pub struct FrameCtx<'a> {
    pub window: WindowCtx<'a>,
    pub gl: &'a GlowDriver,
    pub drawable: Drawable,
    pub time: FrameTime,
}
