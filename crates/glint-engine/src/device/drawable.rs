use winit::dpi::PhysicalSize;

/// Drawable size in physical pixels.
///
/// Re-read every frame; the frame driver never caches it across frames.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Drawable {
    pub width: u32,
    pub height: u32,
}

impl Drawable {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<PhysicalSize<u32>> for Drawable {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}
