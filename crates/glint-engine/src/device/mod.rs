//! Graphics device layer.
//!
//! This module is responsible for:
//! - the `Driver` seam every GPU call above it goes through
//! - creating the window, GL surface and current context (`glutin`)
//! - the `glow`-backed driver implementation

mod context;
mod drawable;
mod driver;
mod error;
mod glow_driver;

#[cfg(test)]
pub(crate) mod recording;

pub use context::{GlContext, GlInit};
pub use drawable::Drawable;
pub use driver::{ActiveInfo, AttribLayout, Driver, ShaderStage, UniformCall};
pub use error::ContextUnavailable;
pub use glow_driver::GlowDriver;
