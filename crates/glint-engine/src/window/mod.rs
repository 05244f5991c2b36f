//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single window, and drives the app one
//! frame per redraw: each frame ends by requesting the next redraw, so the
//! loop is iterative and never nests.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
