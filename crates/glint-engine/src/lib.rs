//! Glint engine crate.
//!
//! A small OpenGL layer for shader demos: a driver seam, program
//! introspection into name-keyed setter tables, a fullscreen-quad frame
//! driver, and the window runtime that calls it once per display refresh.

pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod shader;
pub mod time;
pub mod window;
