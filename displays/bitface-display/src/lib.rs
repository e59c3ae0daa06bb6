//! Display side of the Bitface watchface
//!
//! This crate provides:
//! - `Ls013` driver for the Sharp LS013B7DH05 144x168 memory LCD
//! - `FrameBuffer`, a 1bpp panel image with per-line change tracking
//! - `embedded-graphics` `DrawTarget` support for the framebuffer
//! - `DotSurface`, the face's `DrawSurface` on any monochrome draw target
//!
//! # Architecture
//!
//! The face composes a frame of dot commands in `bitface-core`. The firmware
//! paints that frame through a `DotSurface` into the framebuffer, then
//! `Ls013::flush` sends only the lines that changed.

#![cfg_attr(not(test), no_std)]

pub mod driver;
mod framebuffer;
mod graphics;
pub mod protocol;
pub mod surface;

// Re-export key types
pub use driver::{Config, Error, Ls013};
pub use framebuffer::FrameBuffer;
pub use surface::{to_binary, DotSurface};
