//! Board-agnostic core logic for the Bitface watchface
//!
//! This crate contains everything that decides what the face shows,
//! independent of the display panel or the board it runs on:
//!
//! - Host service traits (clock, battery, animation, redraw, drawing surface)
//! - Binary dot rendering and frame composition
//! - Charge animation state machine
//! - Update scheduler routing ticks and battery events
//! - Configuration types and the `face.toml` loader

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod animation;
pub mod config;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;
