//! Update scheduling
//!
//! Routes host events to exactly one drawing cadence: the once-per-second
//! tick while on battery, or the animation loop while charging.

pub mod update;

pub use update::UpdateScheduler;
