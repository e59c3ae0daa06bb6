//! Host service traits
//!
//! These traits define the interface between the face logic and whatever
//! runs it: firmware on a board, a simulator, or a mock in tests. Every
//! service is assumed infallible except painting, whose errors come from
//! the display bus.

pub mod animation;
pub mod battery;
pub mod clock;
pub mod display;

pub use animation::AnimationHost;
pub use battery::BatteryMonitor;
pub use clock::ClockSource;
pub use display::{DrawSurface, RedrawRequest};

/// Every service the update scheduler needs from its host
pub trait Host: ClockSource + BatteryMonitor + AnimationHost + RedrawRequest {}

// Blanket implementation for anything providing all four services
impl<T: ClockSource + BatteryMonitor + AnimationHost + RedrawRequest> Host for T {}
