//! Readings and events
//!
//! Snapshots taken from the host each time an event is handled, and the
//! events the host feeds into the scheduler.

pub mod events;
pub mod reading;

pub use events::Event;
pub use reading::{ChargeState, ClockReading, ReadingError};
