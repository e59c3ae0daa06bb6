//! Wall clock trait

use crate::state::ClockReading;

/// Source of the current time of day
pub trait ClockSource {
    /// Read the current local time
    fn now(&mut self) -> ClockReading;
}
