//! Events delivered by the host

use super::reading::ChargeState;

/// Host events handled by the update scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Once-per-second timer tick
    Tick,
    /// Battery service reported a new charge state
    ChargeChanged(ChargeState),
    /// The in-flight animation cycle stopped
    ///
    /// `finished` is false when the host cancelled it (teardown).
    AnimationStopped { finished: bool },
}
