//! Charge animator state machine
//!
//! ```text
//!            start_cycle()             stopped(finished=true, charging)
//!   Idle ─────────────────▶ Running ──────────────────────────────────┐
//!    ▲                        │  │                                    │
//!    │  stopped(finished=true, not charging)                          │
//!    ├────────────────────────┘  │          phase.advance()           │
//!    │  stopped(finished=false)  │          start_cycle() ◀───────────┘
//!    └───────────────────────────┘
//! ```
//!
//! At most one animation is ever in flight: the host handle is stored while
//! the cycle runs and [`ChargeAnimator::start_cycle`] refuses to schedule a
//! second one.

use super::phase::AnimationPhase;
use super::slide::SlideAnimation;
use crate::traits::AnimationHost;

/// Animator states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimatorState {
    /// No cycle in flight
    Idle,
    /// One slide cycle scheduled with the host
    Running,
}

/// What a completion callback led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// Cycle finished, phase advanced and the next cycle started
    Restarted,
    /// Cycle finished after charging ended; animator is idle
    Settled,
    /// Cycle was cancelled by the host; nothing advanced
    Cancelled,
    /// No cycle was in flight; the callback was ignored
    Spurious,
}

/// Owns the charging animation loop
///
/// `T` is the host's animation handle, held for exactly as long as the
/// cycle runs.
#[derive(Debug)]
pub struct ChargeAnimator<T> {
    phase: AnimationPhase,
    slide: SlideAnimation,
    in_flight: Option<T>,
}

impl<T> ChargeAnimator<T> {
    /// Create an idle animator
    pub fn new(slide: SlideAnimation) -> Self {
        Self {
            phase: AnimationPhase::default(),
            slide,
            in_flight: None,
        }
    }

    pub fn state(&self) -> AnimatorState {
        if self.in_flight.is_some() {
            AnimatorState::Running
        } else {
            AnimatorState::Idle
        }
    }

    /// Check if a cycle is in flight
    pub fn is_running(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Slide scheduled for every cycle
    pub fn slide(&self) -> &SlideAnimation {
        &self.slide
    }

    /// Begin a charging session: reset the phase and start the loop
    pub fn begin_session<A>(&mut self, host: &mut A)
    where
        A: AnimationHost<Handle = T>,
    {
        self.phase = AnimationPhase::CHARGE_START;
        self.start_cycle(host);
    }

    /// Schedule one slide cycle
    ///
    /// Returns false without touching the host when a cycle is already in
    /// flight.
    pub fn start_cycle<A>(&mut self, host: &mut A) -> bool
    where
        A: AnimationHost<Handle = T>,
    {
        if self.in_flight.is_some() {
            trace!("cycle already running, start ignored");
            return false;
        }

        self.in_flight = Some(host.schedule(&self.slide));
        trace!("cycle started at phase {}", self.phase.value());
        true
    }

    /// Handle the host's completion callback
    ///
    /// The animation is released on every path. Only a finished cycle
    /// while still `charging` advances the phase and loops.
    pub fn on_stopped<A>(&mut self, host: &mut A, finished: bool, charging: bool) -> CycleOutcome
    where
        A: AnimationHost<Handle = T>,
    {
        let Some(handle) = self.in_flight.take() else {
            warn!("animation stopped with no cycle in flight");
            return CycleOutcome::Spurious;
        };
        host.destroy(handle);

        if !finished {
            debug!("cycle cancelled at phase {}", self.phase.value());
            return CycleOutcome::Cancelled;
        }

        if !charging {
            debug!("charging ended, animation settled");
            return CycleOutcome::Settled;
        }

        self.phase.advance();
        self.start_cycle(host);
        CycleOutcome::Restarted
    }

    /// Ask the host to cancel the in-flight cycle, if any
    ///
    /// The host answers with a `finished = false` completion.
    pub fn cancel<A>(&mut self, host: &mut A)
    where
        A: AnimationHost<Handle = T>,
    {
        if self.in_flight.is_some() {
            debug!("cancelling in-flight cycle");
            host.cancel();
        }
    }
}

impl<T> Default for ChargeAnimator<T> {
    fn default() -> Self {
        Self::new(SlideAnimation::default())
    }
}
