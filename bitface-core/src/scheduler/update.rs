//! Update scheduler
//!
//! The single owned context of the face. It holds the charging flag and the
//! charge animator, and every host callback lands here with the host passed
//! in explicitly.
//!
//! The charging flag decides who drives redraws:
//!
//! | charging | tick            | animation completion        |
//! |----------|-----------------|-----------------------------|
//! | false    | request redraw  | release, settle             |
//! | true     | ignored         | release, advance, restart   |

use crate::animation::{AnimationPhase, ChargeAnimator, CycleOutcome, SlideAnimation};
use crate::config::FaceConfig;
use crate::render::{compose_frame, Frame};
use crate::state::{ChargeState, Event};
use crate::traits::{AnimationHost, BatteryMonitor, ClockSource, DrawSurface, Host, RedrawRequest};

/// Face update coordinator
///
/// `T` is the host's animation handle type.
#[derive(Debug)]
pub struct UpdateScheduler<T> {
    config: FaceConfig,
    charging: bool,
    animator: ChargeAnimator<T>,
}

impl<T> UpdateScheduler<T> {
    /// Create a scheduler in the not-charging state
    pub fn new(config: FaceConfig) -> Self {
        Self {
            config,
            charging: false,
            animator: ChargeAnimator::new(SlideAnimation::from_config(&config)),
        }
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Check if the animation loop currently owns redraws
    pub fn is_charging(&self) -> bool {
        self.charging
    }

    pub fn phase(&self) -> AnimationPhase {
        self.animator.phase()
    }

    pub fn animator(&self) -> &ChargeAnimator<T> {
        &self.animator
    }

    /// One-time startup
    ///
    /// Seeds the charging state from the battery service, which starts the
    /// animation loop when booting on the charger, then forces the first
    /// frame.
    pub fn start<H>(&mut self, host: &mut H)
    where
        H: Host<Handle = T>,
    {
        let initial = host.peek();
        debug!(
            "starting face, battery {}% charging={}",
            initial.percent(),
            initial.is_charging
        );
        self.on_charge_state_changed(host, initial);
        host.mark_dirty();
    }

    /// Once-per-second timer tick
    ///
    /// Returns true when a redraw was requested.
    pub fn on_tick<H: RedrawRequest>(&mut self, host: &mut H) -> bool {
        if self.charging {
            return false;
        }

        host.mark_dirty();
        true
    }

    /// Battery service change notification
    pub fn on_charge_state_changed<H>(&mut self, host: &mut H, state: ChargeState)
    where
        H: AnimationHost<Handle = T>,
    {
        debug!("battery event: {}%", state.percent());

        if !self.config.charge_animation {
            return;
        }

        if state.is_charging {
            if !self.charging {
                debug!("charging started");
                self.charging = true;
                self.animator.begin_session(host);
            }
        } else if self.charging {
            debug!("charging stopped");
            self.charging = false;
        }
    }

    /// Animation completion callback
    pub fn on_animation_stopped<H>(&mut self, host: &mut H, finished: bool) -> CycleOutcome
    where
        H: AnimationHost<Handle = T>,
    {
        self.animator.on_stopped(host, finished, self.charging)
    }

    /// Compose the frame for the current moment
    ///
    /// The battery is only consulted when not charging; while charging the
    /// battery row shows the animation phase.
    pub fn compose<H>(&self, host: &mut H) -> Frame
    where
        H: ClockSource + BatteryMonitor,
    {
        let clock = host.now();
        let charge = if self.charging {
            ChargeState::charging(0)
        } else {
            ChargeState::discharging(host.peek().percent())
        };

        compose_frame(&clock, &charge, self.animator.phase(), self.config.theme)
    }

    /// Draw callback: compose a frame and paint it
    pub fn draw<H, S>(&self, host: &mut H, surface: &mut S) -> Result<Frame, S::Error>
    where
        H: ClockSource + BatteryMonitor,
        S: DrawSurface,
    {
        let frame = self.compose(host);
        frame.paint(surface)?;
        Ok(frame)
    }

    /// Teardown: cancel any in-flight animation
    ///
    /// The host reports the cancellation through
    /// [`on_animation_stopped`](Self::on_animation_stopped) with
    /// `finished = false`, which releases it without restarting.
    pub fn shutdown<H>(&mut self, host: &mut H)
    where
        H: AnimationHost<Handle = T>,
    {
        debug!("face shutting down");
        self.animator.cancel(host);
    }

    /// Route a host event to its handler
    pub fn dispatch<H>(&mut self, host: &mut H, event: Event)
    where
        H: Host<Handle = T>,
    {
        trace!("event: {}", event);
        match event {
            Event::Tick => {
                self.on_tick(host);
            }
            Event::ChargeChanged(state) => self.on_charge_state_changed(host, state),
            Event::AnimationStopped { finished } => {
                self.on_animation_stopped(host, finished);
            }
        }
    }
}

impl<T> Default for UpdateScheduler<T> {
    fn default() -> Self {
        Self::new(FaceConfig::default())
    }
}
