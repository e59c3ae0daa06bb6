//! Charging indicator animation
//!
//! While the charger is connected the battery row shows a single lit dot
//! that steps one position per completed slide animation, looping for as
//! long as charging continues.

pub mod animator;
pub mod phase;
pub mod slide;

pub use animator::{AnimatorState, ChargeAnimator, CycleOutcome};
pub use phase::AnimationPhase;
pub use slide::{Curve, SlideAnimation};
