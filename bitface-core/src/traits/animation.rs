//! Animation facility trait

use crate::animation::SlideAnimation;

/// Host animation engine
///
/// The host runs one [`SlideAnimation`] per scheduled handle, redraws the
/// face on each animation frame, and reports completion by calling
/// [`UpdateScheduler::on_animation_stopped`](crate::scheduler::UpdateScheduler::on_animation_stopped)
/// with `finished = true`, or `finished = false` if it was cancelled.
pub trait AnimationHost {
    /// Token for one scheduled animation
    type Handle;

    /// Create and start an animation
    fn schedule(&mut self, slide: &SlideAnimation) -> Self::Handle;

    /// Release a stopped animation
    fn destroy(&mut self, handle: Self::Handle);

    /// Stop the running animation early
    ///
    /// The host must still deliver a completion with `finished = false`.
    fn cancel(&mut self);
}
