//! Battery service trait

use crate::state::ChargeState;

/// Battery charge and charger state
///
/// Change notifications are pushed by the host into
/// [`UpdateScheduler::on_charge_state_changed`](crate::scheduler::UpdateScheduler::on_charge_state_changed);
/// this trait only covers the synchronous query.
pub trait BatteryMonitor {
    /// Read the latest charge state without waiting
    fn peek(&mut self) -> ChargeState;
}
