//! Inter-task communication
//!
//! The face task owns all face state. Other tasks only feed it through
//! these statics.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use bitface_core::state::ChargeState;

/// Charge state change from the battery task
pub static CHARGE_SIGNAL: Signal<CriticalSectionRawMutex, ChargeState> = Signal::new();

/// Latest battery sample, read synchronously by the face's battery peek
///
/// `None` until the first sample lands.
pub static BATTERY_STATE: Mutex<CriticalSectionRawMutex, Cell<Option<ChargeState>>> =
    Mutex::new(Cell::new(None));

/// Most recent battery sample
pub fn latest_charge() -> Option<ChargeState> {
    BATTERY_STATE.lock(|state| state.get())
}
