//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod battery;
pub mod face;
pub mod tick;

pub use battery::{battery_task, BatteryConfig};
pub use face::{face_task, Lcd};
pub use tick::tick_task;
