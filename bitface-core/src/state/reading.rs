//! Clock and battery readings
//!
//! Both are immutable snapshots. They are recomputed for every event and
//! never stored past the event that produced them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Battery voltage treated as 0% charge
pub const CELL_EMPTY_MV: u16 = 3300;

/// Battery voltage treated as 100% charge
pub const CELL_FULL_MV: u16 = 4200;

/// Errors produced when building a reading from raw host values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadingError {
    /// A time field is outside its valid range
    OutOfRange,
    /// The host could not provide a value
    Unavailable,
}

/// Wall-clock time of day, 24 hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockReading {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockReading {
    /// Midnight, used before the host clock has been read
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build a reading, rejecting out-of-range fields
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ReadingError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ReadingError::OutOfRange);
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Split into the six decimal digits drawn on the face
    ///
    /// Order: second units, second tens, minute units, minute tens,
    /// hour units, hour tens.
    pub fn digits(&self) -> [u8; 6] {
        [
            self.second % 10,
            self.second / 10,
            self.minute % 10,
            self.minute / 10,
            self.hour % 10,
            self.hour / 10,
        ]
    }
}

/// Battery charge and charger connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChargeState {
    /// Charger connected and charging
    pub is_charging: bool,
    percent: u8,
}

impl ChargeState {
    /// Build a charge state, clamping the percentage to 100
    pub fn new(is_charging: bool, percent: u8) -> Self {
        Self {
            is_charging,
            percent: percent.min(100),
        }
    }

    /// Running on battery
    pub fn discharging(percent: u8) -> Self {
        Self::new(false, percent)
    }

    /// Charger connected
    pub fn charging(percent: u8) -> Self {
        Self::new(true, percent)
    }

    /// Estimate charge from a cell voltage in millivolts
    ///
    /// Linear between [`CELL_EMPTY_MV`] and [`CELL_FULL_MV`].
    pub fn from_millivolts(is_charging: bool, millivolts: u16) -> Self {
        let span = (CELL_FULL_MV - CELL_EMPTY_MV) as u32;
        let above_empty = millivolts.saturating_sub(CELL_EMPTY_MV) as u32;
        let percent = (above_empty * 100 / span).min(100) as u8;
        Self::new(is_charging, percent)
    }

    /// Charge level, 0-100
    pub fn percent(&self) -> u8 {
        self.percent
    }
}
