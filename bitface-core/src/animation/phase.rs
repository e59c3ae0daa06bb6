//! Phase counter for the charging indicator

/// Index of the lit battery dot while charging, 0-6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationPhase(u8);

impl AnimationPhase {
    /// Phase every charging session starts from
    pub const CHARGE_START: Self = Self(1);

    /// Highest phase value reached before wrapping to 0
    pub const MAX: u8 = 6;

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Battery row value lighting exactly the dot at this phase
    pub fn indicator(&self) -> u8 {
        1 << self.0
    }

    /// Step to the next phase after a completed cycle
    ///
    /// The wrap test looks at the value before the increment, so 6 is
    /// reached once before wrapping: 1, 2, 3, 4, 5, 6, 0, 1, ...
    pub fn advance(&mut self) {
        let previous = self.0;
        self.0 += 1;
        if previous > 5 {
            self.0 = 0;
        }
    }
}
