//! Configuration type definitions

use crate::render::Color;
use crate::state::ClockReading;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Theme {
    /// White dots on black
    #[default]
    Dark,
    /// Black dots on white
    Light,
}

impl Theme {
    pub fn foreground(&self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    pub fn background(&self) -> Color {
        match self {
            Theme::Dark => Color::Black,
            Theme::Light => Color::White,
        }
    }
}

/// Face behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceConfig {
    /// Show the animated charging indicator
    ///
    /// When false the face ignores the charger entirely: it redraws every
    /// second and always shows the battery percentage.
    pub charge_animation: bool,
    /// Colour scheme
    pub theme: Theme,
    /// Length of one charging slide cycle (ms)
    pub slide_duration_ms: u16,
    /// Distance the battery strip slides left (px)
    pub slide_offset_px: i16,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            charge_animation: true,
            theme: Theme::Dark,
            slide_duration_ms: 250,
            slide_offset_px: 10,
        }
    }
}

impl FaceConfig {
    /// Configuration of the plain face without the charging animation
    pub fn simple() -> Self {
        Self {
            charge_animation: false,
            theme: Theme::Light,
            ..Self::default()
        }
    }
}

/// Everything read from `face.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchConfig {
    pub face: FaceConfig,
    /// Time the clock is set to at boot when it has no time of its own
    pub initial_time: ClockReading,
}
