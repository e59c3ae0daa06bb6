//! Minimal TOML parser for `face.toml`
//!
//! Handles only the subset the face needs and does not allocate.
//!
//! Supported:
//! - `[face]` and `[clock]` section headers
//! - `key = value` pairs with string, integer and boolean values
//! - Comments (`# ...`), full line or trailing
//!
//! Unknown sections and keys are rejected so typos do not pass silently.

use core::ops::RangeInclusive;

use super::types::{Theme, WatchConfig};
use crate::render::SCREEN_WIDTH;
use crate::state::ClockReading;

/// Accepted slide lengths (ms)
const SLIDE_DURATION_MS: RangeInclusive<u16> = 1..=u16::MAX;

/// Accepted slide distances (px); the strip never leaves the screen
const SLIDE_OFFSET_PX: RangeInclusive<i16> = 0..=SCREEN_WIDTH;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Unknown key, or a key outside any section
    InvalidKey,
    /// Value of the wrong type or out of range
    InvalidValue,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Face,
    Clock,
}

/// Parse `face.toml` contents
pub fn parse_config(input: &str) -> Result<WatchConfig, ConfigError> {
    let mut config = WatchConfig::default();
    let mut section = Section::Root;
    let (mut hour, mut minute, mut second) = (0u8, 0u8, 0u8);

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidKey)?;

        match (section, key) {
            (Section::Face, "charge_animation") => {
                config.face.charge_animation = parse_bool(value)?;
            }
            (Section::Face, "theme") => {
                config.face.theme = parse_theme(value)?;
            }
            (Section::Face, "slide_duration_ms") => {
                config.face.slide_duration_ms = parse_int_in(value, SLIDE_DURATION_MS)?;
            }
            (Section::Face, "slide_offset_px") => {
                config.face.slide_offset_px = parse_int_in(value, SLIDE_OFFSET_PX)?;
            }
            (Section::Clock, "hour") => hour = parse_int(value)?,
            (Section::Clock, "minute") => minute = parse_int(value)?,
            (Section::Clock, "second") => second = parse_int(value)?,
            _ => return Err(ConfigError::InvalidKey),
        }
    }

    config.initial_time =
        ClockReading::new(hour, minute, second).map_err(|_| ConfigError::InvalidValue)?;

    Ok(config)
}

/// Parse a section header line like "[face]"
fn parse_section_header(line: &str) -> Result<Section, ConfigError> {
    let line = strip_comment(line);
    let name = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ConfigError::InvalidSection)?;

    match name.trim() {
        "face" => Ok(Section::Face),
        "clock" => Ok(Section::Clock),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Drop a trailing comment that is not inside a string
fn strip_comment(text: &str) -> &str {
    match text.find('#') {
        Some(hash_pos) if text[..hash_pos].matches('"').count() % 2 == 0 => {
            text[..hash_pos].trim()
        }
        _ => text,
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

/// Parse an integer and check it against `range`
fn parse_int_in<T>(value: &str, range: RangeInclusive<T>) -> Result<T, ConfigError>
where
    T: core::str::FromStr + PartialOrd,
{
    let parsed = parse_int(value)?;
    if range.contains(&parsed) {
        Ok(parsed)
    } else {
        Err(ConfigError::InvalidValue)
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_theme(value: &str) -> Result<Theme, ConfigError> {
    match parse_string(value) {
        "dark" => Ok(Theme::Dark),
        "light" => Ok(Theme::Light),
        _ => Err(ConfigError::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FaceConfig;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.face, FaceConfig::default());
        assert_eq!(config.initial_time, ClockReading::MIDNIGHT);
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Bitface configuration
[face]
charge_animation = false   # plain face
theme = "light"
slide_duration_ms = 300
slide_offset_px = 12

[clock]
hour = 12
minute = 34
second = 56
"#;

        let config = parse_config(config_str).unwrap();
        assert!(!config.face.charge_animation);
        assert_eq!(config.face.theme, Theme::Light);
        assert_eq!(config.face.slide_duration_ms, 300);
        assert_eq!(config.face.slide_offset_px, 12);
        assert_eq!(config.initial_time, ClockReading::new(12, 34, 56).unwrap());
    }

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("[face]"), Ok(Section::Face));
        assert_eq!(parse_section_header("[ clock ] # boot time"), Ok(Section::Clock));
        assert_eq!(parse_section_header("[stepper]"), Err(ConfigError::InvalidSection));
        assert_eq!(parse_section_header("[face"), Err(ConfigError::InvalidSection));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!(
            parse_config("[face]\ncolour = \"dark\""),
            Err(ConfigError::InvalidKey)
        );
        assert_eq!(parse_config("theme = \"dark\""), Err(ConfigError::InvalidKey));
        assert_eq!(parse_config("[face]\njust some words"), Err(ConfigError::InvalidKey));
    }

    #[test]
    fn test_bad_values_rejected() {
        assert_eq!(
            parse_config("[face]\ncharge_animation = yes"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(parse_config("[face]\ntheme = \"blue\""), Err(ConfigError::InvalidValue));
        assert_eq!(
            parse_config("[face]\nslide_duration_ms = -5"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(parse_config("[clock]\nhour = 24"), Err(ConfigError::InvalidValue));
    }

    #[test]
    fn test_slide_ranges() {
        for bad in [
            "[face]\nslide_offset_px = -32768",
            "[face]\nslide_offset_px = -1",
            "[face]\nslide_offset_px = 145",
            "[face]\nslide_duration_ms = 0",
        ] {
            assert_eq!(parse_config(bad), Err(ConfigError::InvalidValue), "{bad}");
        }

        let config = parse_config("[face]\nslide_offset_px = 144\nslide_duration_ms = 1").unwrap();
        assert_eq!(config.face.slide_offset_px, 144);
        assert_eq!(config.face.slide_duration_ms, 1);

        let slide = crate::animation::SlideAnimation::from_config(&config.face);
        assert_eq!(slide.to.x, -144);
        assert_eq!(slide.to.width, 0);
    }

    #[test]
    fn test_hash_inside_string_kept() {
        assert_eq!(parse_key_value(r#"theme = "a#b""#), Some(("theme", r#""a#b""#)));
        assert_eq!(parse_key_value("hour = 7 # morning"), Some(("hour", "7")));
    }
}
