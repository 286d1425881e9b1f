//! Theme - Time-of-day Theme and Palette

mod colors;

pub use colors::*;

use chrono::Timelike;

use crate::constants::{DARK_FROM_HOUR, LIGHT_FROM_HOUR};
use crate::domain::preference::Theme;

/// Theme for the given wall-clock time
///
/// Dark from 19:00 until 06:59, light otherwise. Only evaluated at load;
/// a session crossing the boundary keeps its theme.
pub fn compute_theme(now: &impl Timelike) -> Theme {
    theme_for_hour(now.hour())
}

/// Theme for an hour of day (0-23)
pub fn theme_for_hour(hour: u32) -> Theme {
    if (LIGHT_FROM_HOUR..DARK_FROM_HOUR).contains(&hour) {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Image shown by the theme toggle
///
/// The icon offers the opposite mode: a switched-off bulb while dark.
pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "light-off.png",
        Theme::Light => "light-on.png",
    }
}
