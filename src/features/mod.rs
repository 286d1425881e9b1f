//! Features - Vertical Feature Slices
//!
//! Each feature owns its controller and the pure logic behind it.

pub mod carousel;
pub mod contact;
pub mod effects;
pub mod localization;
pub mod preferences;
