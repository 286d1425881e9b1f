//! Scroll Math
//!
//! Pure functions of the scroll position; the controller writes their
//! results to the page.

use crate::constants::{
    NAVBAR_SHADOW, NAVBAR_SHADOW_THRESHOLD, PARALLAX_FACTOR, REVEAL_POINT,
    REVEAL_ROOT_MARGIN_BOTTOM, REVEAL_THRESHOLD,
};
use crate::surface::{ElementId, Viewport};

/// Whether the navbar carries its shadow at this offset
pub fn has_navbar_shadow(offset: f64) -> bool {
    offset > NAVBAR_SHADOW_THRESHOLD
}

/// `box-shadow` value for the navbar at this offset
pub fn navbar_shadow(offset: f64) -> &'static str {
    if has_navbar_shadow(offset) {
        NAVBAR_SHADOW
    } else {
        "none"
    }
}

/// Vertical background offset of a parallax layer
pub fn parallax_offset(offset: f64) -> f64 {
    offset * PARALLAX_FACTOR
}

/// `background-position` value of a parallax layer
pub fn parallax_position(offset: f64) -> String {
    format!("center {}px", parallax_offset(offset))
}

/// Percentage of the scrollable distance covered
///
/// A page no taller than the window has nothing to scroll and reports 0.
pub fn scroll_progress(viewport: &Viewport) -> f64 {
    let scrollable = viewport.document_height - viewport.inner_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    viewport.scroll_y / scrollable * 100.0
}

/// Scroll-path reveal test for an element whose top edge is at `top`
pub fn in_reveal_range(top: f64, inner_height: f64) -> bool {
    top < inner_height - REVEAL_POINT
}

/// One intersection observation of a reveal target
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

/// Options of the reveal observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction at which a target counts as intersecting
    pub threshold: f64,
    /// Offset applied to the bottom of the viewport (negative shrinks it)
    pub root_margin_bottom: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin_bottom: REVEAL_ROOT_MARGIN_BOTTOM,
        }
    }
}

impl ObserverOptions {
    /// Observation for a target at `top` with `height` in a window of `inner_height`
    pub fn observe(&self, target: ElementId, top: f64, height: f64, inner_height: f64) -> IntersectionEntry {
        let root_bottom = inner_height + self.root_margin_bottom;
        let visible = ((top + height).min(root_bottom) - top.max(0.0)).max(0.0);

        let intersection_ratio = if height > 0.0 {
            (visible / height).min(1.0)
        } else if (0.0..root_bottom).contains(&top) {
            1.0
        } else {
            0.0
        };

        IntersectionEntry {
            target,
            is_intersecting: intersection_ratio > 0.0 && intersection_ratio >= self.threshold,
            intersection_ratio,
        }
    }
}
