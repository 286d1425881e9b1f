//! Colors - Notification Palette

/// Folio color palette - All colors are accessed via associated functions
pub struct FolioColors;

impl FolioColors {
    // Status colors
    /// Success - Green
    pub fn success() -> &'static str { "#4CAF50" }
    /// Error - Red
    pub fn danger() -> &'static str { "#f44336" }

    // Text colors
    /// Text on status backgrounds
    pub fn text_light() -> &'static str { "white" }
}

/// Inline style of a floating notification, in declaration order
pub fn notification_style(background: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![
        ("position", "fixed"),
        ("top", "80px"),
        ("right", "20px"),
        ("padding", "15px 20px"),
        ("background", background),
        ("color", FolioColors::text_light()),
        ("border-radius", "4px"),
        ("z-index", "1000"),
        ("animation", "slideIn 0.3s ease-in"),
        ("max-width", "300px"),
        ("font-size", "14px"),
    ]
}
