//! UI Constants
//!
//! Centralized constants for the page behaviors and the markup contract.

use std::time::Duration;

/// Storage key holding the persisted language code
pub const LANGUAGE_STORAGE_KEY: &str = "lang";

/// Hours bounding the light theme: [LIGHT_FROM_HOUR, DARK_FROM_HOUR)
pub const LIGHT_FROM_HOUR: u32 = 7;
pub const DARK_FROM_HOUR: u32 = 19;

/// Navbar shadow appears once the page is scrolled past this offset
pub const NAVBAR_SHADOW_THRESHOLD: f64 = 100.0;
pub const NAVBAR_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";

/// Parallax background moves at half the scroll speed
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Scroll-path reveal: element top must be above `viewport - REVEAL_POINT`
pub const REVEAL_POINT: f64 = 150.0;

/// Reveal observer options
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN_BOTTOM: f64 = -100.0;

/// Carousel rows per column
pub const CAROUSEL_COLUMN_SIZE: usize = 7;

/// Notification lifetime
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Default relative locations of external resources
pub const DEFAULT_TITLE_LIST: &str = "titlelist.txt";
pub const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Class names of the markup contract
pub mod class {
    pub const SCROLL_FADE: &str = "scroll-fade";
    pub const VISIBLE: &str = "visible";
    pub const PARALLAX: &str = "parallax";
    pub const NAVBAR: &str = "navbar";
    pub const NAV_CONTACT: &str = "nav-contact";
    pub const CONTACT_LINK: &str = "contact-link";
    pub const LANG_OPTION: &str = "lang-option";
    pub const LANG_WRAPPER: &str = "lang-toggle-wrapper";
    pub const ACTIVE: &str = "active";
    pub const CAROUSEL_COLUMN: &str = "carousel-column";
    pub const CAROUSEL_TITLE: &str = "carousel-title";
    pub const SUBMIT_BUTTON: &str = "submit-button";
    pub const HIDDEN: &str = "hidden";
    pub const SHOW: &str = "show";
    pub const NOTIFICATION: &str = "notification";
}

/// Element ids of the markup contract
pub mod id {
    pub const LANG_TOGGLE: &str = "langToggle";
    pub const THEME_TOGGLE: &str = "themeToggle";
    pub const THEME_ICON: &str = "themeIcon";
    pub const TITLE_CAROUSEL: &str = "titleCarousel";
    pub const CONTACT_FORM: &str = "contactForm";
    pub const CONTACT_NAME: &str = "contactName";
    pub const CONTACT_EMAIL: &str = "contactEmail";
    pub const CONTACT_MESSAGE: &str = "contactMessage";
    pub const SUCCESS_MESSAGE: &str = "successMessage";
    pub const BACK_BUTTON: &str = "backButton";
    pub const CONTACT_SECTION: &str = "contact";
    pub const BODY: &str = "body";
    pub const ROOT: &str = "html";
}
