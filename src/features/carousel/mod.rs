//! Carousel - Title list loading, Turkish ordering and column layout

pub mod collation;
pub mod controller;
pub mod layout;

pub use controller::CarouselLoader;
