//! Utils - Configuration Loading

pub mod config_store;
