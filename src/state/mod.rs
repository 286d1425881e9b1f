//! State - Page State Modules
//!
//! Handlers follow a unidirectional flow:
//!
//! ```text
//! UI Event → Controller Handler → UiState update → Surface writes
//! ```

pub mod ui_state;

pub use ui_state::*;
