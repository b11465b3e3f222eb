//! Platform-independent UI state.
//!
//! Nothing in here touches the DOM: hosts feed measurements and clicks in,
//! and read booleans / enums back out.

pub mod reveal_toggle;
pub mod scroll_proximity;

pub use reveal_toggle::*;
pub use scroll_proximity::*;
