//! Application layer managing the interactive drill workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the menu dispatch loop, the kiosk order state machine, and the warm-up
//! flows.

pub mod menu;
pub mod order;
pub mod warmups;

pub use menu::*;
pub use order::*;
pub use warmups::*;
