//! TERMDRILLS - Console Practice Drills Library
//!
//! A suite of small interactive console drills: a menu-driven geometry
//! calculator, a kiosk ordering flow with gated validation, and warm-ups.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
