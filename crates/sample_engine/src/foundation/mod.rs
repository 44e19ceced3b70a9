//! Foundation module - Core utilities and types
//!
//! - Math type aliases over `nalgebra`
//! - Logging setup

pub mod logging;
pub mod math;
