//! Core infrastructure
//!
//! Logging macros shared by the firmware glue.

pub mod logging;
