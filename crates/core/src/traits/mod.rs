//! Core traits for platform services used by the settings store.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Memory-mapped platform implementations live in the root crate

pub mod clock;
pub mod region;

pub use clock::{ClockCorrection, MockClockCorrection};
pub use region::{RegionRead, RegionWrite};
