//! radio_settings_core - Pure no_std settings logic for the radio's backup RAM
//!
//! This crate contains the platform-agnostic layout, validation and
//! checksum code of the settings store, testable on host without any
//! feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Region access and clock correction injected via traits
//! - **Silent repair**: Invalid stored data is replaced, never reported
//!
//! # Modules
//!
//! - [`range`]: Clip-on-write / reset-on-read bounds policy
//! - [`bitfield`]: Offset + width descriptor for packed words
//! - [`settings`]: Record layout, region image, checksum and cache
//! - [`traits`]: Region access capabilities and the clock-correction sink

#![no_std]

pub mod bitfield;
pub mod range;
pub mod settings;
pub mod traits;

pub use range::RangeGuard;
pub use settings::{RegionImage, SettingsCache, SettingsRecord};
