#![no_std]

//! A decoder for RTS (Real-time Station) data, the compact binary format
//! carrying station-level ground-motion readings and area-level intensity
//! summaries for seismic alerting.
//!
//! A document is a version byte, a fixed header, and two counted sequences of
//! records: stations (identifier, peak ground acceleration and velocity,
//! intensity, alert flag) and area intensities (region code, intensity).
//!
//! Most users should begin with the functions in the [`avec`] module, which
//! decode a byte slice or reader into an [`RtsData`](avec::RtsData) document.
//! Applications needing finer control (such as those running without an
//! allocator) can drive the finite-state machine in the [`sans`] module
//! directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `alloc`: enable the collected document type (default, via `std`).
//! - `std`: enable reader-based decoder (default).

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod avec;
pub mod sans;

pub use sans::{
    header::{EPOCH_MS, RtsHeader, SUPPORTED_VERSION},
    record::{AreaIntensity, Station},
};

#[cfg(feature = "alloc")]
pub use avec::RtsData;
