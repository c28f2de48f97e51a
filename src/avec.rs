//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode documents from data slices and
//! readers. Those suffixed `_into` publish to the [`FromRts`] trait, without
//! allocating. The others collect an [`RtsData`] document.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::sans::{
    header::RtsHeader,
    record::{AreaIntensity, Station},
};

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
#[cfg(feature = "std")]
pub use reader::decode_into as decode_reader_into;
#[cfg(feature = "alloc")]
pub use slice::decode as decode_slice;
pub use slice::decode_into as decode_slice_into;

/// Receive the parts of a document, in the order they are stored.
///
/// Decoding stops at the first error, so a receiver may have been given some
/// records of a document that later failed to decode.
///
/// The default implementation of each method ignores received values.
#[allow(unused_variables)]
pub trait FromRts {
    /// Add the document header. Called once, before any record.
    fn add_header(&mut self, header: RtsHeader) {}
    /// Add a station record.
    fn add_station(&mut self, station: Station) {}
    /// Add an area intensity record. Called after all stations.
    fn add_area_intensity(&mut self, area: AreaIntensity) {}
}

/// A fully decoded document.
///
/// Holds exactly `header.station_count` stations and `header.int_count` area
/// intensities, in the order they were stored.
///
/// _Requires Cargo feature `alloc`._
#[cfg(feature = "alloc")]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RtsData {
    pub header: RtsHeader,
    pub stations: Vec<Station>,
    pub area_intensities: Vec<AreaIntensity>,
}

#[cfg(feature = "alloc")]
impl FromRts for RtsData {
    fn add_header(&mut self, header: RtsHeader) {
        self.stations.reserve_exact(header.station_count.into());
        self.area_intensities.reserve_exact(header.int_count.into());
        self.header = header;
    }

    fn add_station(&mut self, station: Station) {
        self.stations.push(station);
    }

    fn add_area_intensity(&mut self, area: AreaIntensity) {
        self.area_intensities.push(area);
    }
}
