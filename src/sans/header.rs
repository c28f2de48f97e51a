//! States processing the version byte and document header.

use thiserror::Error;
use zerocopy::FromBytes;

use super::record::{Record, Remaining};

/// The only document version this decoder understands.
pub const SUPPORTED_VERSION: u8 = 1;

/// Unix time in milliseconds of 2026-01-01T00:00:00Z. Header timestamps are
/// stored as a signed offset from this instant.
pub const EPOCH_MS: i64 = 1_767_225_600_000;

/// An error advancing over the version byte.
#[derive(Debug, Error)]
pub enum VersionError {
    /// The document declares a version other than [`SUPPORTED_VERSION`].
    #[error("Unsupported RTS version ({0}).")]
    Unsupported(u8),
}

/// A decoded document header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RtsHeader {
    pub version: u8,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    /// Number of station records that follow.
    pub station_count: u16,
    /// Number of area intensity records that follow the stations.
    pub int_count: u16,
    /// Unused, retained as found.
    pub reserved: u16,
}

/// State token to decode the version byte.
#[derive(Debug)]
pub struct Version;

impl Version {
    /// Transition to another state by decoding the version byte.
    ///
    /// Returns a successor state token, or an error if the version is not
    /// supported. No further bytes should be read after an error.
    pub fn advance(r: [u8; 1]) -> Result<Header, VersionError> {
        match r[0] {
            SUPPORTED_VERSION => Ok(Header(SUPPORTED_VERSION)),
            version => Err(VersionError::Unsupported(version)),
        }
    }
}

/// State token to decode the fixed header fields following the version.
#[derive(Debug)]
pub struct Header(pub(super) u8);

impl Header {
    /// Transition to another state by decoding the header.
    ///
    /// Returns the header, and the state for the first record.
    pub fn advance(self, r: [u8; 11]) -> (RtsHeader, Record) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct HeaderFields {
            time: [u8; 5],
            station_count: [u8; 2],
            int_count: [u8; 2],
            reserved: [u8; 2],
        }

        let HeaderFields {
            time,
            station_count,
            int_count,
            reserved,
        } = zerocopy::transmute!(r);

        let header = RtsHeader {
            version: self.0,
            timestamp_ms: decode_time40(time),
            station_count: u16::from_le_bytes(station_count),
            int_count: u16::from_le_bytes(int_count),
            reserved: u16::from_le_bytes(reserved),
        };

        log::debug!(
            "RTS v{} header at {} ms: {} stations, {} area intensities.",
            header.version,
            header.timestamp_ms,
            header.station_count,
            header.int_count,
        );

        let successor = Record::next(Remaining {
            stations: header.station_count,
            areas: header.int_count,
        });

        (header, successor)
    }
}

/// Convert a little-endian 40-bit signed offset to Unix milliseconds.
pub fn decode_time40(r: [u8; 5]) -> i64 {
    let mut b = [0; 8];
    b[..5].copy_from_slice(&r);

    // Move bit 39 into the sign bit, then shift back to extend it.
    let offset = (i64::from_le_bytes(b) << 24) >> 24;

    EPOCH_MS + offset
}
