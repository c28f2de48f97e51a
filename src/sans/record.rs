//! States processing station and area intensity records.

use zerocopy::FromBytes;

use super::value::{VarInt, intensity, intensity_alert};

/// A ground-motion observation from a single station.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Station {
    /// Opaque identifier, conventionally shown in hexadecimal.
    pub id: u32,
    /// Peak ground acceleration, to two decimal places.
    pub pga: f64,
    /// Peak ground velocity, to two decimal places.
    pub pgv: f64,
    /// Intensity, to one decimal place.
    pub intensity: f64,
    pub is_alert: bool,
}

/// An intensity summary for an area.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AreaIntensity {
    pub code: u16,
    /// Intensity, to one decimal place.
    pub intensity: f64,
}

/// Records left to decode, as declared by the header.
#[derive(Debug, Clone, Copy)]
pub(super) struct Remaining {
    pub(super) stations: u16,
    pub(super) areas: u16,
}

/// The state following the header or a completed record.
#[derive(Debug)]
pub enum Record {
    /// Decode a station record.
    Station(StationId),
    /// Decode an area intensity record.
    AreaIntensity(AreaRecord),
    /// All records declared by the header have been decoded.
    Done,
}

impl Record {
    pub(super) fn next(remaining: Remaining) -> Self {
        if remaining.stations != 0 {
            Self::Station(StationId { remaining })
        } else if remaining.areas != 0 {
            Self::AreaIntensity(AreaRecord {
                remaining: remaining.areas,
            })
        } else {
            Self::Done
        }
    }
}

/// State token to decode a station identifier.
#[derive(Debug)]
pub struct StationId {
    remaining: Remaining,
}

impl StationId {
    /// Transition to another state by decoding a station identifier.
    ///
    /// Returns the identifier, and a state to decode the peak ground
    /// acceleration. This is in turn followed by the peak ground velocity.
    pub fn advance(self, r: [u8; 4]) -> (u32, VarInt<VarInt<StationIntensity>>) {
        let id = u32::from_le_bytes(r);

        let successor = VarInt::new(VarInt::new(StationIntensity {
            remaining: self.remaining,
        }));

        (id, successor)
    }
}

/// State token to decode the packed intensity and alert byte of a station.
#[derive(Debug)]
pub struct StationIntensity {
    remaining: Remaining,
}

impl StationIntensity {
    /// Transition to another state by decoding a station's intensity and
    /// alert flag.
    ///
    /// Returns the intensity, the alert flag, and the state for the next
    /// record.
    pub fn advance(self, r: [u8; 1]) -> ((f64, bool), Record) {
        let successor = Record::next(Remaining {
            stations: self.remaining.stations - 1,
            ..self.remaining
        });

        (intensity_alert(r[0]), successor)
    }
}

/// State token to decode an area intensity record.
#[derive(Debug)]
pub struct AreaRecord {
    remaining: u16,
}

impl AreaRecord {
    /// Transition to another state by decoding an area intensity record.
    ///
    /// Unlike stations, the whole intensity byte is used; there is no alert
    /// flag.
    ///
    /// Returns the record, and the state for the next record.
    pub fn advance(self, r: [u8; 3]) -> (AreaIntensity, Record) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct AreaFields {
            code: [u8; 2],
            intensity: u8,
        }

        let AreaFields { code, intensity: raw } = zerocopy::transmute!(r);

        let area = AreaIntensity {
            code: u16::from_le_bytes(code),
            intensity: intensity(raw),
        };

        let successor = Record::next(Remaining {
            stations: 0,
            areas: self.remaining - 1,
        });

        (area, successor)
    }
}
