//! States and conversions for the packed values shared by records.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;

/// Divisor applied to variable-length integers, giving two decimal places.
pub const VARINT_SCALE: f64 = 100.0;

/// Subtracted from a tenth of the raw intensity byte.
pub const INTENSITY_OFFSET: f64 = 3.0;

/// State token to decode a variable-length integer, followed by state `S`.
#[derive(Debug)]
pub struct VarInt<S> {
    pub(super) successor: S,
}

impl<S> VarInt<S> {
    pub(super) fn new(successor: S) -> Self {
        Self { successor }
    }

    /// Transition to another state by decoding a variable-length integer
    /// marker.
    ///
    /// Returns either the scaled value and the successor state, or a state to
    /// decode a wider payload.
    pub fn advance(self, r: [u8; 1]) -> Either<(f64, S), AnyVarInt<S>> {
        let successor = self.successor;

        match r[0] {
            0xFD => Right(AnyVarInt::U16(VarIntPayload { successor })),
            0xFE => Right(AnyVarInt::U24(VarIntPayload { successor })),
            0xFF => {
                // Undefined by the format.
                log::warn!("Found undefined variable-length integer marker, substituting zero.");
                Left((0.0, successor))
            }
            marker => Left((scale(marker.into()), successor)),
        }
    }
}

/// State token to decode the `N`-byte little-endian payload of a
/// variable-length integer, followed by state `S`.
#[derive(Debug)]
pub struct VarIntPayload<S, const N: usize> {
    pub(super) successor: S,
}

impl<S, const N: usize> VarIntPayload<S, N> {
    /// Transition to another state by decoding a variable-length integer
    /// payload.
    ///
    /// Returns the scaled value, and the successor state.
    pub fn advance(self, r: [u8; N]) -> (f64, S) {
        let mut b = [0; 4];
        b[..N].copy_from_slice(&r);

        (scale(u32::from_le_bytes(b)), self.successor)
    }
}

/// A `VarIntPayload` state token for a payload width.
#[derive(Debug)]
pub enum AnyVarInt<S> {
    U16(VarIntPayload<S, 2>),
    U24(VarIntPayload<S, 3>),
}

fn scale(raw: u32) -> f64 {
    f64::from(raw) / VARINT_SCALE
}

/// Convert a packed intensity and alert byte.
///
/// The low seven bits hold the intensity, and the high bit the alert flag.
pub fn intensity_alert(r: u8) -> (f64, bool) {
    bitfield! {
        struct IntensityAlert(u8) {
            [0..7] magnitude: u8,
            [7] is_alert,
        }
    }

    let packed = IntensityAlert(r);

    (intensity(packed.magnitude()), packed.is_alert())
}

/// Convert a raw intensity byte to a value with one decimal place.
pub fn intensity(raw: u8) -> f64 {
    round_tenths(f64::from(raw) / 10.0 - INTENSITY_OFFSET)
}

/// Round to one decimal place, with ties away from zero.
///
/// `f64::round` is not available without `std`.
fn round_tenths(x: f64) -> f64 {
    let scaled = x * 10.0;
    let whole = scaled as i64 as f64;
    let fraction = scaled - whole;

    let rounded = if fraction >= 0.5 {
        whole + 1.0
    } else if fraction <= -0.5 {
        whole - 1.0
    } else {
        whole
    };

    rounded / 10.0
}
