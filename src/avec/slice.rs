//! Slice-based decoder implementation.

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{
    Decoder,
    header::VersionError,
    record::{Record, Station, StationId},
    value::{AnyVarInt, VarInt},
};

use super::FromRts;
#[cfg(feature = "alloc")]
use super::RtsData;

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice ({needed} bytes needed, {available} available).")]
    UnexpectedEnd { needed: usize, available: usize },
    /// The document version is not supported.
    #[error("Unsupported RTS version ({0}).")]
    UnsupportedVersion(u8),
}

impl From<VersionError> for Error {
    fn from(err: VersionError) -> Self {
        match err {
            VersionError::Unsupported(version) => Self::UnsupportedVersion(version),
        }
    }
}

/// Decode a document from a slice.
///
/// Bytes following the last record are ignored.
///
/// This method is also re-exported as `rts_decoder::avec::decode_slice`.
///
/// _Requires Cargo feature `alloc`._
#[cfg(feature = "alloc")]
pub fn decode(r: &[u8]) -> Result<RtsData, Error> {
    let mut data = RtsData::default();
    decode_into(r, &mut data)?;
    Ok(data)
}

/// Decode a document from a slice, publishing to a receiver.
///
/// Returns the number of bytes decoded. Bytes following the last record are
/// ignored.
///
/// This method is also re-exported as `rts_decoder::avec::decode_slice_into`.
pub fn decode_into(r: &[u8], o: &mut impl FromRts) -> Result<usize, Error> {
    let i = &mut 0; // Offset of the next unread byte.

    let header = Decoder::advance(take(r, i)?)?;

    let (header, mut record) = header.advance(take(r, i)?);
    o.add_header(header);

    loop {
        record = match record {
            Record::Station(state) => decode_station(state, r, i, o)?,
            Record::AreaIntensity(state) => {
                let (area, successor) = state.advance(take(r, i)?);
                log::trace!("Area {}: intensity {}.", area.code, area.intensity);
                o.add_area_intensity(area);
                successor
            }
            Record::Done => break,
        };
    }

    if *i < r.len() {
        log::trace!("Ignoring {} bytes after the last record.", r.len() - *i);
    }

    Ok(*i)
}

fn decode_station(
    state: StationId,
    r: &[u8],
    i: &mut usize,
    o: &mut impl FromRts,
) -> Result<Record, Error> {
    let (id, state) = state.advance(take(r, i)?);
    let (pga, state) = decode_varint(state, r, i)?;
    let (pgv, state) = decode_varint(state, r, i)?;
    let ((intensity, is_alert), successor) = state.advance(take(r, i)?);

    log::trace!("Station {id:08x}: pga {pga}, pgv {pgv}, intensity {intensity}.");

    o.add_station(Station {
        id,
        pga,
        pgv,
        intensity,
        is_alert,
    });

    Ok(successor)
}

fn decode_varint<S>(state: VarInt<S>, r: &[u8], i: &mut usize) -> Result<(f64, S), Error> {
    Ok(match state.advance(take(r, i)?) {
        Left(value) => value,
        Right(AnyVarInt::U16(state)) => state.advance(take(r, i)?),
        Right(AnyVarInt::U24(state)) => state.advance(take(r, i)?),
    })
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let rest = r.get(*i..).unwrap_or_default();

    let bytes = rest.first_chunk::<N>().ok_or(Error::UnexpectedEnd {
        needed: N,
        available: rest.len(),
    })?;

    *i += N;

    Ok(*bytes)
}
