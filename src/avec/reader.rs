//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{
    Decoder,
    header::VersionError,
    record::{Record, Station, StationId},
    value::{AnyVarInt, VarInt},
};

use super::{FromRts, RtsData};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The reader ended before the document did.
    #[error("Unexpectedly reached the end of the reader ({needed} bytes needed, {available} available).")]
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

/// Decode a document from a reader.
///
/// Reading stops after the last record; the reader is not drained.
///
/// This method is also re-exported as `rts_decoder::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read) -> Result<RtsData, Error> {
    let mut data = RtsData::default();
    decode_into(r, &mut data)?;
    Ok(data)
}

/// Decode a document from a reader, publishing to a receiver.
///
/// Reading stops after the last record; the reader is not drained.
///
/// This method is also re-exported as `rts_decoder::avec::decode_reader_into`.
///
/// _Requires Cargo feature `std`._
pub fn decode_into(r: &mut impl Read, o: &mut impl FromRts) -> Result<(), Error> {
    let header = Decoder::advance(take(r)?)?;

    let (header, mut record) = header.advance(take(r)?);
    o.add_header(header);

    loop {
        record = match record {
            Record::Station(state) => decode_station(state, r, o)?,
            Record::AreaIntensity(state) => {
                let (area, successor) = state.advance(take(r)?);
                log::trace!("Area {}: intensity {}.", area.code, area.intensity);
                o.add_area_intensity(area);
                successor
            }
            Record::Done => break,
        };
    }

    Ok(())
}

fn decode_station(
    state: StationId,
    r: &mut impl Read,
    o: &mut impl FromRts,
) -> Result<Record, Error> {
    let (id, state) = state.advance(take(r)?);
    let (pga, state) = decode_varint(state, r)?;
    let (pgv, state) = decode_varint(state, r)?;
    let ((intensity, is_alert), successor) = state.advance(take(r)?);

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

fn decode_varint<S>(state: VarInt<S>, r: &mut impl Read) -> Result<(f64, S), Error> {
    Ok(match state.advance(take(r)?) {
        Left(value) => value,
        Right(AnyVarInt::U16(state)) => state.advance(take(r)?),
        Right(AnyVarInt::U24(state)) => state.advance(take(r)?),
    })
}

/// Take an exact number of bytes from a reader.
///
/// Unlike `Read::read_exact`, running out of bytes reports how many were
/// available.
fn take<const N: usize>(r: &mut impl Read) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    let mut filled = 0;

    while filled < N {
        match r.read(&mut buf[filled..]) {
            Ok(0) => Err(Error::UnexpectedEnd {
                needed: N,
                available: filled,
            })?,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => Err(err)?,
        }
    }

    Ok(buf)
}
