//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals. See [`crate::avec`] for implementations covering common
//! decoding patterns.
//!
//! # Architecture
//!
//! All states are represented by a non-copy token. Once enough bytes are
//! ready, transition to another state by calling the token's `advance` method.
//! Each `advance` takes exactly the bytes its field occupies, and returns a
//! successor state token along with any extracted data.
//!
//! A document moves through the following states, never skipping one:
//!
//! 1. [`Decoder`]: the version byte. Anything other than
//!    [`SUPPORTED_VERSION`](header::SUPPORTED_VERSION) is rejected.
//! 2. [`Header`](header::Header): timestamp, record counts, and the reserved
//!    field.
//! 3. A [`Record`](record::Record) per station, then one per area intensity,
//!    bounded by the counts in the header. A station passes through
//!    [`StationId`](record::StationId), two [`VarInt`](value::VarInt)
//!    values, and [`StationIntensity`](record::StationIntensity).
//! 4. [`Record::Done`](record::Record::Done).
//!
//! Variable-length integers first decode a marker byte. Depending on the
//! marker, this either completes the value or yields a payload state taking a
//! further two or three bytes.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed. Some areas of the decoding process are not represented in the
//! finite-state machine and must be carefully written:
//!
//! - Reading bytes from the correct place in the document, including buffering
//! as necessary.
//!
//! - Reporting running out of bytes. The machine never sees a short read.
//!
//! Implementers are recommended to begin by studying and modifying a decoder
//! from the [`crate::avec`] module.

pub mod header;
pub mod record;
pub mod value;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::Version;
