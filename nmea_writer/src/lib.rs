//! # nmea_writer
//!
//! This project is a pure-rust encoder for NMEA-0183 sentences, the ASCII protocol spoken by
//! marine instruments, chart plotters and autopilots.
//!
//! Every sentence is produced in the form `$<talker><id>,<field>,...*<hh>`, where `<hh>` is the
//! XOR checksum of everything between `$` and `*`. No `<CR><LF>` is appended: framing belongs to
//! whatever transport carries the sentences.
//!
//! Generating Sentences
//! ====================
//!
//! The quickest way is to call one of the `generate_*` functions with a talker id and the
//! measured values:
//! ```
//! use nmea_writer::{generate_hdm, generate_mta, talker};
//!
//! assert_eq!(generate_mta(talker::II, 20.5), "$IIMTA,20.5,C*02");
//! assert_eq!(generate_hdm(talker::II, 110.0), "$IIHDM,110,M*3C");
//! ```
//!
//! Each sentence also has a value type implementing [`NmeaSentence`], which can be kept around,
//! (de)serialized with the `serde` feature, or written straight into any `core::fmt::Write`:
//! ```
//! use nmea_writer::{Mwv, NmeaSentence};
//!
//! let wind = Mwv {
//!     wind_speed_knots: 23.45,
//!     wind_angle: 110.0,
//! };
//! let mut out = String::new();
//! wind.write_sentence("II", &mut out).unwrap();
//! assert_eq!(out, "$IIMWV,110.0,R,23.5,N,A*09");
//! ```
//!
//! Transducer Measurements
//! =======================
//!
//! The XDR sentence carries any number of `type,value,unit,name` groups:
//! ```
//! use nmea_writer::{generate_xdr, MeasurementType, TransducerReading};
//!
//! let pressure = TransducerReading::new(MeasurementType::PressureBar, 1.0136, "BMP180");
//! let temperature = TransducerReading::new(MeasurementType::Temperature, 15.5, "BMP180");
//! assert_eq!(
//!     generate_xdr("II", &pressure, &[temperature]),
//!     "$IIXDR,P,1.0136,B,BMP180,C,15.5,C,BMP180*58"
//! );
//! ```
//!
//! Checking Sentences
//! ==================
//!
//! ```
//! assert!(nmea_writer::is_valid_sentence("$IIMTA,20.5,C*02"));
//! assert!(!nmea_writer::is_valid_sentence("$IIMTA,20.5,C*03"));
//! ```
//!
//! no_std Support
//! ==============
//!
//! Disable the default `std` feature to use the crate with only `alloc` available.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
extern crate core;
#[cfg(feature = "serde")]
extern crate serde;

pub use crate::{
    checksum::{checksum, is_valid_sentence, validate_sentence, NmeaChecksum},
    constants::*,
    error::{EmptyReadingsError, SentenceError},
    format::FieldFormat,
    sentences::*,
    transducer::{MeasurementType, TransducerReading},
    types::{Hemisphere, Position},
};

mod checksum;
mod constants;
mod error;
mod format;
mod sentences;
mod transducer;
mod types;
