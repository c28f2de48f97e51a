#![cfg(feature = "std")]

use std::path::Path;

use csv::ReaderBuilder;
use rts_decoder::{
    AreaIntensity, RtsHeader, Station,
    avec::{FromRts, RtsData},
};

const PATH: &str = "fixtures/sample.rts";

#[test]
fn decode_slice_into_sample() {
    init_logger();
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    let read = rts_decoder::avec::decode_slice_into(&data, &mut validator).unwrap();
    validator.finish();
    assert_eq!(read, data.len());
}

#[test]
fn decode_reader_into_sample() {
    init_logger();
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    rts_decoder::avec::decode_reader_into(&mut file, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_slice_sample() {
    init_logger();
    let data = std::fs::read(PATH).unwrap();
    let document = rts_decoder::avec::decode_slice(&data).unwrap();
    validate_document(&document);
}

#[test]
fn decode_reader_sample() {
    init_logger();
    let mut file = std::fs::File::open(PATH).unwrap();
    let document = rts_decoder::avec::decode_reader(&mut file).unwrap();
    validate_document(&document);
}

#[test]
fn decode_slice_and_reader_agree() {
    let data = std::fs::read(PATH).unwrap();
    let from_slice = rts_decoder::avec::decode_slice(&data).unwrap();
    let from_reader = rts_decoder::avec::decode_reader(&mut data.as_slice()).unwrap();
    assert_eq!(from_slice, from_reader);
}

fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn validate_document(document: &RtsData) {
    let mut validator = Validator::new(PATH);

    validator.add_header(document.header);
    for station in &document.stations {
        validator.add_station(*station);
    }
    for area in &document.area_intensities {
        validator.add_area_intensity(*area);
    }

    validator.finish();

    assert_eq!(document.stations.len(), document.header.station_count as usize);
    assert_eq!(document.area_intensities.len(), document.header.int_count as usize);
}

/// Compares published values against rows of the fixture's CSV companion.
struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn next_row(&mut self, kind: &str) -> Vec<String> {
        let mut row = self.0.remove(0);
        assert_eq!(row.remove(0), kind);
        row
    }

    fn finish(&self) {
        assert!(self.0.is_empty(), "{} rows were not decoded", self.0.len());
    }
}

impl FromRts for Validator {
    fn add_header(&mut self, header: RtsHeader) {
        let row = self.next_row("header");
        let found = [
            header.version.to_string(),
            header.timestamp_ms.to_string(),
            header.station_count.to_string(),
            header.int_count.to_string(),
            header.reserved.to_string(),
        ];
        assert_eq!(row, found);
    }

    fn add_station(&mut self, station: Station) {
        let row = self.next_row("station");
        let found = [
            station.id.to_string(),
            station.pga.to_string(),
            station.pgv.to_string(),
            station.intensity.to_string(),
            station.is_alert.to_string(),
        ];
        assert_eq!(row, found);
    }

    fn add_area_intensity(&mut self, area: AreaIntensity) {
        let row = self.next_row("area");
        let found = [area.code.to_string(), area.intensity.to_string()];
        assert_eq!(row, found);
    }
}
