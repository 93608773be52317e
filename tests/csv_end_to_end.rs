//! End-to-end decode of a CSV document through the csv crate.

use chrono::NaiveDate;
use rowfill::prelude::*;

#[derive(RowRecord, Debug, Default, Clone, PartialEq)]
pub struct Trip {
    #[mapping(column = "traveler")]
    pub traveler: String,
    #[mapping(column = "speed_mph", default = "88")]
    pub speed_mph: i64,
    #[mapping(column = "departed", time_format = "%Y-%m-%d %H:%M")]
    pub departed: chrono::NaiveDateTime,
}

const DOCUMENT: &str = "\
traveler,departed,plutonium_g
Marty McFly,1985-10-26 01:21,28.35
Doc Brown,1955-11-12 22:04,0
";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn decodes_every_row_with_one_registry() {
    init_logging();

    let registry = Registry::<Trip>::build().unwrap();
    let mut reader = csv::Reader::from_reader(DOCUMENT.as_bytes());
    let labels: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_owned)
        .collect();
    let header = HeaderIndex::new(&labels);

    let mut trips = Vec::new();
    for record in reader.records() {
        let record = record.unwrap();
        let cells: Vec<&str> = record.iter().collect();
        let mut trip = Trip::default();
        registry.decode(&mut trip, &header, &cells).unwrap();
        trips.push(trip);
    }

    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0].traveler, "Marty McFly");
    // speed_mph is not in the document, so every row gets the default.
    assert_eq!(trips[0].speed_mph, 88);
    assert_eq!(trips[1].speed_mph, 88);
    assert_eq!(
        trips[1].departed,
        NaiveDate::from_ymd_opt(1955, 11, 12)
            .unwrap()
            .and_hms_opt(22, 4, 0)
            .unwrap()
    );
}

#[test]
fn a_bad_row_fails_alone() {
    init_logging();

    #[derive(RowRecord, Debug, Default)]
    struct Strict {
        #[mapping(column = "speed_mph")]
        speed_mph: i64,
    }

    let document = "speed_mph\n88\neighty-eight\n99\n";
    let registry = Registry::<Strict>::build().unwrap();
    let mut reader = csv::Reader::from_reader(document.as_bytes());
    let labels: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_owned)
        .collect();
    let header = HeaderIndex::new(&labels);

    let mut outcomes = Vec::new();
    for record in reader.records() {
        let record = record.unwrap();
        let cells: Vec<&str> = record.iter().collect();
        let mut row = Strict::default();
        outcomes.push(registry.decode(&mut row, &header, &cells).map(|()| row.speed_mph));
    }

    // The caller chooses the batch policy; here it skips the bad row.
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_ok());
    assert!(matches!(
        outcomes[1].as_ref().unwrap_err(),
        DecodeError::Cell { column, .. } if column == "speed_mph"
    ));
    assert!(outcomes[2].is_ok());
}
