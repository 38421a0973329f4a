//! Pure renderers from a [`StatusRecord`] to each output form.

use crate::domain::model::{Code, StatusRecord};

pub const CSV_HEADER: [&str; 12] = [
    "PNR",
    "Boarding Station",
    "Destination Station",
    "Quota",
    "Class",
    "Train Number",
    "Train Name",
    "Date of Journey",
    "Passenger Serial Number",
    "Current Status",
    "Current Coach ID",
    "Current Berth No",
];

const RULE: &str = "------------------------------------------------------------------";

pub type CsvRow = [String; 12];

/// Block printed to the console for one code.
pub fn console_block(code: &Code, record: &StatusRecord) -> String {
    let mut out = format!("PNR : {}\n", code);
    out.push_str(&status_body(record));
    out
}

/// Block appended to the text file for one code, followed by a blank line.
pub fn text_block(code: &Code, record: &StatusRecord) -> String {
    let mut out = format!("PNR: {}\n", code);
    out.push_str(&status_body(record));
    out.push('\n');
    out
}

/// One row per passenger; a record with no passengers yields no rows.
pub fn csv_rows(code: &Code, record: &StatusRecord) -> Vec<CsvRow> {
    record
        .passengers
        .iter()
        .map(|p| {
            [
                code.to_string(),
                record.boarding_station.clone(),
                record.destination_station.clone(),
                record.quota.clone(),
                record.class_name.clone(),
                record.train_number.clone(),
                record.train_name.clone(),
                record.date_of_journey.clone(),
                p.serial_number.clone(),
                p.current_status.clone(),
                p.coach_id.clone(),
                p.berth_number.clone(),
            ]
        })
        .collect()
}

fn status_body(record: &StatusRecord) -> String {
    let mut out = String::new();
    out.push_str("PNR STATUS\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "{} -> {}\n",
        record.boarding_station, record.destination_station
    ));
    out.push_str(&format!("{} - {}\n", record.train_number, record.train_name));
    out.push('\n');
    out.push_str(&format!("Quota: {}\n", record.quota));
    out.push_str(&format!("Journey Class: {}\n", record.class_name));
    out.push_str(&format!("Date Of Journey: {}\n", record.date_of_journey));
    out.push('\n');
    for p in &record.passengers {
        out.push_str(&format!(
            "Passenger {}: {}/{}/{}\n",
            p.serial_number, p.current_status, p.coach_id, p.berth_number
        ));
    }
    out
}
