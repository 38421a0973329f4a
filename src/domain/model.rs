use crate::utils::error::{PnrError, Result};
use crate::utils::validation::validate_code_length;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A validated 10-character reservation code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(String);

impl Code {
    pub fn parse(raw: &str) -> Result<Self> {
        validate_code_length(raw).map(|code| Code(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Base64 ciphertext of a [`Code`], as sent in the `pnrNumber` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncryptedPayload(pub String);

impl EncryptedPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passenger {
    pub serial_number: String,
    pub current_status: String,
    pub coach_id: String,
    pub berth_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    pub boarding_station: String,
    pub destination_station: String,
    pub quota: String,
    pub class_name: String,
    pub train_number: String,
    pub train_name: String,
    pub date_of_journey: String,
    pub passengers: Vec<Passenger>,
}

impl StatusRecord {
    /// Builds a record from the remote JSON reply. Fields are checked in
    /// the order they are rendered, so the first missing one is reported.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| PnrError::InvalidResponseFormat {
                reason: format!("expected a JSON object, got {}", json_kind(value)),
            })?;

        let boarding_station = required_text(obj, "BrdPointName")?;
        let destination_station = required_text(obj, "DestStnName")?;
        let quota = required_text(obj, "quota")?;
        let class_name = required_text(obj, "className")?;
        let train_number = required_text(obj, "trainNumber")?;
        let train_name = required_text(obj, "trainName")?;
        let date_of_journey = required_text(obj, "dateOfJourney")?;

        let list = required(obj, "passengerList")?
            .as_array()
            .ok_or_else(|| PnrError::InvalidResponseFormat {
                reason: "passengerList is not an array".to_string(),
            })?;

        let passengers = list
            .iter()
            .map(Passenger::from_json)
            .collect::<Result<Vec<_>>>()?;

        Ok(StatusRecord {
            boarding_station,
            destination_station,
            quota,
            class_name,
            train_number,
            train_name,
            date_of_journey,
            passengers,
        })
    }
}

impl Passenger {
    fn from_json(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| PnrError::InvalidResponseFormat {
                reason: format!("passenger entry is {}, not an object", json_kind(value)),
            })?;

        Ok(Passenger {
            serial_number: required_text(obj, "passengerSerialNumber")?,
            current_status: required_text(obj, "currentStatus")?,
            coach_id: required_text(obj, "currentCoachId")?,
            berth_number: required_text(obj, "currentBerthNo")?,
        })
    }
}

fn required<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value> {
    obj.get(field).ok_or_else(|| PnrError::MissingField {
        field: field.to_string(),
    })
}

fn required_text(obj: &Map<String, Value>, field: &str) -> Result<String> {
    required(obj, field).map(display_text)
}

// The service mixes strings and numbers for the same fields.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
