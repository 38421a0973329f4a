use crate::adapters::sinks::OutputSinks;
use crate::domain::model::{Code, StatusRecord};
use crate::domain::ports::StatusClient;
use crate::utils::error::PnrError;
use std::io::Write;

/// What happened to one input line.
#[derive(Debug)]
pub enum ItemOutcome {
    Rendered { code: Code, passengers: usize },
    Skipped { code: String, reason: PnrError },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub rendered: usize,
    pub skipped: usize,
    pub rows_written: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &ItemOutcome) {
        self.total += 1;
        match outcome {
            ItemOutcome::Rendered { passengers, .. } => {
                self.rendered += 1;
                self.rows_written += passengers;
            }
            ItemOutcome::Skipped { .. } => self.skipped += 1,
        }
    }
}

/// Runs codes one at a time, in input order. A failure on one code is
/// reported and the loop moves on; nothing inside the loop is fatal.
pub struct BatchDriver<C: StatusClient> {
    client: C,
}

impl<C: StatusClient> BatchDriver<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn run<W: Write, Cw: Write, T: Write>(
        &self,
        lines: &[String],
        sinks: &mut OutputSinks<W, Cw, T>,
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for raw in lines {
            let outcome = self.process(raw, sinks).await;

            match &outcome {
                ItemOutcome::Rendered { code, passengers } => {
                    tracing::debug!("PNR {} rendered with {} passenger(s)", code, passengers);
                }
                ItemOutcome::Skipped { code, reason } => {
                    tracing::warn!(
                        "Skipping PNR {} ({:?}): {}",
                        code,
                        reason.category(),
                        reason
                    );
                    if let Err(e) = sinks.diagnostic(&diagnostic_line(code, reason)) {
                        tracing::error!("Failed to print diagnostic for PNR {}: {}", code, e);
                    }
                }
            }

            summary.record(&outcome);
        }

        summary
    }

    async fn process<W: Write, Cw: Write, T: Write>(
        &self,
        raw: &str,
        sinks: &mut OutputSinks<W, Cw, T>,
    ) -> ItemOutcome {
        let code = match Code::parse(raw) {
            Ok(code) => code,
            Err(reason) => {
                return ItemOutcome::Skipped {
                    code: raw.trim().to_string(),
                    reason,
                }
            }
        };

        let result = async {
            let value = self.client.fetch_status(&code).await?;
            let record = StatusRecord::from_json(&value)?;
            let parsed = serde_json::to_string(&record)?;
            tracing::debug!("PNR {} parsed: {}", code, parsed);
            sinks.emit(&code, &record)
        }
        .await;

        match result {
            Ok(passengers) => ItemOutcome::Rendered { code, passengers },
            Err(reason) => ItemOutcome::Skipped {
                code: code.to_string(),
                reason,
            },
        }
    }
}

fn diagnostic_line(code: &str, reason: &PnrError) -> String {
    match reason {
        PnrError::InvalidCodeLength { .. } => {
            format!("PNR {} LENGTH should be 10 DIGITS", code)
        }
        other => format!("PNR {}: {}", code, other.user_friendly_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    enum Reply {
        Json(Value),
        Status(u16),
    }

    struct FakeClient {
        replies: HashMap<String, Reply>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeClient {
        fn new(replies: Vec<(&str, Reply)>) -> Self {
            Self {
                replies: replies
                    .into_iter()
                    .map(|(code, reply)| (code.to_string(), reply))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl StatusClient for FakeClient {
        async fn fetch_status(&self, code: &Code) -> Result<Value> {
            self.calls.lock().unwrap().push(code.to_string());
            match self.replies.get(code.as_str()) {
                Some(Reply::Json(value)) => Ok(value.clone()),
                Some(Reply::Status(status)) => Err(PnrError::HttpStatus { status: *status }),
                None => Err(PnrError::HttpStatus { status: 404 }),
            }
        }
    }

    fn valid_status() -> Value {
        json!({
            "BrdPointName": "CSMT",
            "DestStnName": "PUNE",
            "quota": "GN",
            "className": "2S",
            "trainNumber": "12127",
            "trainName": "INTERCITY EXP",
            "dateOfJourney": "21-Oct-2026",
            "passengerList": [
                {"passengerSerialNumber": 1, "currentStatus": "CNF", "currentCoachId": "D3", "currentBerthNo": 45},
                {"passengerSerialNumber": 2, "currentStatus": "CNF", "currentCoachId": "D3", "currentBerthNo": 46}
            ]
        })
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_invalid_codes_never_reach_the_client() {
        let driver = BatchDriver::new(FakeClient::new(vec![]));
        let mut sinks = OutputSinks::from_writers(Vec::new(), Vec::new(), Vec::new()).unwrap();

        let summary = tokio_test::block_on(
            driver.run(&lines(&["12", "", "12345678901", " 123456789 "]), &mut sinks),
        );

        assert_eq!(summary.total, 4);
        assert_eq!(summary.skipped, 4);
        assert!(driver.client.calls.lock().unwrap().is_empty());

        let (console, _, _) = sinks.finish().unwrap();
        let console = String::from_utf8(console).unwrap();
        assert!(console.contains("PNR 12 LENGTH should be 10 DIGITS\n"));
        assert!(console.contains("PNR 123456789 LENGTH should be 10 DIGITS\n"));
    }

    #[test]
    fn test_mixed_batch_continues_past_failures() {
        let driver = BatchDriver::new(FakeClient::new(vec![
            ("1234567890", Reply::Json(valid_status())),
            ("0987654321", Reply::Status(500)),
            ("5555555555", Reply::Json(valid_status())),
        ]));
        let mut sinks = OutputSinks::from_writers(Vec::new(), Vec::new(), Vec::new()).unwrap();

        let summary = tokio_test::block_on(driver.run(
            &lines(&["1234567890", "0987654321", "12", "5555555555"]),
            &mut sinks,
        ));

        assert_eq!(
            summary,
            BatchSummary {
                total: 4,
                rendered: 2,
                skipped: 2,
                rows_written: 4,
            }
        );
        assert_eq!(
            *driver.client.calls.lock().unwrap(),
            vec!["1234567890", "0987654321", "5555555555"]
        );

        let (console, csv, _) = sinks.finish().unwrap();
        let console = String::from_utf8(console).unwrap();
        assert!(console.contains("PNR 0987654321: An error occurred while connecting to the API"));
        assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 5);
    }

    #[test]
    fn test_missing_passenger_list_writes_nothing() {
        let mut status = valid_status();
        status.as_object_mut().unwrap().remove("passengerList");
        let driver = BatchDriver::new(FakeClient::new(vec![("1234567890", Reply::Json(status))]));
        let mut sinks = OutputSinks::from_writers(Vec::new(), Vec::new(), Vec::new()).unwrap();

        let summary = tokio_test::block_on(driver.run(&lines(&["1234567890"]), &mut sinks));

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.rows_written, 0);

        let (console, csv, text) = sinks.finish().unwrap();
        let console = String::from_utf8(console).unwrap();
        assert!(!console.contains("PNR STATUS"));
        assert!(console.contains("Missing key: passengerList"));
        assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 1);
        assert!(text.is_empty());
    }

    #[test]
    fn test_diagnostic_line_wording() {
        let length = PnrError::InvalidCodeLength {
            code: "12".to_string(),
            length: 2,
        };
        assert_eq!(
            diagnostic_line("12", &length),
            "PNR 12 LENGTH should be 10 DIGITS"
        );

        let missing = PnrError::MissingField {
            field: "className".to_string(),
        };
        assert_eq!(
            diagnostic_line("1234567890", &missing),
            "PNR 1234567890: An error occurred while parsing the API response: \
             Invalid JSON data format. Missing key: className"
        );
    }
}
