use crate::adapters::input::read_codes;
use crate::adapters::sinks::OutputSinks;
use crate::core::batch::{BatchDriver, BatchSummary};
use crate::domain::ports::{ConfigProvider, StatusClient};
use crate::utils::error::Result;
use std::io::Write;

/// One full run: read input, open the sinks, process every line, flush.
/// Only a missing input file or unopenable output files return `Err`.
pub struct PnrEngine<C: StatusClient, P: ConfigProvider> {
    driver: BatchDriver<C>,
    config: P,
}

impl<C: StatusClient, P: ConfigProvider> PnrEngine<C, P> {
    pub fn new(client: C, config: P) -> Self {
        Self {
            driver: BatchDriver::new(client),
            config,
        }
    }

    pub async fn run<W: Write>(&self, console: W) -> Result<BatchSummary> {
        // Input is read before any output file is created, so a missing
        // input leaves previous outputs untouched.
        let lines = read_codes(self.config.input_path())?;
        tracing::info!(
            "Read {} line(s) from {}",
            lines.len(),
            self.config.input_path().display()
        );

        let mut sinks = OutputSinks::create(
            console,
            self.config.csv_output_path(),
            self.config.txt_output_path(),
        )?;

        let summary = self.driver.run(&lines, &mut sinks).await;

        sinks.finish()?;
        tracing::info!(
            "Processed {} PNR(s): {} rendered, {} skipped, {} CSV row(s)",
            summary.total,
            summary.rendered,
            summary.skipped,
            summary.rows_written
        );

        Ok(summary)
    }
}
