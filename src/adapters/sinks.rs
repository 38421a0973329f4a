use crate::core::render::{console_block, csv_rows, text_block, CSV_HEADER};
use crate::domain::model::{Code, StatusRecord};
use crate::utils::error::{PnrError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// The three run-long destinations: console, CSV file and text file.
/// Owned by the batch driver and flushed once by [`OutputSinks::finish`].
pub struct OutputSinks<W: Write, C: Write = File, T: Write = BufWriter<File>> {
    console: W,
    csv: csv::Writer<C>,
    text: T,
    rows_written: usize,
}

impl<W: Write> OutputSinks<W> {
    /// Creates (truncating) both output files and writes the CSV header.
    pub fn create(console: W, csv_path: &Path, txt_path: &Path) -> Result<Self> {
        let csv_file = File::create(csv_path)?;
        let text_file = BufWriter::new(File::create(txt_path)?);
        tracing::debug!(
            "Opened outputs {} and {}",
            csv_path.display(),
            txt_path.display()
        );
        Self::from_writers(console, csv_file, text_file)
    }
}

impl<W: Write, C: Write, T: Write> OutputSinks<W, C, T> {
    pub fn from_writers(console: W, csv_out: C, text: T) -> Result<Self> {
        let mut csv = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(csv_out);
        csv.write_record(CSV_HEADER)?;

        Ok(Self {
            console,
            csv,
            text,
            rows_written: 0,
        })
    }

    /// Writes one record to all three sinks. Rendering happens before any
    /// write so a record is never half-rendered.
    pub fn emit(&mut self, code: &Code, record: &StatusRecord) -> Result<usize> {
        let console = console_block(code, record);
        let rows = csv_rows(code, record);
        let text = text_block(code, record);

        self.console.write_all(console.as_bytes())?;
        for row in &rows {
            self.csv.write_record(row)?;
        }
        self.text.write_all(text.as_bytes())?;

        self.rows_written += rows.len();
        Ok(rows.len())
    }

    /// Prints a single diagnostic line to the console sink.
    pub fn diagnostic(&mut self, message: &str) -> Result<()> {
        writeln!(self.console, "{}", message)?;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes every sink and hands the underlying writers back.
    pub fn finish(mut self) -> Result<(W, C, T)> {
        self.console.flush()?;
        self.text.flush()?;
        let csv = self
            .csv
            .into_inner()
            .map_err(|e| PnrError::Io(io::Error::new(e.error().kind(), e.error().to_string())))?;
        Ok((self.console, csv, self.text))
    }
}
