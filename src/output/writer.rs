//! CSV sink for samples.

use std::io::Write;

use thiserror::Error;

use crate::Sample;

/// Header row written once before any samples.
pub const HEADER: [&str; 3] = ["timestamp", "status_code", "latency"];

/// Errors that can occur while writing output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Writing or flushing the underlying stream failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes samples as comma-separated rows.
///
/// Every row is flushed immediately so a reader tailing the stream sees each
/// sample as soon as it is produced.
#[derive(Debug)]
pub struct SampleWriter<W: Write> {
    inner: W,
    rows: u64,
}

impl<W: Write> SampleWriter<W> {
    /// Wrap an output stream.
    pub fn new(inner: W) -> Self {
        Self { inner, rows: 0 }
    }

    /// Write the `timestamp,status_code,latency` header.
    pub fn write_header(&mut self) -> Result<(), OutputError> {
        self.write_record(&HEADER)
    }

    /// Write one sample row.
    pub fn write_sample(&mut self, sample: &Sample) -> Result<(), OutputError> {
        self.write_record(&sample.to_record())?;
        self.rows += 1;
        Ok(())
    }

    /// Number of sample rows written so far (header excluded).
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Terminate the stream with a blank line and return the inner writer.
    pub fn finish(mut self) -> Result<W, OutputError> {
        self.inner.write_all(b"\n")?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<(), OutputError> {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.inner.write_all(b",")?;
            }
            write_field(&mut self.inner, field.as_ref())?;
        }
        self.inner.write_all(b"\n")?;
        self.inner.flush()?;
        Ok(())
    }
}

/// Write a single field, quoting it when it would otherwise break the row.
fn write_field<W: Write>(out: &mut W, field: &str) -> std::io::Result<()> {
    if !needs_quotes(field) {
        return out.write_all(field.as_bytes());
    }
    out.write_all(b"\"")?;
    out.write_all(field.replace('"', "\"\"").as_bytes())?;
    out.write_all(b"\"")
}

fn needs_quotes(field: &str) -> bool {
    field.starts_with(' ') || field.contains([',', '"', '\r', '\n'])
}
