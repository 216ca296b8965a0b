use crate::error::Result;
use crate::response::TransactionResponse;
use std::io::Write;

/// Writes transaction responses as CSV rows to any `Write` sink.
pub struct ResponseWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new().from_writer(sink);
        Self { writer }
    }

    pub fn write_response(&mut self, response: &TransactionResponse) -> Result<()> {
        self.writer.serialize(response)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
