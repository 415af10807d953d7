//! # Host Output Channel
//!
//! The widget reports exactly one value per submission and never waits for
//! an answer. `ValueSink` is that channel; the host decides where values go.

use std::io::{self, Write};

use log::info;

use crate::core::submission::Submission;

/// Receives submitted values. Fire-and-forget from the widget's point of view.
pub trait ValueSink {
    fn set_value(&mut self, submission: &Submission) -> io::Result<()>;
}

/// Writes each submission as one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ValueSink for JsonLinesSink<W> {
    fn set_value(&mut self, submission: &Submission) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, submission)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        info!("Emitted submission {} ({} bytes)", submission.id, submission.text.len());
        Ok(())
    }
}
