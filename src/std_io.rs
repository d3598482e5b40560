// SPDX-License-Identifier: Apache-2.0

use std::io::{Read, Write};
use crate::error::{Error, Operation, Result};
use crate::slice::Slice;
use crate::streams::{Sink, Source, Stream};

/// A [`Source`] filling from a wrapped [`Read`]er.
pub struct ReaderSource<R: Read> {
	reader: Option<R>,
	is_eos: bool,
}

/// A [`Sink`] draining into a wrapped [`Write`]r.
pub struct WriterSink<W: Write> {
	writer: Option<W>,
}

impl<R: Read> From<R> for ReaderSource<R> {
	fn from(reader: R) -> Self {
		Self {
			reader: Some(reader),
			is_eos: false,
		}
	}
}

impl<W: Write> From<W> for WriterSink<W> {
	fn from(writer: W) -> Self {
		Self { writer: Some(writer) }
	}
}

impl<R: Read> Stream for ReaderSource<R> {
	fn is_closed(&self) -> bool {
		self.reader.is_none()
	}

	/// Closes the underlying reader by letting it fall out of scope.
	/// Subsequent fills will fail.
	fn close(&mut self) -> Result {
		self.reader.take();
		Ok(())
	}
}

impl<R: Read> Source for ReaderSource<R> {
	fn fill(&mut self, sink: &mut Slice) -> Result<usize> {
		if self.is_eos {
			return Ok(0)
		}
		let reader = self.reader
						.as_mut()
						.ok_or_else(|| Error::closed(Operation::Fill))?;
		let n = sink.fill_from(reader)
					.map_err(|e| Error::io(Operation::Fill, e))?;
		if n == 0 && sink.is_not_empty() {
			self.is_eos = true;
		}
		Ok(n)
	}
}

impl<W: Write> Stream for WriterSink<W> {
	fn is_closed(&self) -> bool {
		self.writer.is_none()
	}

	/// Flushes and closes the underlying writer by letting it fall out of
	/// scope. Subsequent drains will fail.
	fn close(&mut self) -> Result {
		if let Some(mut writer) = self.writer.take() {
			writer.flush().map_err(|e| Error::io(Operation::Flush, e))?;
		}
		Ok(())
	}
}

impl<W: Write> Sink for WriterSink<W> {
	fn drain(&mut self, source: &Slice) -> Result<usize> {
		let writer = self.writer
						.as_mut()
						.ok_or_else(|| Error::closed(Operation::Drain))?;
		source.drain_into(writer)
			  .map_err(|e| Error::io(Operation::Drain, e))
	}

	fn flush(&mut self) -> Result {
		self.writer
			.as_mut()
			.ok_or_else(|| Error::closed(Operation::Flush))?
			.flush()
			.map_err(|e| Error::io(Operation::Flush, e))
	}
}
