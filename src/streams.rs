// SPDX-License-Identifier: Apache-2.0

//! Fill and drain capabilities over [`Slice`] storage. A [`Source`] is
//! anything that can fill a byte view and report the count written, with a
//! zero count meaning end-of-stream; a [`Sink`] is the dual. Concrete
//! transports live in [`std_io`](crate::std_io); [`Buffer`](crate::Buffer)
//! implements both for in-memory use. The fill call is the single suspension
//! point of the whole crate: it may block, and callers are guaranteed at most
//! one fill per logical read.

use crate::bufio::BufReader;
use crate::error::Result;
use crate::Slice;

/// A data stream, either [`Source`] or [`Sink`].
pub trait Stream {
	/// Returns `true` if the stream is closed.
	fn is_closed(&self) -> bool { false }

	/// Closes the stream. Closing is idempotent, `close` may be called more
	/// than once with no effect.
	fn close(&mut self) -> Result { Ok(()) }
}

/// A data source.
pub trait Source: Stream {
	/// Fills `sink`'s viewed bytes from the source, returning the number of
	/// bytes written. Returns `Ok(0)` at end-of-stream; errors are reserved
	/// for actual failures. The sink's length is never changed.
	fn fill(&mut self, sink: &mut Slice) -> Result<usize>;
}

/// A data sink.
pub trait Sink: Stream {
	/// Drains `source`'s viewed bytes into the sink, returning the number of
	/// bytes accepted. Fails if the sink cannot accept more.
	fn drain(&mut self, source: &Slice) -> Result<usize>;

	/// Writes any buffered data to its final target.
	fn flush(&mut self) -> Result { Ok(()) }
}

pub trait SourceBuffer: Source + Sized {
	/// Wraps the source in a [`BufReader`] with the default chunk size.
	fn buffer(self) -> BufReader<Self> { BufReader::new(self) }

	/// Wraps the source in a [`BufReader`] with a `size`-byte chunk.
	fn buffer_with_capacity(self, size: usize) -> BufReader<Self> {
		BufReader::with_capacity(size, self)
	}
}

impl<S: Source> SourceBuffer for S { }

/// Returns a [`Source`] that reads from nowhere, producing no data.
pub fn void_source() -> VoidSource { VoidSource }

/// Returns a [`Sink`] that writes to nowhere, dropping any data drained into
/// it.
pub fn void_sink() -> VoidSink { VoidSink }

/// A [`Source`] that reads from nowhere, producing no data.
#[derive(Copy, Clone, Debug, Default)]
pub struct VoidSource;

impl Stream for VoidSource { }

impl Source for VoidSource {
	/// Reads nothing, returning `0`.
	fn fill(&mut self, _sink: &mut Slice) -> Result<usize> { Ok(0) }
}

/// A [`Sink`] that writes to nowhere, dropping any data drained into it.
#[derive(Copy, Clone, Debug, Default)]
pub struct VoidSink;

impl Stream for VoidSink { }

impl Sink for VoidSink {
	/// Accepts and drops all of `source`'s bytes.
	fn drain(&mut self, source: &Slice) -> Result<usize> { Ok(source.len()) }
}
