// SPDX-License-Identifier: Apache-2.0

use all_asserts::assert_le;
use crate::error::{Error, Operation, Result};
use crate::slice::Slice;
use crate::streams::{Source, Stream};

/// The default working chunk size of a [`BufReader`], in bytes.
pub const DEFAULT_BUF_SIZE: usize = 4096;

/// A chunked refill reader over a [`Source`].
///
/// The reader owns one working chunk, a [`Slice`] whose length tracks the
/// extent filled by the source; bytes in `pos..len` are live, fetched but not
/// yet delivered. Each read performs at most one refill, so a call may return
/// fewer bytes than the destination holds even when more are coming; callers
/// needing an exact count must call repeatedly. Delimiter reads hand out
/// sub-views of the chunk rather than copies.
pub struct BufReader<S: Source> {
	source: S,
	buf: Slice,
	size: usize,
	pos: usize,
}

impl<S: Source> BufReader<S> {
	/// Creates a reader over `source` with the default chunk size.
	pub fn new(source: S) -> Self {
		Self::with_capacity(DEFAULT_BUF_SIZE, source)
	}

	/// Creates a reader over `source` with a `size`-byte working chunk.
	pub fn with_capacity(size: usize, source: S) -> Self {
		Self {
			source,
			buf: Slice::empty_with_capacity(size),
			size,
			pos: 0,
		}
	}

	/// Returns a reference to the underlying source.
	pub fn get_ref(&self) -> &S { &self.source }

	/// Consumes the reader, returning the underlying source. Live bytes in
	/// the working chunk are lost.
	pub fn into_inner(self) -> S { self.source }

	/// Copies up to `dst.len()` bytes into `dst`'s storage, returning the
	/// count copied. When the working chunk is exhausted it is refilled from
	/// the front first; at most one refill happens per call, so a short count
	/// means only that no more bytes were resident. Returns `Ok(0)` at
	/// end-of-stream, leaving `dst` untouched.
	pub fn read(&mut self, dst: &mut Slice) -> Result<usize> {
		if self.pos >= self.buf.len() {
			self.pos = 0;
			if self.refill_front()? == 0 {
				return Ok(0)
			}
		}
		let n = dst.len().min(self.buf.len() - self.pos);
		Slice::copy(dst, &self.buf.window(self.pos, self.pos + n));
		self.pos += n;
		Ok(n)
	}

	/// Reads until the first occurrence of `delim`, returning a sub-view of
	/// the working chunk up to and including the delimiter. When the chunk
	/// runs out before the delimiter appears, newly filled bytes are appended
	/// after the existing ones and only those are scanned; the chunk's
	/// storage grows as needed to hold the pending bytes. At end-of-stream
	/// the remaining bytes are returned as-is, so a caller distinguishes a
	/// complete read by checking the last byte against `delim`.
	pub fn read_until(&mut self, delim: u8) -> Result<Slice> {
		let start = self.pos;
		loop {
			let found = {
				let data = self.buf.as_bytes();
				data[self.pos..].iter().position(|&b| b == delim)
			};
			if let Some(i) = found {
				let end = self.pos + i + 1;
				self.pos = end;
				return self.buf.slice(start, end)
			}
			self.pos = self.buf.len();
			if self.refill_back()? == 0 {
				return self.buf.slice(start, self.buf.len())
			}
		}
	}

	/// Reads until the first occurrence of `delim` and decodes the result as
	/// UTF-8. See [`read_until`](Self::read_until).
	pub fn read_string_until(&mut self, delim: u8) -> Result<String> {
		self.read_until(delim)?
			.utf8()
			.map_err(|e| Error::utf8(Operation::BufRead, e))
	}

	/// Fills the working chunk until at least `n` live bytes are resident or
	/// the source reports end-of-stream, consuming nothing. Returns whether
	/// `n` bytes are now resident. Unlike [`read`], this may refill more than
	/// once; newly filled bytes are appended after the existing ones.
	///
	/// [`read`]: Self::read
	pub fn request(&mut self, n: usize) -> Result<bool> {
		while self.buf.len() - self.pos < n {
			if self.refill_back()? == 0 {
				return Ok(false)
			}
		}
		Ok(true)
	}

	/// Returns a view of the next `n` live bytes without consuming them.
	/// Peeking never refills; it can only see bytes already resident in the
	/// working chunk, and fails with an "out of range" error when `n` exceeds
	/// them.
	pub fn peek(&self, n: usize) -> Result<Slice> {
		if n > self.buf.len() - self.pos {
			return Err(Error::out_of_range(Operation::Peek))
		}
		self.buf.slice(self.pos, self.pos + n)
	}

	/// Rebinds the reader to a new source, discarding live bytes and starting
	/// over with a fresh chunk of the originally configured size.
	pub fn reset(&mut self, source: S) {
		self.source = source;
		self.buf = Slice::empty_with_capacity(self.size);
		self.pos = 0;
	}

	/// Refills the chunk from the front, overwriting consumed bytes. The
	/// filled extent becomes the working view's length.
	fn refill_front(&mut self) -> Result<usize> {
		let mut target = self.buf.window(0, self.size);
		let n = self.source.fill(&mut target)?;
		assert_le!(n, self.size);
		self.buf = self.buf.window(0, n);
		Ok(n)
	}

	/// Refills into the chunk's spare storage, appending after the live
	/// bytes. Grows the storage by one configured chunk when none is spare,
	/// so pending delimiter scans keep a coherent view.
	fn refill_back(&mut self) -> Result<usize> {
		let filled = self.buf.len();
		if filled == self.buf.capacity() {
			self.buf = self.buf
				.append([&Slice::make(self.size)])
				.window(0, filled);
		}
		let mut target = self.buf.window(filled, self.buf.capacity());
		let n = self.source.fill(&mut target)?;
		assert_le!(n, target.len());
		self.buf = self.buf.window(0, filled + n);
		Ok(n)
	}
}

impl<S: Source> Stream for BufReader<S> {
	fn is_closed(&self) -> bool {
		self.source.is_closed()
	}

	/// Closes the underlying source. Live bytes in the working chunk are
	/// lost.
	fn close(&mut self) -> Result {
		self.source.close()
	}
}

impl<S: Source> Source for BufReader<S> {
	/// Reads buffered bytes into `sink`, refilling at most once; a buffered
	/// source is itself a source.
	fn fill(&mut self, sink: &mut Slice) -> Result<usize> {
		self.read(sink)
	}
}
