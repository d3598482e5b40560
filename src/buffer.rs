// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Debug, Formatter};
use crate::error::{Error, Operation, Result, Utf8Error};
use crate::slice::Slice;
use crate::streams::{Sink, Source, Stream};

/// A sequential read/write cursor over one growable [`Slice`].
///
/// Written bytes accumulate at the back via [`Slice::append`]; reads consume
/// from the front, advancing an offset instead of moving bytes. The buffer is
/// the sole owner of its slice, so reallocation on write carries no aliasing
/// contract. Reading past the written bytes is not an error: [`read`] returns
/// `0`, the end-of-stream signal.
///
/// [`read`]: Buffer::read
#[derive(Clone, Default, Eq)]
pub struct Buffer {
	buf: Slice,
	off: usize,
}

impl From<Slice> for Buffer {
	fn from(buf: Slice) -> Self {
		Self { buf, off: 0 }
	}
}

impl Buffer {
	/// Creates an empty buffer.
	#[inline]
	pub fn new() -> Self { Self::default() }

	/// Returns the number of unread bytes.
	pub fn len(&self) -> usize { self.buf.len() - self.off }
	/// Returns `true` if all written bytes have been read.
	pub fn is_empty(&self) -> bool { self.len() == 0 }
	/// Returns the capacity of the underlying slice.
	pub fn capacity(&self) -> usize { self.buf.capacity() }

	/// Appends `view`'s bytes to the buffer, returning the count written.
	pub fn write(&mut self, view: &Slice) -> usize {
		self.buf = self.buf.append([view]);
		view.len()
	}

	/// Appends `bytes` to the buffer, returning the count written.
	pub fn write_slice(&mut self, bytes: &[u8]) -> usize {
		self.write(&bytes.into())
	}

	/// Appends the UTF-8 bytes of `str` to the buffer, returning the count
	/// written.
	pub fn write_utf8(&mut self, str: &str) -> usize {
		self.write_slice(str.as_bytes())
	}

	/// Copies up to `dst.len()` unread bytes into `dst`'s storage, consuming
	/// them. Returns the count copied, `0` at end-of-stream.
	pub fn read(&mut self, dst: &mut Slice) -> usize {
		if self.off >= self.buf.len() {
			return 0
		}
		let n = dst.len().min(self.len());
		Slice::copy(dst, &self.buf.window(self.off, self.off + n));
		self.off += n;
		n
	}

	/// Copies up to `dst.len()` unread bytes into `dst`, consuming them.
	/// Returns the count copied, `0` at end-of-stream.
	pub fn read_slice(&mut self, dst: &mut [u8]) -> usize {
		if self.off >= self.buf.len() {
			return 0
		}
		let n = dst.len().min(self.len());
		{
			let data = self.buf.as_bytes();
			dst[..n].copy_from_slice(&data[self.off..self.off + n]);
		}
		self.off += n;
		n
	}

	/// Returns a view of the unread bytes, sharing the buffer's storage.
	pub fn bytes(&self) -> Slice {
		self.buf.window(self.off, self.buf.len())
	}

	/// Returns the unread bytes decoded as UTF-8.
	pub fn utf8(&self) -> std::result::Result<String, Utf8Error> {
		self.bytes().utf8()
	}

	/// Discards all but the first `n` written bytes, clamping the read offset
	/// to `n` if it lay beyond. Fails with an "out of range" error if `n`
	/// exceeds the written length. `truncate(0)` is equivalent to [`reset`].
	///
	/// [`reset`]: Buffer::reset
	pub fn truncate(&mut self, n: usize) -> Result {
		if n > self.buf.len() {
			return Err(Error::out_of_range(Operation::Truncate))
		}
		if n == 0 {
			self.reset();
			return Ok(())
		}
		self.buf = self.buf.window(0, n);
		if self.off > n {
			self.off = n;
		}
		Ok(())
	}

	/// Discards all content, releasing the underlying storage.
	pub fn reset(&mut self) {
		self.buf = Slice::new();
		self.off = 0;
	}
}

impl Debug for Buffer {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Buffer")
			.field("data", &self.bytes())
			.field("off", &self.off)
			.finish()
	}
}

impl PartialEq for Buffer {
	/// Compares the unread bytes of both buffers.
	fn eq(&self, other: &Self) -> bool {
		self.bytes() == other.bytes()
	}
}

impl PartialEq<[u8]> for Buffer {
	fn eq(&self, other: &[u8]) -> bool {
		self.bytes() == *other
	}
}

impl PartialEq<&[u8]> for Buffer {
	fn eq(&self, other: &&[u8]) -> bool {
		self.bytes() == *other
	}
}

impl PartialEq<str> for Buffer {
	fn eq(&self, other: &str) -> bool {
		self.bytes() == *other
	}
}

impl Stream for Buffer {
	/// Clears the buffer.
	fn close(&mut self) -> Result {
		self.reset();
		Ok(())
	}
}

impl Source for Buffer {
	/// Reads unread bytes into `sink`, consuming them. Returns `Ok(0)` once
	/// the buffer is drained.
	fn fill(&mut self, sink: &mut Slice) -> Result<usize> {
		Ok(self.read(sink))
	}
}

impl Sink for Buffer {
	/// Appends `source`'s bytes to the buffer.
	fn drain(&mut self, source: &Slice) -> Result<usize> {
		Ok(self.write(source))
	}
}
