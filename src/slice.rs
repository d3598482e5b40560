// SPDX-License-Identifier: Apache-2.0

mod conv;

use std::cell::{Ref, RefCell};
use std::fmt::{self, Debug, Formatter};
use std::io::{self, Read, Write};
use std::rc::Rc;
use all_asserts::assert_ge;
use simdutf8::compat::from_utf8;
use crate::error::{Error, Operation, Result, Utf8Error};

/// Capacity below this threshold is grown by doubling; at or above it, by
/// steps of roughly 1.25x. The two-regime policy trades memory overhead for
/// copy frequency, the same way Go's `nextslicecap` does.
const GROWTH_THRESHOLD: usize = 256;

type Storage = Rc<RefCell<Box<[u8]>>>;

/// A growable view over contiguous byte storage.
///
/// A slice is a window `{offset, length}` into a reference-counted storage
/// block. [`slice`], [`with_len`] and [`Clone`] produce new views sharing the
/// same block, so mutation through one view can be visible through another:
/// an [`append`] that fits within [`capacity`] writes in place, and bytes it
/// writes past a sibling view's length become observable when that sibling is
/// re-extended over them. An `append` that must reallocate copies the view's
/// bytes to a fresh block, after which the returned slice no longer aliases
/// its former siblings. Both behaviors are contractual, not accidents.
///
/// Capacity is always counted from the view's starting offset to the end of
/// the storage block, so a sub-view keeps the room its parent had to the
/// right of `from` and can grow there without reallocating.
///
/// [`slice`]: Self::slice
/// [`with_len`]: Self::with_len
/// [`append`]: Self::append
/// [`capacity`]: Self::capacity
#[derive(Clone)]
pub struct Slice {
	mem: Storage,
	off: usize,
	len: usize,
}

fn alloc(cap: usize) -> Storage {
	Rc::new(RefCell::new(vec![0; cap].into_boxed_slice()))
}

impl Default for Slice {
	fn default() -> Self {
		Self {
			mem: Rc::new(RefCell::new(Box::default())),
			off: 0,
			len: 0,
		}
	}
}

impl Slice {
	/// Creates an empty slice.
	#[inline]
	pub fn new() -> Self { Self::default() }

	/// Allocates zero-filled storage of `len` bytes and returns a view over
	/// all of it.
	pub fn make(len: usize) -> Self {
		Self { mem: alloc(len), off: 0, len }
	}

	/// Allocates zero-filled storage of `cap` bytes and returns a view of the
	/// first `len` bytes, leaving `cap - len` bytes of room to grow in place.
	/// Fails with an "invalid argument" error if `cap < len`.
	pub fn with_capacity(len: usize, cap: usize) -> Result<Self> {
		if cap < len {
			return Err(Error::invalid_argument(Operation::Make))
		}
		Ok(Self { mem: alloc(cap), off: 0, len })
	}

	pub(crate) fn empty_with_capacity(cap: usize) -> Self {
		Self { mem: alloc(cap), off: 0, len: 0 }
	}

	/// Returns the length in bytes of the slice.
	#[inline]
	pub fn len(&self) -> usize { self.len }
	/// Returns `true` if the slice is empty.
	#[inline]
	pub fn is_empty(&self) -> bool { self.len == 0 }
	/// Returns `true` if the slice is not empty.
	#[inline]
	pub fn is_not_empty(&self) -> bool { self.len > 0 }

	/// Returns the number of bytes reachable from the view's starting offset
	/// without reallocating.
	pub fn capacity(&self) -> usize {
		self.mem.borrow().len() - self.off
	}

	/// Returns the byte at `index`, or `None` if `index` is out of bounds.
	pub fn get(&self, index: usize) -> Option<u8> {
		(index < self.len).then(|| self.mem.borrow()[self.off + index])
	}

	/// Returns a sub-view of bytes in `from..to`, sharing storage with this
	/// slice. Fails with an "out of bounds" error unless `from <= to <= len`.
	/// The sub-view's capacity runs from `from` to the end of the storage
	/// block, not to `to`.
	pub fn slice(&self, from: usize, to: usize) -> Result<Self> {
		if from > to || to > self.len {
			return Err(Error::out_of_bounds(Operation::Range))
		}
		Ok(self.window(from, to))
	}

	/// Returns a view of `len` bytes over the same storage. Unlike [`slice`],
	/// `len` may exceed the current length up to [`capacity`], re-exposing
	/// spare storage the way Go's `s[:n]` does; bytes there hold whatever the
	/// block holds, zeros or the writes of an aliasing view. Fails with an
	/// "out of bounds" error if `len` exceeds the capacity.
	///
	/// [`slice`]: Self::slice
	/// [`capacity`]: Self::capacity
	pub fn with_len(&self, len: usize) -> Result<Self> {
		if len > self.capacity() {
			return Err(Error::out_of_bounds(Operation::Range))
		}
		Ok(Self { mem: self.mem.clone(), off: self.off, len })
	}

	/// Unchecked variant of [`slice`](Self::slice) for callers upholding the
	/// bounds themselves. `to` may reach into spare capacity.
	pub(crate) fn window(&self, from: usize, to: usize) -> Self {
		debug_assert!(from <= to && to <= self.capacity());
		Self {
			mem: self.mem.clone(),
			off: self.off + from,
			len: to - from,
		}
	}

	/// Appends the bytes of `views` to this slice, returning the longer slice
	/// and leaving this one untouched. When the combined length fits within
	/// [`capacity`], the bytes are written into spare storage in place and the
	/// returned slice aliases this one; otherwise a larger block is allocated
	/// by the growth policy, the contents are copied, and the returned slice
	/// is detached from this one's storage. Views that alias this slice's
	/// storage may be appended; overlap is handled as a move.
	///
	/// # Panics
	///
	/// Panics if the combined length overflows `usize`.
	///
	/// [`capacity`]: Self::capacity
	pub fn append<'a, I>(&self, views: I) -> Self
	where
		I: IntoIterator<Item = &'a Slice>,
		I::IntoIter: Clone,
	{
		let views = views.into_iter();
		let increase: usize = views.clone().map(Self::len).sum();
		let Some(new_len) = self.len.checked_add(increase) else {
			length_overflow()
		};
		let mut grown = self.clone();
		if new_len > grown.capacity() {
			grown.grow(new_len);
		}
		let mut at = grown.off + grown.len;
		for view in views {
			grown.write_at(at, view);
			at += view.len;
		}
		grown.len = new_len;
		grown
	}

	/// Copies `min(dst.len(), src.len())` bytes from `src` into `dst`'s
	/// storage at `dst`'s position, returning the count copied. Neither
	/// slice's length changes. The two views may share storage; overlapping
	/// ranges are handled as a move.
	pub fn copy(dst: &mut Self, src: &Self) -> usize {
		let n = dst.len.min(src.len);
		if n == 0 { return 0 }
		if Rc::ptr_eq(&dst.mem, &src.mem) {
			let mut mem = dst.mem.borrow_mut();
			mem.copy_within(src.off..src.off + n, dst.off);
		} else {
			let src_mem = src.mem.borrow();
			let mut dst_mem = dst.mem.borrow_mut();
			dst_mem[dst.off..dst.off + n]
				.copy_from_slice(&src_mem[src.off..src.off + n]);
		}
		n
	}

	/// Borrows the viewed bytes. The guard must be released before any
	/// mutating call on an aliasing view; holding it across one panics on the
	/// interior `RefCell` rather than aliasing mutably.
	pub fn as_bytes(&self) -> Ref<'_, [u8]> {
		Ref::map(self.mem.borrow(), |mem| &mem[self.off..self.off + self.len])
	}

	/// Copies the viewed bytes into a `Vec`.
	pub fn to_vec(&self) -> Vec<u8> {
		self.as_bytes().to_vec()
	}

	/// Returns the viewed bytes decoded as UTF-8.
	pub fn utf8(&self) -> std::result::Result<String, Utf8Error> {
		from_utf8(&self.as_bytes())
			.map(String::from)
			.map_err(Into::into)
	}

	/// Reads from `reader` into the viewed bytes, without changing the length.
	pub(crate) fn fill_from(&mut self, reader: &mut impl Read) -> io::Result<usize> {
		let mut mem = self.mem.borrow_mut();
		reader.read(&mut mem[self.off..self.off + self.len])
	}

	/// Writes all viewed bytes into `writer`.
	pub(crate) fn drain_into(&self, writer: &mut impl Write) -> io::Result<usize> {
		writer.write_all(&self.as_bytes())?;
		Ok(self.len)
	}

	/// Moves the view onto a fresh storage block of at least `new_len` bytes,
	/// copying the current contents to its front.
	fn grow(&mut self, new_len: usize) {
		let new_cap = next_cap(new_len, self.capacity());
		assert_ge!(new_cap, new_len);
		let mem = alloc(new_cap);
		{
			let old = self.mem.borrow();
			mem.borrow_mut()[..self.len]
				.copy_from_slice(&old[self.off..self.off + self.len]);
		}
		self.mem = mem;
		self.off = 0;
	}

	/// Writes `view`'s bytes into this slice's storage at absolute position
	/// `at`. The caller guarantees the target range lies within the block.
	fn write_at(&self, at: usize, view: &Self) {
		if view.len == 0 { return }
		if Rc::ptr_eq(&self.mem, &view.mem) {
			let mut mem = self.mem.borrow_mut();
			mem.copy_within(view.off..view.off + view.len, at);
		} else {
			let src = view.mem.borrow();
			let mut mem = self.mem.borrow_mut();
			mem[at..at + view.len]
				.copy_from_slice(&src[view.off..view.off + view.len]);
		}
	}
}

/// Computes the capacity for growth to `new_len`. Requests far past doubling
/// are granted exactly with no slack; small capacities double; large ones step
/// up by `(cap + 3 * 256) >> 2` until the request is covered. If the stepping
/// arithmetic would overflow, the requested length itself is the capacity.
fn next_cap(new_len: usize, old_cap: usize) -> usize {
	let Some(doubled) = old_cap.checked_mul(2) else {
		return new_len
	};
	if new_len > doubled {
		return new_len
	}
	if old_cap < GROWTH_THRESHOLD {
		return doubled
	}
	let mut cap = old_cap;
	while cap < new_len {
		let step = match cap.checked_add(3 * GROWTH_THRESHOLD) {
			Some(sum) => sum >> 2,
			None => return new_len
		};
		cap = match cap.checked_add(step) {
			Some(next) => next,
			None => return new_len
		};
	}
	cap
}

#[cold]
#[inline(never)]
#[track_caller]
fn length_overflow() -> ! {
	panic!("requested slice length overflows usize")
}

impl Debug for Slice {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Slice")
			.field("data", &&*self.as_bytes())
			.field("capacity", &self.capacity())
			.finish()
	}
}

impl Eq for Slice { }

impl PartialEq for Slice {
	fn eq(&self, other: &Self) -> bool {
		self.len == other.len && *self.as_bytes() == *other.as_bytes()
	}
}

impl PartialEq<[u8]> for Slice {
	fn eq(&self, other: &[u8]) -> bool {
		*self.as_bytes() == *other
	}
}

impl PartialEq<&[u8]> for Slice {
	fn eq(&self, other: &&[u8]) -> bool {
		self == *other
	}
}

impl PartialEq<str> for Slice {
	fn eq(&self, other: &str) -> bool {
		self == other.as_bytes()
	}
}

impl PartialEq<&str> for Slice {
	fn eq(&self, other: &&str) -> bool {
		self == other.as_bytes()
	}
}

impl PartialEq<Vec<u8>> for Slice {
	fn eq(&self, other: &Vec<u8>) -> bool {
		self == other.as_slice()
	}
}

impl<const N: usize> PartialEq<[u8; N]> for Slice {
	fn eq(&self, other: &[u8; N]) -> bool {
		self == &other[..]
	}
}

impl PartialEq<Slice> for [u8] {
	fn eq(&self, other: &Slice) -> bool {
		other == self
	}
}
