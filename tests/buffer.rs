// Copyright 2026 gobuf contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use pretty_assertions::assert_eq;
use quickcheck_macros::quickcheck;
use gobuf::{Buffer, ErrorKind, Slice};
use gobuf::streams::{Sink, Source};

#[quickcheck]
fn round_trip(data: Vec<u8>) {
	let mut buf = Buffer::new();
	assert_eq!(buf.write_slice(&data), data.len());

	let mut dst = Slice::make(data.len() + 8);
	let n = buf.read(&mut dst);
	assert_eq!(n, data.len());
	assert_eq!(dst.slice(0, n).unwrap(), data);
	assert!(buf.is_empty());
}

#[quickcheck]
fn utf8_round_trip(str: String) {
	let mut buf = Buffer::new();
	assert_eq!(buf.write_utf8(&str), str.len());
	assert_eq!(buf.utf8().unwrap(), str);
}

#[test]
fn read_consumes_from_the_front() {
	let mut buf = Buffer::new();
	buf.write_slice(&[1, 2, 3, 4, 5]);

	let mut dst = Slice::make(2);
	assert_eq!(buf.read(&mut dst), 2);
	assert_eq!(dst, [1, 2]);
	assert_eq!(buf.bytes(), [3, 4, 5]);
	assert_eq!(buf.len(), 3);
}

#[test]
fn read_at_end_returns_zero_untouched() {
	let mut buf = Buffer::new();
	buf.write_slice(b"ab");
	let mut dst = Slice::from(&[9u8; 4][..]);
	assert_eq!(buf.read(&mut dst), 2);
	assert_eq!(buf.read(&mut dst), 0);
	assert_eq!(dst, [b'a', b'b', 9, 9]);
}

#[test]
fn truncate_discards_the_tail() {
	let mut buf = Buffer::new();
	buf.write_utf8("hello world");
	buf.truncate(5).unwrap();
	assert_eq!(buf.utf8().unwrap(), "hello");
	// Truncating again to the same length is a no-op.
	buf.truncate(5).unwrap();
	assert_eq!(buf.utf8().unwrap(), "hello");
}

#[test]
fn truncate_past_length_is_out_of_range() {
	let mut buf = Buffer::new();
	buf.write_slice(b"abc");
	let err = buf.truncate(4).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::OutOfRange));
	assert_eq!(buf.bytes(), *b"abc");
}

#[test]
fn truncate_clamps_read_offset() {
	let mut buf = Buffer::new();
	buf.write_slice(&[0; 10]);
	let mut dst = Slice::make(8);
	assert_eq!(buf.read(&mut dst), 8);
	buf.truncate(4).unwrap();
	// Offset clamped down to the new length; nothing unread remains.
	assert_eq!(buf.len(), 0);
	buf.write_slice(&[1, 2]);
	assert_eq!(buf.bytes(), [1, 2]);
}

#[test]
fn truncate_to_zero_resets() {
	let mut buf = Buffer::new();
	buf.write_slice(b"abc");
	buf.truncate(0).unwrap();
	assert_eq!(buf.len(), 0);
	assert_eq!(buf.capacity(), 0);
}

#[test]
fn reset_is_idempotent() {
	let mut buf = Buffer::new();
	buf.write_utf8("test");
	buf.reset();
	assert_eq!(buf.len(), 0);
	buf.reset();
	assert_eq!(buf.len(), 0);
}

#[test]
fn write_grows_the_owned_slice() {
	let mut buf = Buffer::new();
	for _ in 0..100 {
		buf.write_slice(&[7; 10]);
	}
	assert_eq!(buf.len(), 1000);
	assert!(buf.capacity() >= 1000);
}

#[test]
fn buffer_is_a_source_and_a_sink() {
	let mut from = Buffer::from(Slice::from("pipe me"));
	let mut to = Buffer::new();

	let mut chunk = Slice::make(3);
	loop {
		let n = from.fill(&mut chunk).unwrap();
		if n == 0 { break }
		to.drain(&chunk.slice(0, n).unwrap()).unwrap();
	}
	assert_eq!(to.utf8().unwrap(), "pipe me");
}

#[test]
fn initial_slice_is_readable() {
	let mut buf = Buffer::from(Slice::from(&[1u8, 2, 3, 4][..]));
	let mut dst = Slice::make(4);
	assert_eq!(buf.read(&mut dst), 4);
	assert_eq!(dst, [1, 2, 3, 4]);
}
