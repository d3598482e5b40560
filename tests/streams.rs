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

use std::io::{Seek, SeekFrom};
use pretty_assertions::assert_eq;
use tempfile::tempfile;
use gobuf::{BufReader, Buffer, ErrorKind, Slice};
use gobuf::std_io::{ReaderSource, WriterSink};
use gobuf::streams::{Sink, Source, SourceBuffer, Stream, void_sink, void_source};

#[test]
fn void_source_is_always_at_end() {
	let mut source = void_source();
	let mut chunk = Slice::make(16);
	assert_eq!(source.fill(&mut chunk).unwrap(), 0);
	assert_eq!(chunk, [0; 16]);
}

#[test]
fn void_sink_accepts_everything() {
	let mut sink = void_sink();
	assert_eq!(sink.drain(&Slice::from("dropped")).unwrap(), 7);
	sink.flush().unwrap();
}

#[test]
fn any_source_buffers() {
	let mut reader = Buffer::from(Slice::from("wrapped"))
		.buffer_with_capacity(4);
	assert_eq!(reader.read_string_until(b'\n').unwrap(), "wrapped");
}

#[test]
fn reader_source_wraps_std_read() {
	let mut source = ReaderSource::from(&b"from std"[..]);
	let mut chunk = Slice::make(8);
	assert_eq!(source.fill(&mut chunk).unwrap(), 8);
	assert_eq!(chunk, "from std");
	// The wrapped reader is drained; fills latch onto end-of-stream.
	assert_eq!(source.fill(&mut chunk).unwrap(), 0);
	assert_eq!(source.fill(&mut chunk).unwrap(), 0);
}

#[test]
fn closed_reader_source_fails_to_fill() {
	let mut source = ReaderSource::from(&b"data"[..]);
	source.close().unwrap();
	assert!(source.is_closed());
	let err = source.fill(&mut Slice::make(4)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Closed));
}

#[test]
fn file_round_trip() {
	let mut file = tempfile().unwrap();

	{
		let mut sink = WriterSink::from(&file);
		sink.drain(&Slice::from("alpha\nbeta\n")).unwrap();
		sink.close().unwrap();
		assert!(sink.is_closed());
	}

	file.seek(SeekFrom::Start(0)).unwrap();
	let mut reader = BufReader::with_capacity(4, ReaderSource::from(&file));
	assert_eq!(reader.read_string_until(b'\n').unwrap(), "alpha\n");
	assert_eq!(reader.read_string_until(b'\n').unwrap(), "beta\n");
	assert_eq!(reader.read(&mut Slice::make(4)).unwrap(), 0);
}

#[test]
fn closed_writer_sink_fails_to_drain() {
	let file = tempfile().unwrap();
	let mut sink = WriterSink::from(&file);
	sink.close().unwrap();
	let err = sink.drain(&Slice::from("late")).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Closed));
}
