// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gobuf::{BufReader, Buffer, Slice};

fn append_growth(c: &mut Criterion) {
	let chunk = Slice::from(&[0x5au8; 1024][..]);
	c.bench_function("append_growth", |b| b.iter(|| {
		let mut slice = Slice::new();
		for _ in 0..256 {
			slice = slice.append([&chunk]);
		}
		black_box(slice)
	}));
}

fn append_in_place(c: &mut Criterion) {
	let byte = Slice::from(&[0u8][..]);
	c.bench_function("append_in_place", |b| b.iter(|| {
		let mut slice = Slice::with_capacity(0, 64 * 1024).unwrap();
		for _ in 0..64 * 1024 {
			slice = slice.append([&byte]);
		}
		black_box(slice)
	}));
}

fn cursor_round_trip(c: &mut Criterion) {
	let data = vec![0x5au8; 64 * 1024];
	c.bench_function("cursor_round_trip", |b| b.iter(|| {
		let mut buf = Buffer::new();
		buf.write_slice(&data);
		let mut dst = Slice::make(data.len());
		black_box(buf.read(&mut dst))
	}));
}

fn read_until_lines(c: &mut Criterion) {
	let mut data = Buffer::new();
	for _ in 0..1024 {
		data.write_utf8("a line of reasonable length for scanning\n");
	}
	c.bench_function("read_until_lines", |b| b.iter(|| {
		let mut reader = BufReader::with_capacity(4096, data.clone());
		let mut lines = 0;
		while reader.read_until(b'\n').unwrap().is_not_empty() {
			lines += 1;
		}
		black_box(lines)
	}));
}

criterion_group!(benches, append_growth, append_in_place, cursor_round_trip, read_until_lines);
criterion_main!(benches);
