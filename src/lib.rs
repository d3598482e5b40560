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

//! Growable byte slices, cursors and buffered readers in the style of Go's
//! `bytes` and `bufio` packages.
//!
//! ## How it works
//!
//! The [`Slice`] is the core: a window over a reference-counted byte storage
//! block, tracking a logical length and a capacity counted from its starting
//! offset. Sub-views share storage with their parent, and appends that fit in
//! spare capacity write in place, visible through any sibling view over the
//! same block; appends that outgrow the block reallocate with the two-regime
//! growth policy (doubling while small, roughly 1.25x steps once past 256
//! bytes), breaking the aliasing. Both behaviors are part of the contract.
//!
//! [`Buffer`] is a sequential read/write cursor over one slice, and
//! [`BufReader`] refills a fixed-size working chunk from any
//! [`Source`](streams::Source), handing out sub-views for delimiter-bounded
//! reads. End-of-stream is a plain `0` count everywhere, never an error.

mod buffer;
mod bufio;
mod error;
mod slice;
pub mod std_io;
pub mod streams;

pub use buffer::Buffer;
pub use bufio::{BufReader, DEFAULT_BUF_SIZE};
pub use error::{Error, ErrorKind, Operation, Result, Utf8Error, Utf8ErrorKind};
pub use slice::Slice;
