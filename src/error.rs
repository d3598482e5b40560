// SPDX-License-Identifier: Apache-2.0

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::{io, result};
use amplify_derive::Display;
use simdutf8::compat;
use thiserror::Error as ThisError;
use ErrorKind::{Closed, InvalidArgument, Io, OutOfBounds, OutOfRange, Other, Utf8};

pub type ErrorBox = Box<dyn StdError + Send + Sync>;
pub type Result<T = ()> = result::Result<T, Error>;

/// The operation an [`Error`] was raised by.
#[derive(Copy, Clone, Debug, Default, Display)]
pub enum Operation {
	#[default]
	#[display("unknown operation")]
	Unknown,
	#[display("make slice")]
	Make,
	#[display("take slice range")]
	Range,
	#[display("read from buffer")]
	BufRead,
	#[display("write to buffer")]
	BufWrite,
	#[display("truncate buffer")]
	Truncate,
	#[display("fill from source")]
	Fill,
	#[display("drain into sink")]
	Drain,
	#[display("flush sink")]
	Flush,
	#[display("peek buffered bytes")]
	Peek,
	#[display("{0}")]
	Other(&'static str)
}

#[derive(Copy, Clone, Debug, Display)]
pub enum ErrorKind {
	#[display("invalid argument")]
	InvalidArgument,
	#[display("out of bounds")]
	OutOfBounds,
	#[display("out of range")]
	OutOfRange,
	#[display("IO error")]
	Io,
	#[display("invalid UTF-8")]
	Utf8,
	#[display("stream closed")]
	Closed,
	#[display("{0}")]
	Other(&'static str),
}

#[derive(Debug)]
pub struct Error {
	op: Operation,
	kind: ErrorKind,
	source: Option<ErrorBox>,
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let Self { op, kind, source } = self;
		if let Some(source) = source {
			write!(f, "{op} failed; {kind} ({source})")
		} else {
			write!(f, "{op} failed; {kind}")
		}
	}
}

impl StdError for Error {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		if let Some(ref source) = self.source {
			Some(source.as_ref())
		} else {
			None
		}
	}
}

impl Error {
	pub(crate) fn new(op: Operation, kind: ErrorKind, source: Option<ErrorBox>) -> Self {
		Self { op, kind, source }
	}

	/// Creates a new "invalid argument" error.
	pub fn invalid_argument(op: Operation) -> Self {
		Self::new(op, InvalidArgument, None)
	}

	/// Creates a new "out of bounds" error.
	pub fn out_of_bounds(op: Operation) -> Self {
		Self::new(op, OutOfBounds, None)
	}

	/// Creates a new "out of range" error.
	pub fn out_of_range(op: Operation) -> Self {
		Self::new(op, OutOfRange, None)
	}

	/// Creates a new IO error.
	pub fn io(op: Operation, error: io::Error) -> Self {
		Self::new(op, Io, Some(error.into()))
	}

	/// Creates a new UTF-8 decode error.
	pub fn utf8(op: Operation, error: Utf8Error) -> Self {
		Self::new(op, Utf8, Some(error.into()))
	}

	/// Creates a new "closed" error.
	pub fn closed(op: Operation) -> Self {
		Self::new(op, Closed, None)
	}

	/// Creates a new error with a custom message.
	pub fn other(op: Operation, message: &'static str) -> Self {
		Self::new(op, Other(message), None)
	}

	/// Returns the operation the error was raised by.
	pub fn operation(&self) -> Operation { self.op }

	/// Sets the operation the error was raised by.
	pub fn with_operation(mut self, op: Operation) -> Self {
		self.op = op;
		self
	}

	/// Returns the error kind.
	pub fn kind(&self) -> ErrorKind { self.kind }

	/// Returns the source downcast into an IO error, if possible.
	pub fn io_source(&self) -> Option<&io::Error> {
		self.source()?.downcast_ref()
	}
}

impl From<io::Error> for Error {
	fn from(value: io::Error) -> Self {
		Self::io(Operation::Unknown, value)
	}
}

impl From<&'static str> for Error {
	fn from(value: &'static str) -> Self {
		Self::other(Operation::Unknown, value)
	}
}

/// A UTF-8 decode error.
#[derive(Copy, Clone, Debug, ThisError)]
#[error("{kind} UTF-8 byte sequence from index {valid_up_to}")]
pub struct Utf8Error {
	/// The length of the valid string before the error.
	pub valid_up_to: usize,
	/// The error kind.
	pub kind: Utf8ErrorKind,
}

#[derive(Copy, Clone, Debug, Display)]
pub enum Utf8ErrorKind {
	/// An invalid byte sequence.
	#[display("invalid")]
	InvalidSequence,
	/// An incomplete character byte sequence at the end of the data.
	#[display("incomplete")]
	IncompleteChar,
}

impl Utf8ErrorKind {
	pub fn is_invalid_sequence(&self) -> bool {
		matches!(self, Self::InvalidSequence)
	}

	pub fn is_incomplete_char(&self) -> bool {
		matches!(self, Self::IncompleteChar)
	}
}

impl From<compat::Utf8Error> for Utf8Error {
	fn from(value: compat::Utf8Error) -> Self {
		let kind = if value.error_len().is_some() {
			Utf8ErrorKind::InvalidSequence
		} else {
			Utf8ErrorKind::IncompleteChar
		};
		Self { valid_up_to: value.valid_up_to(), kind }
	}
}
