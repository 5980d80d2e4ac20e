// Copyright 2023 Strixpyrr
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

use std::result;
use amplify_derive::Display;

pub type Result<T = ()> = result::Result<T, Error>;

/// A buffer error, pairing the failed operation with the reason it failed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{op} failed; {kind}")]
pub struct Error {
	op: Operation,
	kind: ErrorKind,
}

/// The operation an [`Error`] was raised from.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum Operation {
	#[display("allocate buffer")]
	Allocate,
	#[display("release buffer")]
	Release,
	#[display("access buffer")]
	Access,
	#[display("slice buffer")]
	Slice,
	#[display("write to buffer")]
	Write,
	#[display("copy buffer")]
	Copy,
	#[display("parse encoding")]
	Parse,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ErrorKind {
	/// A start, end, or source/target position outside the buffer.
	#[error(transparent)]
	Range(#[from] RangeError),
	/// A write offset at or past the end of the buffer.
	#[error("offset {offset} is out of bounds for length {length}")]
	OffsetOutOfBounds {
		offset: usize,
		length: usize,
	},
	/// Decoded data would not fit in the destination window.
	#[error("{required}B of decoded data does not fit in {available}B")]
	DestinationTooSmall {
		required: usize,
		available: usize,
	},
	/// Storage could not be obtained from the allocator.
	#[error("could not allocate {length}B")]
	Allocation {
		length: usize,
	},
	/// An argument of the wrong kind or value.
	#[error("bad argument: {0}")]
	InvalidArgument(&'static str),
	/// The buffer's storage was already released.
	#[error("buffer storage was released")]
	UseAfterRelease,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RangeError {
	#[error("start {start} must not be greater than end {end}")]
	Inverted {
		start: usize,
		end: usize,
	},
	#[error("{bound} {value} is out of bounds for length {limit}")]
	OutOfBounds {
		bound: Bound,
		value: usize,
		limit: usize,
	},
}

/// The range bound violated by a [`RangeError::OutOfBounds`].
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum Bound {
	#[display("start")]
	Start,
	#[display("end")]
	End,
	#[display("source start")]
	SourceStart,
	#[display("source end")]
	SourceEnd,
	#[display("target start")]
	TargetStart,
}

impl Error {
	pub(crate) fn new(op: Operation, kind: ErrorKind) -> Self {
		Self { op, kind }
	}

	pub(crate) fn inverted(op: Operation, start: usize, end: usize) -> Self {
		Self::new(op, RangeError::Inverted { start, end }.into())
	}

	pub(crate) fn out_of_bounds(op: Operation, bound: Bound, value: usize, limit: usize) -> Self {
		Self::new(op, RangeError::OutOfBounds { bound, value, limit }.into())
	}

	pub(crate) fn released(op: Operation) -> Self {
		Self::new(op, ErrorKind::UseAfterRelease)
	}

	/// Returns the operation kind.
	pub fn operation(&self) -> Operation { self.op }

	/// Sets the operation kind.
	pub fn with_operation(mut self, op: Operation) -> Self {
		self.op = op;
		self
	}

	/// Returns the error kind.
	pub fn kind(&self) -> ErrorKind { self.kind }

	/// Returns the range error, if this error was caused by an invalid range.
	pub fn range_error(&self) -> Option<RangeError> {
		if let ErrorKind::Range(err) = self.kind {
			Some(err)
		} else {
			None
		}
	}

	pub fn is_range(&self) -> bool {
		matches!(self.kind, ErrorKind::Range(_))
	}

	pub fn is_use_after_release(&self) -> bool {
		matches!(self.kind, ErrorKind::UseAfterRelease)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use super::*;

	#[test]
	fn display() {
		let err = Error::out_of_bounds(Operation::Copy, Bound::TargetStart, 12, 10);
		assert_eq!(
			err.to_string(),
			"copy buffer failed; target start 12 is out of bounds for length 10"
		);

		let err = Error::new(
			Operation::Write,
			ErrorKind::DestinationTooSmall { required: 6, available: 4 }
		);
		assert_eq!(
			err.to_string(),
			"write to buffer failed; 6B of decoded data does not fit in 4B"
		);
	}

	#[test]
	fn with_operation() {
		let err = Error::released(Operation::Access).with_operation(Operation::Copy);
		assert_eq!(err.operation(), Operation::Copy);
		assert!(err.is_use_after_release());
		assert!(err.range_error().is_none());
		assert_eq!(err.to_string(), "copy buffer failed; buffer storage was released");
	}
}
