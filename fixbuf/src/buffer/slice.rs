// SPDX-License-Identifier: Apache-2.0

use crate::{Accounting, base64, Bound, Buffer, Encoding, Error, Operation, Result, StdCodec, TextCodec};
use crate::Operation::Slice;

impl<A: Accounting> Buffer<A> {
	/// Reads bytes in the range `start..end` out as text in `encoding`, using the
	/// default [`StdCodec`].
	///
	/// Fails with a range error if `start > end` or `end` is past the end of the
	/// buffer; ranges are never clamped.
	pub fn slice(&self, start: usize, end: usize, encoding: Encoding) -> Result<String> {
		self.slice_with(&StdCodec, start, end, encoding)
	}

	/// Reads bytes in the range `start..end` out as text in `encoding`, decoding
	/// binary, ASCII, and UTF-8 with `codec`.
	pub fn slice_with(
		&self,
		codec: &impl TextCodec,
		start: usize,
		end: usize,
		encoding: Encoding
	) -> Result<String> {
		let bytes = self.range(Slice, start, end)?;
		Ok(
			match encoding.text() {
				Some(encoding) => codec.decode(bytes, encoding),
				None => base64::encode(bytes)
			}
		)
	}

	/// Borrows bytes in the range `start..end`, checking it against the buffer.
	pub(crate) fn range(&self, op: Operation, start: usize, end: usize) -> Result<&[u8]> {
		let data = self.data(op)?;

		if start > end {
			return Err(Error::inverted(op, start, end))
		}

		if end > data.len() {
			return Err(Error::out_of_bounds(op, Bound::End, end, data.len()))
		}

		Ok(&data[start..end])
	}
}
