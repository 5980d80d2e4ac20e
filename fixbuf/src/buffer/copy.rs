// SPDX-License-Identifier: Apache-2.0

use std::cmp::min;
use all_asserts::debug_assert_le;
use log::debug;
use crate::{Accounting, Bound, Buffer, Error, Result};
use crate::Operation::Copy;

impl<A: Accounting> Buffer<A> {
	/// Copies bytes in `source_start..source_end` into `target` at `target_start`,
	/// returning the number of bytes copied. `source_end` defaults to the length
	/// of this buffer.
	///
	/// An empty source range copies nothing and succeeds without checking the
	/// other positions. Otherwise `target_start` and `source_start` must be inside
	/// their buffers, and `source_end` must not be past the end of this buffer.
	/// The copy is clamped to the space remaining in `target`.
	pub fn copy<B: Accounting>(
		&self,
		target: &mut Buffer<B>,
		target_start: usize,
		source_start: usize,
		source_end: Option<usize>
	) -> Result<usize> {
		let source = self.data(Copy)?;
		let target = target.data_mut(Copy)?;
		let count = copy_len(source.len(), source_start, source_end, target.len(), target_start)?;

		if count > 0 {
			target[target_start..target_start + count]
				.copy_from_slice(&source[source_start..source_start + count]);
		}
		Ok(count)
	}

	/// Copies bytes in `source_start..source_end` to `target_start` within this
	/// buffer, returning the number of bytes copied. The ranges may overlap. Range
	/// checks and clamping are the same as [`copy`](Self::copy).
	pub fn copy_within(
		&mut self,
		source_start: usize,
		source_end: Option<usize>,
		target_start: usize
	) -> Result<usize> {
		let data = self.data_mut(Copy)?;
		let len = data.len();
		let count = copy_len(len, source_start, source_end, len, target_start)?;

		if count > 0 {
			data.copy_within(source_start..source_start + count, target_start);
		}
		Ok(count)
	}
}

/// Checks copy positions, returning the clamped number of bytes to copy.
fn copy_len(
	source_len: usize,
	source_start: usize,
	source_end: Option<usize>,
	target_len: usize,
	target_start: usize
) -> Result<usize> {
	let source_end = source_end.unwrap_or(source_len);

	if source_end < source_start {
		return Err(Error::inverted(Copy, source_start, source_end))
	}

	if source_end == source_start {
		return Ok(0)
	}

	if target_start >= target_len {
		return Err(Error::out_of_bounds(Copy, Bound::TargetStart, target_start, target_len))
	}

	if source_start >= source_len {
		return Err(Error::out_of_bounds(Copy, Bound::SourceStart, source_start, source_len))
	}

	if source_end > source_len {
		return Err(Error::out_of_bounds(Copy, Bound::SourceEnd, source_end, source_len))
	}

	let requested = source_end - source_start;
	let count = min(min(requested, target_len - target_start), source_len - source_start);
	if count < requested {
		debug!("copy clamped from {requested}B to {count}B");
	}

	debug_assert_le!(target_start + count, target_len);
	Ok(count)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_range_skips_checks() {
		assert_eq!(copy_len(4, 9, Some(9), 0, 100).unwrap(), 0);
	}

	#[test]
	fn clamps_to_target() {
		assert_eq!(copy_len(10, 0, None, 4, 1).unwrap(), 3);
	}
}
