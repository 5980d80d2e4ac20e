// SPDX-License-Identifier: Apache-2.0

use std::mem;
use super::Buffer;

/// Options for buffer allocation.
///
/// # Fill
///
/// The byte new storage is filled with. Defaults to `0`. Storage is always
/// initialized; callers shouldn't rely on any particular content in bytes they
/// haven't written, but they will never observe uninitialized memory.
///
/// # Overhead
///
/// The number of bytes reported to the [accounting](crate::Accounting) hook on
/// top of the storage length, approximating the memory held by the buffer itself.
/// Defaults to the size of [`Buffer`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct BufferOptions {
	pub fill: u8,
	pub overhead: usize,
}

impl Default for BufferOptions {
	fn default() -> Self { Self::new() }
}

impl BufferOptions {
	/// Creates a new set of buffer options.
	pub const fn new() -> Self {
		Self {
			fill: 0,
			overhead: mem::size_of::<Buffer>(),
		}
	}

	/// Returns the fill byte.
	#[inline]
	pub const fn fill(&self) -> u8 { self.fill }

	/// Returns the accounting overhead.
	#[inline]
	pub const fn overhead(&self) -> usize { self.overhead }

	/// Sets the fill byte.
	#[inline]
	pub fn set_fill(&mut self, value: u8) {
		self.fill = value;
	}

	/// Sets the accounting overhead.
	#[inline]
	pub fn set_overhead(&mut self, value: usize) {
		self.overhead = value;
	}

	/// Sets the fill byte.
	#[inline]
	pub const fn with_fill(mut self, value: u8) -> Self {
		self.fill = value;
		self
	}

	/// Sets the accounting overhead.
	#[inline]
	pub const fn with_overhead(mut self, value: usize) -> Self {
		self.overhead = value;
		self
	}
}
