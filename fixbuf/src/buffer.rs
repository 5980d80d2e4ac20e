// SPDX-License-Identifier: Apache-2.0

mod copy;
mod options;
mod slice;
mod write;

pub use options::*;
pub use write::Written;

use std::fmt;
use std::fmt::{Debug, Formatter};
use log::trace;
use crate::{Accounting, Encoding, Error, ErrorKind, GlobalAccounting, Result};
use crate::Operation::{Access, Allocate, Release};

/// A fixed-length, owned byte buffer.
///
/// The length is set at allocation and never changes. Storage is freed either by
/// [`release`](Self::release) or when the buffer is dropped; after an explicit
/// release, every operation on the buffer fails with
/// [`UseAfterRelease`](ErrorKind::UseAfterRelease).
pub struct Buffer<A: Accounting = GlobalAccounting> {
	data: Option<Box<[u8]>>,
	length: usize,
	overhead: usize,
	accounting: A,
}

impl Buffer {
	/// Allocates a buffer of `length` bytes with the default options, reporting
	/// to [`GlobalAccounting`].
	pub fn allocate(length: usize) -> Result<Self> {
		Self::allocate_with(GlobalAccounting, BufferOptions::default(), length)
	}

	/// Allocates a buffer containing a copy of `value`.
	pub fn from_slice<T: AsRef<[u8]> + ?Sized>(value: &T) -> Result<Self> {
		let value = value.as_ref();
		let mut buf = Self::allocate(value.len())?;
		buf.as_mut_slice()?.copy_from_slice(value);
		Ok(buf)
	}

	/// Returns the number of bytes `text` occupies in `encoding`, without
	/// encoding it. Shorthand for [`byte_length`](crate::byte_length).
	pub fn byte_length(text: &str, encoding: Encoding) -> usize {
		crate::byte_length(text, encoding)
	}
}

impl<A: Accounting> Buffer<A> {
	/// Allocates a buffer of `length` bytes reporting to `accounting`. Fails with
	/// [`Allocation`](ErrorKind::Allocation) if the allocator can't satisfy the
	/// request.
	pub fn allocate_with(
		accounting: A,
		BufferOptions { fill, overhead }: BufferOptions,
		length: usize
	) -> Result<Self> {
		let mut data = Vec::new();
		data.try_reserve_exact(length)
			.map_err(|_| Error::new(Allocate, ErrorKind::Allocation { length }))?;
		data.resize(length, fill);

		let buf = Self {
			data: Some(data.into_boxed_slice()),
			length,
			overhead,
			accounting,
		};
		trace!("allocated {length}B buffer");
		buf.accounting.adjust(buf.footprint());
		Ok(buf)
	}

	/// Returns the length in bytes of the buffer. The length is retained after
	/// release.
	#[inline]
	pub fn len(&self) -> usize { self.length }

	/// Returns `true` if the buffer has a length of zero.
	#[inline]
	pub fn is_empty(&self) -> bool { self.length == 0 }

	/// Returns `true` if the buffer's storage was released.
	#[inline]
	pub fn is_released(&self) -> bool { self.data.is_none() }

	/// Returns the accounting instance.
	pub fn accounting(&self) -> &A { &self.accounting }

	/// Returns the buffer's bytes.
	pub fn as_slice(&self) -> Result<&[u8]> {
		self.data(Access)
	}

	/// Returns the buffer's bytes mutably.
	pub fn as_mut_slice(&mut self) -> Result<&mut [u8]> {
		self.data_mut(Access)
	}

	/// Frees the buffer's storage and reverses its accounting. Fails with
	/// [`UseAfterRelease`](ErrorKind::UseAfterRelease) if already released.
	pub fn release(&mut self) -> Result {
		let Some(data) = self.data.take() else {
			return Err(Error::released(Release))
		};

		drop(data);
		trace!("released {}B buffer", self.length);
		self.accounting.adjust(-self.footprint());
		Ok(())
	}

	pub(crate) fn data(&self, op: crate::Operation) -> Result<&[u8]> {
		self.data.as_deref().ok_or(Error::released(op))
	}

	pub(crate) fn data_mut(&mut self, op: crate::Operation) -> Result<&mut [u8]> {
		self.data.as_deref_mut().ok_or(Error::released(op))
	}

	/// The memory reported to accounting for this buffer.
	fn footprint(&self) -> isize {
		isize::try_from(self.overhead.saturating_add(self.length)).unwrap_or(isize::MAX)
	}
}

impl<A: Accounting> Drop for Buffer<A> {
	fn drop(&mut self) {
		if !self.is_released() {
			let _ = self.release();
		}
	}
}

impl<A: Accounting> Debug for Buffer<A> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Buffer")
			.field("length", &self.length)
			.field("released", &self.is_released())
			.finish_non_exhaustive()
	}
}

impl<A: Accounting> PartialEq<[u8]> for Buffer<A> {
	fn eq(&self, other: &[u8]) -> bool {
		self.data.as_deref() == Some(other)
	}
}

impl<A: Accounting, const N: usize> PartialEq<[u8; N]> for Buffer<A> {
	fn eq(&self, other: &[u8; N]) -> bool {
		self == &other[..]
	}
}
