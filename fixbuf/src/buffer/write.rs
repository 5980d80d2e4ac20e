// SPDX-License-Identifier: Apache-2.0

use std::cmp::min;
use log::debug;
use crate::{Accounting, base64, Buffer, Encoded, Encoding, Error, ErrorKind, Result, StdCodec, TextCodec, TextEncoding};
use crate::Operation::Write;

/// The result of writing text into a buffer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Written {
	/// The number of bytes written. For base64, this is the predicted decoded
	/// size of the text.
	pub bytes: usize,
	/// The number of characters consumed from the text. For base64, these are
	/// the characters before the first padding or invalid character.
	pub chars: usize,
}

impl<A: Accounting> Buffer<A> {
	/// Writes `text` in `encoding` at `offset`, using the default [`StdCodec`].
	/// At most `max_length` bytes are written if set, never more than fit between
	/// `offset` and the end of the buffer. Returns the number of bytes written.
	///
	/// See [`write_counted_with`](Self::write_counted_with) for details.
	pub fn write(
		&mut self,
		text: &str,
		offset: usize,
		encoding: Encoding,
		max_length: Option<usize>
	) -> Result<usize> {
		self.write_with(&StdCodec, text, offset, encoding, max_length)
	}

	/// Writes `text` in `encoding` at `offset`, encoding binary, ASCII, and UTF-8
	/// with `codec`. Returns the number of bytes written.
	pub fn write_with(
		&mut self,
		codec: &impl TextCodec,
		text: &str,
		offset: usize,
		encoding: Encoding,
		max_length: Option<usize>
	) -> Result<usize> {
		self.write_counted_with(codec, text, offset, encoding, max_length)
			.map(|Written { bytes, .. }| bytes)
	}

	/// Writes `text` in `encoding` at `offset` with the default [`StdCodec`],
	/// returning both the bytes written and the characters consumed.
	pub fn write_counted(
		&mut self,
		text: &str,
		offset: usize,
		encoding: Encoding,
		max_length: Option<usize>
	) -> Result<Written> {
		self.write_counted_with(&StdCodec, text, offset, encoding, max_length)
	}

	/// Writes `text` in `encoding` at `offset`, returning both the bytes written
	/// and the characters consumed.
	///
	/// The write is confined to a window starting at `offset`, as long as the
	/// smaller of `max_length` and the space remaining in the buffer. Fails with
	/// [`OffsetOutOfBounds`](ErrorKind::OffsetOutOfBounds) if `offset` is past the
	/// end of the buffer, or at the end with non-empty `text`.
	///
	/// Binary, ASCII, and UTF-8 text is encoded by `codec`, which writes as much as
	/// fits into the window. A trailing NUL terminator reported by the codec for
	/// UTF-8 is not counted.
	///
	/// Base64 text is never truncated: if its [decoded size](base64::decoded_size)
	/// exceeds the window, this fails with [`DestinationTooSmall`] and nothing is
	/// written. Decoding stops early at the first padding or invalid character.
	/// The decoded size is returned even when decoding stopped early; bytes past
	/// those actually decoded are left as they were.
	///
	/// [`DestinationTooSmall`]: ErrorKind::DestinationTooSmall
	pub fn write_counted_with(
		&mut self,
		codec: &impl TextCodec,
		text: &str,
		offset: usize,
		encoding: Encoding,
		max_length: Option<usize>
	) -> Result<Written> {
		let length = self.len();
		let data = self.data_mut(Write)?;

		if offset > length || (offset == length && !text.is_empty()) {
			return Err(Error::new(Write, ErrorKind::OffsetOutOfBounds { offset, length }))
		}

		let available = length - offset;
		let limit = max_length.map_or(available, |max| min(max, available));
		let window = &mut data[offset..offset + limit];

		match encoding.text() {
			Some(encoding) => Ok(encode_text(codec, window, text, encoding)),
			None => write_base64(window, text)
		}
	}
}

fn encode_text(
	codec: &impl TextCodec,
	window: &mut [u8],
	text: &str,
	encoding: TextEncoding
) -> Written {
	let Encoded { bytes, chars, terminated } = codec.encode(window, text, encoding);
	let mut bytes = min(bytes, window.len());

	if encoding == TextEncoding::Utf8 && terminated && bytes > 0 && window[bytes - 1] == 0 {
		bytes -= 1;
	}

	Written { bytes, chars }
}

fn write_base64(window: &mut [u8], text: &str) -> Result<Written> {
	let input = text.as_bytes();
	let size = base64::decoded_size(input);
	if size > window.len() {
		return Err(Error::new(
			Write,
			ErrorKind::DestinationTooSmall {
				required: size,
				available: window.len()
			}
		))
	}

	let decoded = base64::decode_into(input, &mut window[..size]);
	if decoded < size {
		debug!("base64 decoding stopped after {decoded}B of a predicted {size}B");
	}

	Ok(Written { bytes: size, chars: base64::data_len(input) })
}
