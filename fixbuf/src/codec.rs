// SPDX-License-Identifier: Apache-2.0

//! Conversion between bytes and text for the non-base64 encodings.
//!
//! Buffers only own bounds checking around these conversions; the conversions
//! themselves go through a [`TextCodec`]. [`StdCodec`] is used unless another
//! codec is passed to one of the `*_with` buffer methods.

use crate::TextEncoding;

/// The result of encoding text into a byte slice.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Encoded {
	/// The number of bytes written.
	pub bytes: usize,
	/// The number of characters consumed from the text.
	pub chars: usize,
	/// Whether the last written byte is a NUL terminator added by the codec,
	/// rather than part of the text.
	pub terminated: bool,
}

/// Converts between bytes and text in the binary, ASCII, and UTF-8 encodings.
pub trait TextCodec {
	/// Decodes `bytes` into a string.
	fn decode(&self, bytes: &[u8], encoding: TextEncoding) -> String;

	/// Encodes as much of `text` as fits into `target`.
	fn encode(&self, target: &mut [u8], text: &str, encoding: TextEncoding) -> Encoded;

	/// Returns the length of `text` in the encoding's code units: bytes for UTF-8,
	/// UTF-16 units otherwise.
	fn text_length(&self, text: &str, encoding: TextEncoding) -> usize;
}

/// The default text codec.
///
/// - Binary maps each byte to the code point of the same value. Encoding keeps
///   the low byte of each UTF-16 unit.
/// - ASCII drops the high bit of each byte or unit.
/// - UTF-8 decoding replaces invalid sequences with U+FFFD. Encoding writes only
///   whole characters.
#[derive(Copy, Clone, Debug, Default)]
pub struct StdCodec;

impl TextCodec for StdCodec {
	fn decode(&self, bytes: &[u8], encoding: TextEncoding) -> String {
		match encoding {
			TextEncoding::Binary => bytes.iter().map(|&b| b as char).collect(),
			TextEncoding::Ascii  => bytes.iter().map(|&b| (b & 0x7F) as char).collect(),
			TextEncoding::Utf8   => decode_utf8_lossy(bytes),
		}
	}

	fn encode(&self, target: &mut [u8], text: &str, encoding: TextEncoding) -> Encoded {
		match encoding {
			TextEncoding::Binary => encode_units(target, text, 0xFF),
			TextEncoding::Ascii  => encode_units(target, text, 0x7F),
			TextEncoding::Utf8   => encode_utf8(target, text),
		}
	}

	fn text_length(&self, text: &str, encoding: TextEncoding) -> usize {
		match encoding {
			TextEncoding::Utf8 => text.len(),
			_ => text.encode_utf16().count()
		}
	}
}

fn encode_units(target: &mut [u8], text: &str, mask: u16) -> Encoded {
	let mut count = 0;
	for (slot, unit) in target.iter_mut().zip(text.encode_utf16()) {
		*slot = (unit & mask) as u8;
		count += 1;
	}

	Encoded { bytes: count, chars: count, terminated: false }
}

fn encode_utf8(target: &mut [u8], text: &str) -> Encoded {
	let mut bytes = 0;
	let mut chars = 0;
	for c in text.chars() {
		let Some(slot) = target.get_mut(bytes..bytes + c.len_utf8()) else { break };
		c.encode_utf8(slot);
		bytes += slot.len();
		chars += 1;
	}

	Encoded { bytes, chars, terminated: false }
}

fn decode_utf8_lossy(bytes: &[u8]) -> String {
	match simdutf8::basic::from_utf8(bytes) {
		Ok(str) => str.to_owned(),
		Err(_) => String::from_utf8_lossy(bytes).into_owned()
	}
}
