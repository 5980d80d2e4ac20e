// SPDX-License-Identifier: Apache-2.0

//! Standard-alphabet base64 with `=` padding.
//!
//! Decoding is lenient in one direction only: it stops at the first padding
//! character or non-alphabet byte, keeping whatever the symbols before it
//! produced. [`decoded_size`] predicts the output size from the input length and
//! trailing padding alone, without decoding.

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: u8 = b'=';
/// Maps each alphabet byte to its 6-bit value, and all other bytes to `-1`.
const INVERSE: [i8; 256] = invert(ALPHABET);

const fn invert(alphabet: &[u8; 64]) -> [i8; 256] {
	let mut table = [-1; 256];
	let mut i = 0;
	while i < alphabet.len() {
		table[alphabet[i] as usize] = i as i8;
		i += 1;
	}
	table
}

#[inline]
fn symbol(sextet: u8) -> char {
	ALPHABET[(sextet & 0x3F) as usize] as char
}

#[inline]
fn sextet(byte: u8) -> Option<u8> {
	u8::try_from(INVERSE[byte as usize]).ok()
}

/// Returns the number of characters `len` bytes encode into, padding included.
pub const fn encoded_len(len: usize) -> usize {
	(len + 2 - (len + 2) % 3) / 3 * 4
}

/// Encodes `input` into a new string.
pub fn encode(input: &[u8]) -> String {
	let mut buf = String::with_capacity(encoded_len(input.len()));
	encode_into(input, &mut buf);
	buf
}

/// Appends `input` encoded to `target`, returning a slice containing the written
/// characters.
pub fn encode_into<'a>(input: &[u8], target: &'a mut String) -> &'a str {
	let start = target.len();
	target.reserve(encoded_len(input.len()));

	for group in input.chunks(3) {
		let b0 = group[0];
		let b1 = group.get(1).copied();
		let b2 = group.get(2).copied();
		let (b1_or_zero, b2_or_zero) = (b1.unwrap_or(0), b2.unwrap_or(0));

		target.push(symbol(b0 >> 2));
		target.push(symbol(b0 << 4 | b1_or_zero >> 4));
		target.push(if b1.is_some() { symbol(b1_or_zero << 2 | b2_or_zero >> 6) } else { PAD as char });
		target.push(if b2.is_some() { symbol(b2_or_zero) } else { PAD as char });
	}

	debug_assert_eq!(target.len() - start, encoded_len(input.len()));
	&target[start..]
}

/// Decodes `input` into a new byte vector, stopping at the first padding or
/// invalid character.
pub fn decode(input: &[u8]) -> Vec<u8> {
	// Full groups yield 3 bytes, a trailing partial group at most 2.
	let mut buf = vec![0; input.len() / 4 * 3 + 2];
	let len = decode_into(input, &mut buf);
	buf.truncate(len);
	buf
}

/// Decodes `input` into `target`, returning the number of bytes written. Decoding
/// stops at the first padding or invalid character, at the end of the input, or
/// when `target` is full, whichever comes first.
///
/// Input is consumed in groups of four characters. Within a group, one valid
/// character produces nothing, two produce one byte, three produce two bytes,
/// and four produce three bytes.
pub fn decode_into(input: &[u8], target: &mut [u8]) -> usize {
	let mut written = 0;
	let mut emit = |byte: u8| {
		let Some(slot) = target.get_mut(written) else { return false };
		*slot = byte;
		written += 1;
		true
	};

	for group in input.chunks(4) {
		let mut sextets = group.iter().map_while(|&c| sextet(c));

		let Some(a) = sextets.next() else { break };
		let Some(b) = sextets.next() else { break };
		if !emit(a << 2 | b >> 4) { break }

		let Some(c) = sextets.next() else { break };
		if !emit(b << 4 | c >> 2) { break }

		let Some(d) = sextets.next() else { break };
		if !emit(c << 6 | d) { break }
	}

	written
}

/// Returns the number of leading alphabet characters in `input`, the characters
/// decoding reads before it stops at padding or an invalid character.
pub fn data_len(input: &[u8]) -> usize {
	input.iter()
		 .position(|&c| sextet(c).is_none())
		 .unwrap_or(input.len())
}

/// Predicts the number of bytes `input` decodes into, from its length and any
/// trailing padding.
///
/// Each full group of four characters counts three bytes. A leftover of two or
/// three characters adds one or two bytes; a single leftover character adds one
/// after full groups, but alone decodes to nothing. Each `=` among the last two
/// characters then subtracts one.
pub fn decoded_size(input: &[u8]) -> usize {
	let remainder = input.len() % 4;
	let mut size = input.len() / 4 * 3;

	if remainder == 1 && size == 0 {
		return 0
	}

	size += match remainder {
		0 => 0,
		3 => 2,
		_ => 1,
	};

	let padding = input.iter()
					   .rev()
					   .take(2)
					   .filter(|&&c| c == PAD)
					   .count();
	size.saturating_sub(padding)
}
