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

//! ## How it works
//!
//! A [`Buffer`] is a fixed-length block of owned bytes. Its length is chosen at
//! allocation and never changes; there is no growing, shrinking, or sharing of
//! storage between buffers. Storage is zero-filled (or filled with a chosen byte)
//! when allocated, and freed when the buffer is released or dropped.
//!
//! ### Ranges
//!
//! Text is read out of a buffer with `slice` and written into it with `write`, in
//! one of four [encodings](Encoding): binary (Latin-1), ASCII, UTF-8, and base64.
//! Every position is checked against the buffer before any byte is touched; an
//! invalid range is an error, never silently clamped. The two exceptions are
//! copies, which copy as much as fits into the target, and base64 decoding, which
//! stops at the first padding or invalid character.
//!
//! ### Codecs
//!
//! Base64 is implemented here, in [`base64`]. The other encodings are delegated to
//! a [`TextCodec`]; buffers only handle the offsets and counts around it. The
//! default [`StdCodec`] can be swapped out with the `*_with` methods.
//!
//! ### Accounting
//!
//! Buffer memory is reported to an [`Accounting`] hook on allocation and release,
//! so a host runtime holding buffers can factor their memory into its own garbage
//! collection. By default this goes to the process-wide [`GlobalAccounting`].

mod accounting;
pub mod base64;
mod buffer;
mod codec;
mod encoding;
mod error;

pub use accounting::*;
pub use buffer::*;
pub use codec::*;
pub use encoding::*;
pub use error::*;

/// Returns the number of bytes `text` occupies in `encoding`, without encoding
/// it, using the default [`StdCodec`]. For base64 this is the predicted
/// [decoded size](base64::decoded_size), the amount of space to allocate for a
/// base64 [`write`](Buffer::write).
pub fn byte_length(text: &str, encoding: Encoding) -> usize {
	byte_length_with(&StdCodec, text, encoding)
}

/// Returns the number of bytes `text` occupies in `encoding`, measuring binary,
/// ASCII, and UTF-8 text with `codec`.
pub fn byte_length_with(codec: &impl TextCodec, text: &str, encoding: Encoding) -> usize {
	match encoding.text() {
		Some(encoding) => codec.text_length(text, encoding),
		None => base64::decoded_size(text.as_bytes())
	}
}
