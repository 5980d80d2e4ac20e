// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;
use amplify_derive::Display;
use crate::{Error, ErrorKind, Operation};

/// The encoding text is read from or written into a buffer with.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash)]
pub enum Encoding {
	/// Latin-1: one byte per character.
	#[display("binary")]
	Binary,
	/// 7-bit ASCII.
	#[display("ascii")]
	Ascii,
	#[default]
	#[display("utf8")]
	Utf8,
	/// Standard-alphabet, padded base64.
	#[display("base64")]
	Base64,
}

/// The subset of [`Encoding`] handled by a [`TextCodec`](crate::TextCodec).
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum TextEncoding {
	#[display("binary")]
	Binary,
	#[display("ascii")]
	Ascii,
	#[display("utf8")]
	Utf8,
}

impl Encoding {
	/// Returns the text codec encoding, or `None` for base64, which is handled
	/// by [`base64`](crate::base64) directly.
	pub fn text(self) -> Option<TextEncoding> {
		match self {
			Self::Binary => Some(TextEncoding::Binary),
			Self::Ascii  => Some(TextEncoding::Ascii),
			Self::Utf8   => Some(TextEncoding::Utf8),
			Self::Base64 => None
		}
	}

	/// Returns `true` if the encoding is [`Base64`](Self::Base64).
	pub fn is_base64(&self) -> bool {
		matches!(self, Self::Base64)
	}
}

impl From<TextEncoding> for Encoding {
	fn from(value: TextEncoding) -> Self {
		match value {
			TextEncoding::Binary => Self::Binary,
			TextEncoding::Ascii  => Self::Ascii,
			TextEncoding::Utf8   => Self::Utf8,
		}
	}
}

impl FromStr for Encoding {
	type Err = Error;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		const NAMES: [(&str, Encoding); 5] = [
			("binary", Encoding::Binary),
			("ascii" , Encoding::Ascii ),
			("utf8"  , Encoding::Utf8  ),
			("utf-8" , Encoding::Utf8  ),
			("base64", Encoding::Base64),
		];

		NAMES.iter()
			 .find(|(n, _)| n.eq_ignore_ascii_case(name))
			 .map(|&(_, encoding)| encoding)
			 .ok_or(Error::new(Operation::Parse, ErrorKind::InvalidArgument("unknown encoding")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse() {
		assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
		assert_eq!("base64".parse::<Encoding>().unwrap(), Encoding::Base64);
		assert_eq!(
			"ucs2".parse::<Encoding>().unwrap_err().kind(),
			ErrorKind::InvalidArgument("unknown encoding")
		);
	}

	#[test]
	fn text_subset() {
		for encoding in [TextEncoding::Binary, TextEncoding::Ascii, TextEncoding::Utf8] {
			let full = Encoding::from(encoding);
			assert_eq!(full.text(), Some(encoding));
			assert!(!full.is_base64());
		}
		assert_eq!(Encoding::Base64.text(), None);
		assert!(Encoding::Base64.is_base64());
	}

	#[test]
	fn display_round_trips() {
		for encoding in [Encoding::Binary, Encoding::Ascii, Encoding::Utf8, Encoding::Base64] {
			assert_eq!(encoding.to_string().parse::<Encoding>().unwrap(), encoding);
		}
	}
}
