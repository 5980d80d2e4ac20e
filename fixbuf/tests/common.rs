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

#![allow(dead_code, unused_macros)]

use std::cell::Cell;
use std::fmt::{Arguments, Debug};
use std::rc::Rc;
use fixbuf::{Accounting, Buffer, BufferOptions};

macro_rules! qc_assert_eq {
	($left:expr,$right:expr) => {{
		let left = $left;
		let right = $right;
		if left == right {
			TestResult::passed()
		} else {
			TestResult::error(
				common::format_qc_assert_error(&left, &right, None)
			)
		}
	}};
    ($left:expr,$right:expr,$($arg:tt)+) => {{
		let left = $left;
		let right = $right;
		if left == right {
			TestResult::passed()
		} else {
			TestResult::error(
				common::format_qc_assert_error(&left, &right, Some(format_args!($($arg)+)))
			)
		}
	}};
}

pub fn format_qc_assert_error<L: Debug, R: Debug>(left: &L, right: &R, msg: Option<Arguments>) -> String {
	if let Some(msg) = msg {
		format!(
			"assertion failed `(left == right)`: {msg}\n \
			left: `{left:?}`,\nright: `{right:?}`",
		)
	} else {
		format!(
			"assertion failed `(left == right)`:\n \
			left: `{left:?}`,\nright: `{right:?}`",
		)
	}
}

/// Accounting which records its running total, for checking allocation and
/// release deltas.
#[derive(Clone, Debug, Default)]
pub struct MockAccounting {
	pub total: Rc<Cell<isize>>,
	pub calls: Rc<Cell<usize>>,
}

impl Accounting for MockAccounting {
	fn adjust(&self, delta: isize) {
		self.total.set(self.total.get() + delta);
		self.calls.set(self.calls.get() + 1);
	}
}

/// Allocates a buffer of `len` bytes, all set to `byte`.
pub fn filled(len: usize, byte: u8) -> Buffer {
	Buffer::allocate_with(
		fixbuf::GlobalAccounting,
		BufferOptions::default().with_fill(byte),
		len
	).unwrap()
}
