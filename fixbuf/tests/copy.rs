// SPDX-License-Identifier: Apache-2.0

use pretty_assertions::assert_eq;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use fixbuf::{Bound, Buffer, Operation, RangeError};

#[macro_use]
mod common;

const DIGITS: &[u8; 10] = b"0123456789";

#[test]
fn between_buffers() {
	let source = Buffer::from_slice(DIGITS).unwrap();
	let mut target = common::filled(6, b'.');
	assert_eq!(source.copy(&mut target, 1, 2, Some(6)).unwrap(), 4);
	assert_eq!(target, *b".2345.");
}

#[test]
fn source_end_defaults_to_length() {
	let source = Buffer::from_slice(DIGITS).unwrap();
	let mut target = common::filled(10, b'.');
	assert_eq!(source.copy(&mut target, 0, 7, None).unwrap(), 3);
	assert_eq!(target, *b"789.......");
}

#[test]
fn clamps_to_target() {
	let source = Buffer::from_slice(DIGITS).unwrap();
	let mut target = common::filled(4, b'.');
	assert_eq!(source.copy(&mut target, 2, 0, None).unwrap(), 2);
	assert_eq!(target, *b"..01");
}

#[test]
fn overlapping_within() {
	let mut buffer = Buffer::from_slice(DIGITS).unwrap();
	assert_eq!(buffer.copy_within(2, Some(7), 0).unwrap(), 5);

	// Same result as going through a separate scratch buffer.
	let source = Buffer::from_slice(DIGITS).unwrap();
	let mut scratch = Buffer::allocate(5).unwrap();
	source.copy(&mut scratch, 0, 2, Some(7)).unwrap();
	let mut expected = Buffer::from_slice(DIGITS).unwrap();
	scratch.copy(&mut expected, 0, 0, None).unwrap();

	assert_eq!(buffer.as_slice().unwrap(), expected.as_slice().unwrap());
	assert_eq!(buffer, *b"2345656789");
}

#[test]
fn overlapping_within_forward() {
	let mut buffer = Buffer::from_slice(DIGITS).unwrap();
	assert_eq!(buffer.copy_within(0, Some(5), 3).unwrap(), 5);
	assert_eq!(buffer, *b"0120123489");
}

#[test]
fn empty_range_ignores_other_bounds() {
	let source = Buffer::from_slice(DIGITS).unwrap();
	let mut target = Buffer::allocate(2).unwrap();
	assert_eq!(source.copy(&mut target, 50, 40, Some(40)).unwrap(), 0);

	let mut empty = Buffer::allocate(0).unwrap();
	assert_eq!(source.copy(&mut empty, 0, 3, Some(3)).unwrap(), 0);
}

#[test]
fn inverted_range() {
	let source = Buffer::from_slice(DIGITS).unwrap();
	let mut target = Buffer::allocate(10).unwrap();
	let err = source.copy(&mut target, 0, 5, Some(4)).unwrap_err();
	assert_eq!(err.operation(), Operation::Copy);
	assert_eq!(err.range_error(), Some(RangeError::Inverted { start: 5, end: 4 }));
}

#[test]
fn out_of_bounds() {
	let source = Buffer::from_slice(DIGITS).unwrap();
	let mut target = common::filled(4, b'.');

	let cases = [
		(4, 0, None, Bound::TargetStart, 4, 4),
		(0, 10, Some(11), Bound::SourceStart, 10, 10),
		(0, 2, Some(11), Bound::SourceEnd, 11, 10),
	];

	for (target_start, source_start, source_end, bound, value, limit) in cases {
		let err = source.copy(&mut target, target_start, source_start, source_end).unwrap_err();
		assert_eq!(err.range_error(), Some(RangeError::OutOfBounds { bound, value, limit }));
	}
	assert_eq!(target, *b"....");
}

#[quickcheck]
fn within_matches_scratch(data: Vec<u8>, from: usize, to: usize, len: usize) -> TestResult {
	if data.is_empty() {
		return TestResult::discard()
	}

	let source_start = from % data.len();
	let target_start = to % data.len();
	let source_end = source_start + len % (data.len() - source_start + 1);

	let mut buffer = Buffer::from_slice(&data).unwrap();
	let count = buffer.copy_within(source_start, Some(source_end), target_start).unwrap();

	let mut expected = data.clone();
	let moved = data[source_start..source_start + count].to_vec();
	expected[target_start..target_start + count].copy_from_slice(&moved);
	qc_assert_eq!(buffer.as_slice().unwrap(), &expected[..])
}
