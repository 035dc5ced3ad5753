//! Locale independent conversion between numbers and their decimal text.
//!
//! The decimal separator is always `.` and no digit grouping is ever produced or accepted.

use crate::stack_str::StackStr;
use std::{
	fmt::{Error, Write as _},
	str::FromStr,
};

/// A number that can be written in its shortest round-trippable decimal form.
pub trait FormatNumber: Copy {
	/// Buffer size that fits every value of the type:
	/// `digits10 + max_digits10 + 10` (room for sign, point and exponent).
	const MAX_LEN: usize;

	/// Writes `self` into `buf`.
	///
	/// # Errors
	///
	/// Fails if the text doesn't fit in `buf`'s capacity.
	fn write_number(self, buf: &mut StackStr) -> std::fmt::Result;
}

/// A number that can be read back from the start of a piece of text.
pub trait ParseNumber: FromStr + Copy {
	/// Returns the longest prefix of `text` that looks like a number of this type.
	fn numeric_prefix(text: &str) -> &str;

	/// Whether a successfully parsed `prefix` is in range for the type.
	fn in_range(self, _prefix: &str) -> bool {
		true
	}
}

macro_rules! impl_int {
	($($ty:ident),* ; signed = $signed:literal) => {
		$(
			impl FormatNumber for $ty {
				const MAX_LEN: usize = $ty::MAX.ilog10() as usize + 10;

				fn write_number(self, buf: &mut StackStr) -> std::fmt::Result {
					buf.write_str(itoa::Buffer::new().format(self))
				}
			}

			impl ParseNumber for $ty {
				fn numeric_prefix(text: &str) -> &str {
					int_prefix(text, $signed)
				}
			}
		)*
	};
}

impl_int!(i8, i16, i32, i64, i128, isize; signed = true);
impl_int!(u8, u16, u32, u64, u128, usize; signed = false);

macro_rules! impl_float {
	($ty:ident, max_digits10 = $max_digits10:literal) => {
		impl FormatNumber for $ty {
			const MAX_LEN: usize = $ty::DIGITS as usize + $max_digits10 + 10;

			fn write_number(self, buf: &mut StackStr) -> std::fmt::Result {
				// both forms are shortest round-trip, keep whichever is shorter,
				// plain on a tie
				let mut exp = StackStr::with_capacity(buf.capacity());
				let exp_fits = write!(exp, "{self:e}").is_ok();
				let plain_fits = write!(buf, "{self}").is_ok();

				if plain_fits && (!exp_fits || buf.len() <= exp.len()) {
					return Ok(());
				}

				if !exp_fits {
					return Err(Error);
				}

				buf.clear();
				buf.write_str(exp.as_str())
			}
		}

		impl ParseNumber for $ty {
			fn numeric_prefix(text: &str) -> &str {
				float_prefix(text)
			}

			fn in_range(self, _prefix: &str) -> bool {
				self.is_finite()
			}
		}
	};
}

impl_float!(f32, max_digits10 = 9);
impl_float!(f64, max_digits10 = 17);

/// Formats `value`, falling back to `"0"` if it can't be written.
#[must_use]
pub fn format_number<T: FormatNumber>(value: T) -> String {
	format_number_or(value, "0")
}

/// Formats `value`, falling back to `default` if it can't be written.
#[must_use]
pub fn format_number_or<T: FormatNumber>(value: T, default: &str) -> String {
	format_number_with_capacity(value, T::MAX_LEN, default)
}

/// Formats `value` into a buffer of at most `capacity` bytes, returning `default` if the text
/// doesn't fit.
#[must_use]
pub fn format_number_with_capacity<T: FormatNumber>(
	value: T,
	capacity: usize,
	default: &str,
) -> String {
	let mut buf = StackStr::with_capacity(capacity);

	match value.write_number(&mut buf) {
		Ok(()) => buf.as_str().to_owned(),
		Err(_) => default.to_owned(),
	}
}

/// Parses the number at the start of `text`.
///
/// Leading ASCII whitespace and a single leading `+` are skipped. Anything after the
/// numeric prefix is ignored, so `"3.25xyz"` parses as `3.25`. Returns `None` if there is
/// no numeric prefix, an exponent marker has no digits, or the value is out of range for `T`
/// (including any float that would come out infinite or NaN).
#[must_use]
pub fn parse_number<T: ParseNumber>(text: &str) -> Option<T> {
	let text = text.trim_start_matches(is_c_space);
	let text = text.strip_prefix('+').unwrap_or(text);

	let prefix = T::numeric_prefix(text);
	if prefix.is_empty() {
		return None;
	}

	prefix.parse::<T>().ok().filter(|num| num.in_range(prefix))
}

/// Like [`parse_number`], but writes into `num`. `num` is only touched on success.
pub fn parse_number_into<T: ParseNumber>(text: &str, num: &mut T) -> bool {
	let Some(parsed) = parse_number(text) else {
		return false;
	};

	*num = parsed;
	true
}

fn is_c_space(c: char) -> bool {
	matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
	bytes[start..]
		.iter()
		.position(|b| !b.is_ascii_digit())
		.map_or(bytes.len(), |i| start + i)
}

fn sign_len(bytes: &[u8], allow_minus: bool) -> usize {
	match bytes.first() {
		Some(b'+') => 1,
		Some(b'-') if allow_minus => 1,
		_ => 0,
	}
}

fn int_prefix(text: &str, signed: bool) -> &str {
	let bytes = text.as_bytes();
	let start = sign_len(bytes, signed);
	let end = digits_end(bytes, start);

	if end == start { "" } else { &text[..end] }
}

fn float_prefix(text: &str) -> &str {
	let bytes = text.as_bytes();
	let start = sign_len(bytes, true);
	let int_end = digits_end(bytes, start);
	let mut end = int_end;
	let mut digits = int_end - start;

	if bytes.get(end) == Some(&b'.') {
		let frac_end = digits_end(bytes, end + 1);
		digits += frac_end - end - 1;
		end = frac_end;
	}

	if digits == 0 {
		return "";
	}

	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let exp_start = end + 1 + sign_len(&bytes[end + 1..], true);
		let exp_end = digits_end(bytes, exp_start);

		if exp_end == exp_start {
			return "";
		}

		end = exp_end;
	}

	&text[..end]
}
