use std::fmt::{Error, Write};

/// Enough room for the widest number any [`crate::FormatNumber`] type can produce.
pub(crate) const STACK_STR_BYTES: usize = 64;

/// A fixed-capacity string living on the stack.
///
/// Writes that would overflow the capacity fail with [`std::fmt::Error`] instead of growing.
#[derive(Clone, Copy, Debug)]
pub struct StackStr {
	bytes: [u8; STACK_STR_BYTES],
	len: usize,
	capacity: usize,
}

impl StackStr {
	/// Creates an empty string that accepts at most `capacity` bytes, capped at [`STACK_STR_BYTES`].
	#[must_use]
	pub const fn with_capacity(capacity: usize) -> Self {
		Self {
			bytes: [0; STACK_STR_BYTES],
			len: 0,
			capacity: if capacity < STACK_STR_BYTES {
				capacity
			} else {
				STACK_STR_BYTES
			},
		}
	}

	#[must_use]
	pub const fn capacity(&self) -> usize {
		self.capacity
	}

	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn clear(&mut self) {
		self.len = 0;
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		// only whole `&str`s are ever copied in
		std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
	}
}

impl Write for StackStr {
	fn write_str(&mut self, s: &str) -> std::fmt::Result {
		let end = self.len + s.len();
		if end > self.capacity {
			return Err(Error);
		}

		self.bytes[self.len..end].copy_from_slice(s.as_bytes());
		self.len = end;

		Ok(())
	}
}
