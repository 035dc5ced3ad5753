pub const MINIMUM_DB_LEVEL: f32 = -100.0;
pub const MINIMUM_DB_D_LEVEL: f64 = -100.0;
pub const MINIMUM_LINEAR_LEVEL: f32 = 0.00001;
pub const MINIMUM_LINEAR_D_LEVEL: f64 = 0.00001;

/// A floating point type that can be converted between linear amplitude and decibels.
///
/// Implemented for `f32` and `f64` with the same formulas; only the precision differs.
pub trait Level: Copy {
	/// The value `linear_to_db` returns for amplitudes below [`Self::MINIMUM_LINEAR`].
	const MINIMUM_DB: Self;
	/// Amplitudes below this are treated as silence.
	const MINIMUM_LINEAR: Self;

	#[must_use]
	fn linear_to_db(self) -> Self;

	#[must_use]
	fn db_to_linear(self) -> Self;
}

macro_rules! impl_level {
	($ty:ident, $min_db:ident, $min_linear:ident) => {
		impl Level for $ty {
			const MINIMUM_DB: Self = $min_db;
			const MINIMUM_LINEAR: Self = $min_linear;

			fn linear_to_db(self) -> Self {
				// only the input is clamped, NaN falls through to log10
				if self < Self::MINIMUM_LINEAR {
					Self::MINIMUM_DB
				} else {
					20.0 * self.log10()
				}
			}

			fn db_to_linear(self) -> Self {
				<$ty>::powf(10.0, self / 20.0)
			}
		}
	};
}

impl_level!(f32, MINIMUM_DB_LEVEL, MINIMUM_LINEAR_LEVEL);
impl_level!(f64, MINIMUM_DB_D_LEVEL, MINIMUM_LINEAR_D_LEVEL);

/// Converts a linear amplitude to decibels, flooring silence at the minimum db level.
#[must_use]
pub fn linear_to_db<T: Level>(amp: T) -> T {
	amp.linear_to_db()
}

/// Converts decibels to a linear amplitude. Very negative inputs underflow to zero.
#[must_use]
pub fn db_to_linear<T: Level>(db: T) -> T {
	db.db_to_linear()
}
