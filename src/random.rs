/// Returns a uniformly distributed integer in `0..=max`, or `0` if `max` isn't positive.
#[must_use]
pub fn random_number(max: i32) -> i32 {
	if max <= 0 { 0 } else { fastrand::i32(0..=max) }
}
