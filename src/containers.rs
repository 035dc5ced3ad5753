use std::collections::BTreeMap;

/// Concatenates two vectors by moving the shorter one onto the end of the longer one.
///
/// The result keeps the longer vector's allocation, so the order of the elements depends on
/// which vector was longer. On a tie, `a` goes after `b`.
#[must_use]
pub fn concat_vectors<T>(mut a: Vec<T>, mut b: Vec<T>) -> Vec<T> {
	if a.len() > b.len() {
		a.append(&mut b);
		a
	} else {
		b.append(&mut a);
		b
	}
}

#[must_use]
pub fn contains<'a, T>(items: impl IntoIterator<Item = &'a T>, item: &T) -> bool
where
	T: PartialEq + 'a,
{
	items.into_iter().any(|x| x == item)
}

#[must_use]
pub fn map_contains_key<K: Ord, V>(map: &BTreeMap<K, V>, key: &K) -> bool {
	map.contains_key(key)
}

#[must_use]
pub fn str_contains(haystack: &str, needle: &str) -> bool {
	haystack.contains(needle)
}
