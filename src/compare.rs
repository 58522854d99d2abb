//! Equality, ordering and hashing for [`Optional`].
//!
//! Disengaged optionals compare equal to each other and to [`Disengaged`], and order before
//! every engaged optional. Engaged optionals compare by payload.

use crate::{Disengaged, Optional};
use core::cmp::Ordering;
use core::hash::{BuildHasher, Hash, Hasher};

impl<T> Optional<T> {
	/// `true` if engaged with a payload equal to `value`.
	pub fn eq_value<U>(&self, value: &U) -> bool
	where
		T: PartialEq<U>,
	{
		self.as_option().is_some_and(|payload| payload == value)
	}

	/// Compares the payload against a bare value. A disengaged optional is less than any value.
	/// ```
	/// use core::cmp::Ordering;
	/// use inline_optional::Optional;
	///
	/// assert_eq!(Optional::some(10).partial_cmp_value(&42), Some(Ordering::Less));
	/// assert_eq!(Optional::<i32>::none().partial_cmp_value(&i32::MIN), Some(Ordering::Less));
	/// ```
	pub fn partial_cmp_value<U>(&self, value: &U) -> Option<Ordering>
	where
		T: PartialOrd<U>,
	{
		match self.as_option() {
			Some(payload) => payload.partial_cmp(value),
			None => Some(Ordering::Less),
		}
	}

	pub fn cmp_value(&self, value: &T) -> Ordering
	where
		T: Ord,
	{
		match self.as_option() {
			Some(payload) => payload.cmp(value),
			None => Ordering::Less,
		}
	}

	/// Hash projection: `0` if disengaged, otherwise exactly the payload's own hash.
	pub fn hash_value<S>(&self, build_hasher: &S) -> u64
	where
		T: Hash,
		S: BuildHasher,
	{
		self.as_option().map_or(0, |payload| build_hasher.hash_one(payload))
	}
}

/// Exchanges engagement and payload of `first` and `second`.
pub fn swap<T>(first: &mut Optional<T>, second: &mut Optional<T>) {
	first.swap(second)
}

impl<T> PartialEq for Optional<T>
where
	T: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.as_option().eq(&other.as_option())
	}
}

impl<T> Eq for Optional<T> where T: Eq {}

impl<T> PartialOrd for Optional<T>
where
	T: PartialOrd,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.as_option().partial_cmp(&other.as_option())
	}
}

impl<T> Ord for Optional<T>
where
	T: Ord,
{
	fn cmp(&self, other: &Self) -> Ordering {
		self.as_option().cmp(&other.as_option())
	}
}

impl<T> PartialEq<Disengaged> for Optional<T> {
	fn eq(&self, _: &Disengaged) -> bool {
		self.is_none()
	}
}

impl<T> PartialEq<Optional<T>> for Disengaged {
	fn eq(&self, optional: &Optional<T>) -> bool {
		optional.is_none()
	}
}

impl<T> PartialOrd<Disengaged> for Optional<T> {
	fn partial_cmp(&self, _: &Disengaged) -> Option<Ordering> {
		Some(if self.is_some() { Ordering::Greater } else { Ordering::Equal })
	}
}

impl<T> PartialOrd<Optional<T>> for Disengaged {
	fn partial_cmp(&self, optional: &Optional<T>) -> Option<Ordering> {
		Some(if optional.is_some() { Ordering::Less } else { Ordering::Equal })
	}
}

/// An engaged optional hashes exactly like its payload, the engagement is not mixed in.
impl<T> Hash for Optional<T>
where
	T: Hash,
{
	fn hash<H: Hasher>(&self, state: &mut H) {
		match self.as_option() {
			Some(payload) => payload.hash(state),
			None => state.write_usize(0),
		}
	}
}
