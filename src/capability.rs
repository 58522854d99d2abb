//! Payload capabilities that [`Optional`](crate::Optional) builds on.
//!
//! Copy construction and copy assignment are [`Clone::clone`] and [`Clone::clone_from`].
//! The traits here cover what the standard library has no trait for. Every `Optional`
//! operation that needs one of them is bounded on it, so an `Optional<T>` only offers the
//! operations its payload actually supports.

use core::mem;

/// Move construction that leaves a valid, moved-from value behind in `source`.
///
/// Implemented for every `T: Default` by taking the value and leaving the default in place.
/// Because of that blanket impl, a type that implements `Default` cannot provide its own
/// `MoveFrom`. Payloads that need a custom moved-from state or want to observe their moves
/// must not implement `Default`.
/// ```
/// use inline_optional::MoveFrom;
///
/// let mut source = String::from("payload");
/// let moved = <String as MoveFrom>::move_from(&mut source);
/// assert_eq!(moved, "payload");
/// assert!(source.is_empty());
/// ```
pub trait MoveFrom: Sized {
	fn move_from(source: &mut Self) -> Self;
}

impl<T> MoveFrom for T
where
	T: Default,
{
	fn move_from(source: &mut Self) -> Self {
		mem::take(source)
	}
}

/// Move assignment onto a live value, leaving a valid, moved-from value behind in `source`.
///
/// Like [`MoveFrom`], implemented for every `T: Default` through [`mem::take`], which rules
/// out a hand-written impl on any `Default` type.
pub trait MoveAssign {
	fn move_assign(&mut self, source: &mut Self);
}

impl<T> MoveAssign for T
where
	T: Default,
{
	fn move_assign(&mut self, source: &mut Self) {
		*self = mem::take(source);
	}
}

/// Construction of `Self` from a tuple of forwarded arguments.
///
/// Used by [`Optional::in_place`](crate::Optional::in_place) and
/// [`Optional::emplace`](crate::Optional::emplace). Payload types implement it once per
/// argument list they accept:
/// ```
/// use inline_optional::{Construct, InPlace, Optional};
///
/// struct Vec3 {
/// 	x: f32,
/// 	y: f32,
/// 	z: f32,
/// }
///
/// impl Construct<(f32, f32, f32)> for Vec3 {
/// 	fn construct((x, y, z): (f32, f32, f32)) -> Self {
/// 		Vec3 { x, y, z }
/// 	}
/// }
///
/// let position = Optional::<Vec3>::in_place(InPlace, (4.0, 5.0, 6.0));
/// assert_eq!((position.x, position.y, position.z), (4.0, 5.0, 6.0));
/// ```
pub trait Construct<Args>: Sized {
	fn construct(args: Args) -> Self;
}

impl<T> Construct<(T,)> for T {
	fn construct((value,): (T,)) -> Self {
		value
	}
}

impl<T> Construct<()> for T
where
	T: Default,
{
	fn construct((): ()) -> Self {
		T::default()
	}
}
