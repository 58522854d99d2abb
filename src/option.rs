use crate::capability::{Construct, MoveAssign, MoveFrom};
use crate::storage::Storage;
use crate::{Disengaged, EmptyAccess, InPlace, IntoIter, Iter, IterMut};
use core::fmt::{Debug, Formatter};
use core::ops::{Deref, DerefMut};

/// A value that is either engaged with exactly one payload of type `T` or disengaged.
///
/// The payload lives inline, next to the engaged flag. Construction, assignment and
/// destruction of the payload happen exactly as the engagement of both operands dictates:
/// a payload is never assigned to while absent and never constructed over while present.
///
/// Example: a connection slot that is only filled once a handshake succeeded.
/// ```
/// use inline_optional::{Disengaged, Optional};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Session {
/// 	peer: String,
/// 	retries: u8,
/// }
///
/// let mut session = Optional::<Session>::none();
/// assert!(session == Disengaged);
/// assert_eq!(session.value_or(Session { peer: "nobody".into(), retries: 0 }).peer, "nobody");
///
/// session.emplace_with(|| Session { peer: "10.0.0.7".into(), retries: 0 });
/// session.retries += 1;
/// assert_eq!(session.value().map(|session| session.retries), Ok(1));
///
/// session.reset();
/// assert!(session.value().is_err());
/// ```
pub struct Optional<T> {
	storage: Storage<T>,
}

impl<T> Optional<T> {
	/// `true` if disengaging never has to run a destructor for `T`.
	pub const TRIVIAL_DESTROY: bool = Storage::<T>::TRIVIAL;

	pub const fn none() -> Self {
		Self {
			storage: Storage::empty(),
		}
	}

	pub const fn some(value: T) -> Self {
		Self {
			storage: Storage::engaged_with(value),
		}
	}

	/// Constructs the payload directly from the forwarded argument tuple.
	pub fn in_place<A>(_tag: InPlace, args: A) -> Self
	where
		T: Construct<A>,
	{
		let mut optional = Self::none();
		optional.storage.construct_with(|| T::construct(args));
		optional
	}

	/// Constructs the payload directly from a sequence of items.
	/// ```
	/// use inline_optional::{InPlace, Optional};
	///
	/// let word = Optional::<String>::in_place_list(InPlace, ['a', 'b', 'c']);
	/// assert_eq!(word.value().map(String::as_str), Ok("abc"));
	/// ```
	pub fn in_place_list<I>(_tag: InPlace, items: I) -> Self
	where
		I: IntoIterator,
		T: FromIterator<I::Item>,
	{
		let mut optional = Self::none();
		optional.storage.construct_with(|| items.into_iter().collect());
		optional
	}

	/// Move-constructs from `source`, mirroring its engagement.
	///
	/// An engaged `source` stays engaged and keeps its payload in the moved-from state
	/// defined by [`MoveFrom`].
	/// ```
	/// use inline_optional::Optional;
	///
	/// let mut source = Optional::some(vec![1, 2, 3]);
	/// let target = Optional::move_from(&mut source);
	/// assert_eq!(*target, [1, 2, 3]);
	/// assert!(source.is_some());
	/// assert!(source.is_empty());
	/// ```
	pub fn move_from(source: &mut Self) -> Self
	where
		T: MoveFrom,
	{
		match source.as_mut_option() {
			Some(payload) => Self::some(<T as MoveFrom>::move_from(payload)),
			None => Self::none(),
		}
	}

	#[inline]
	pub const fn is_some(&self) -> bool {
		self.storage.is_engaged()
	}

	#[inline]
	pub const fn is_none(&self) -> bool {
		!self.storage.is_engaged()
	}

	pub fn value(&self) -> Result<&T, EmptyAccess> {
		self.as_option().ok_or(EmptyAccess)
	}

	pub fn value_mut(&mut self) -> Result<&mut T, EmptyAccess> {
		self.as_mut_option().ok_or(EmptyAccess)
	}

	pub fn into_value(self) -> Result<T, EmptyAccess> {
		self.into_option().ok_or(EmptyAccess)
	}

	pub fn expect(self, message: &str) -> T {
		self.into_option().expect(message)
	}

	pub fn unwrap(self) -> T {
		match self.into_option() {
			Some(value) => value,
			None => panic!("{}", EmptyAccess),
		}
	}

	/// Returns a copy of the payload, or `default` if disengaged.
	pub fn value_or(&self, default: T) -> T
	where
		T: Clone,
	{
		match self.as_option() {
			Some(payload) => payload.clone(),
			None => default,
		}
	}

	pub fn value_or_else<F>(&self, function: F) -> T
	where
		T: Clone,
		F: FnOnce() -> T,
	{
		match self.as_option() {
			Some(payload) => payload.clone(),
			None => function(),
		}
	}

	/// Moves the payload out, or returns `default` if disengaged.
	pub fn into_value_or(self, default: T) -> T {
		self.into_option().unwrap_or(default)
	}

	/// Assigns `value` onto the live payload, or constructs the payload from it if disengaged.
	pub fn assign(&mut self, value: T) {
		if self.is_some() {
			// SAFETY: checked engaged above
			let payload = unsafe { self.storage.get_mut() };
			*payload = value;
		} else {
			self.storage.construct(value);
		}
	}

	/// Copy-assigns `value` via [`Clone::clone_from`], or clones it into the slot if disengaged.
	pub fn assign_cloned(&mut self, value: &T)
	where
		T: Clone,
	{
		if self.is_some() {
			// SAFETY: checked engaged above
			let payload = unsafe { self.storage.get_mut() };
			payload.clone_from(value);
		} else {
			self.storage.construct(value.clone());
		}
	}

	/// Move-assigns from `value`, or move-constructs the payload from it if disengaged.
	///
	/// `value` is left in its moved-from state.
	pub fn assign_moved(&mut self, value: &mut T)
	where
		T: MoveFrom + MoveAssign,
	{
		if self.is_some() {
			// SAFETY: checked engaged above
			let payload = unsafe { self.storage.get_mut() };
			<T as MoveAssign>::move_assign(payload, value);
		} else {
			self.storage.construct(<T as MoveFrom>::move_from(value));
		}
	}

	/// Move-assigns from another optional.
	///
	/// | `self`     | `source`   | effect                                  |
	/// |------------|------------|-----------------------------------------|
	/// | disengaged | disengaged | nothing                                 |
	/// | disengaged | engaged    | payload move-constructed from `source`  |
	/// | engaged    | disengaged | payload destroyed                       |
	/// | engaged    | engaged    | payload move-assigned from `source`     |
	///
	/// An engaged `source` stays engaged with a moved-from payload.
	pub fn assign_moved_from(&mut self, source: &mut Self)
	where
		T: MoveFrom + MoveAssign,
	{
		match (self.is_some(), source.as_mut_option()) {
			(false, None) => {}
			(false, Some(payload)) => {
				self.storage.construct(<T as MoveFrom>::move_from(payload));
			}
			(true, None) => self.reset(),
			(true, Some(source_payload)) => {
				// SAFETY: checked engaged above
				let payload = unsafe { self.storage.get_mut() };
				<T as MoveAssign>::move_assign(payload, source_payload);
			}
		}
	}

	/// Assigns from an optional that is consumed, following the same table as
	/// [`assign_moved_from`](Self::assign_moved_from).
	pub fn assign_optional(&mut self, source: Self) {
		match source.into_option() {
			Some(value) => self.assign(value),
			None => self.reset(),
		}
	}

	/// Destroys the current payload, if any, then constructs a new one from `args`.
	pub fn emplace<A>(&mut self, args: A) -> &mut T
	where
		T: Construct<A>,
	{
		self.emplace_with(|| T::construct(args))
	}

	pub fn emplace_list<I>(&mut self, items: I) -> &mut T
	where
		I: IntoIterator,
		T: FromIterator<I::Item>,
	{
		self.emplace_with(|| items.into_iter().collect())
	}

	/// Destroys the current payload, if any, then writes the result of `constructor`.
	///
	/// If `constructor` panics the optional is left disengaged.
	pub fn emplace_with<F>(&mut self, constructor: F) -> &mut T
	where
		F: FnOnce() -> T,
	{
		self.reset();
		self.storage.construct_with(constructor)
	}

	pub fn reset(&mut self) {
		if self.is_some() {
			// SAFETY: checked engaged above
			unsafe { self.storage.destroy() }
		}
	}

	/// Exchanges engagement and payload with `other`.
	pub fn swap(&mut self, other: &mut Self) {
		match (self.is_some(), other.is_some()) {
			(true, true) => {
				// SAFETY: both checked engaged above
				let (ours, theirs) = unsafe { (self.storage.get_mut(), other.storage.get_mut()) };
				core::mem::swap(ours, theirs);
			}
			(true, false) => {
				// SAFETY: checked engaged above
				let payload = unsafe { self.storage.take() };
				other.storage.construct(payload);
			}
			(false, true) => {
				// SAFETY: checked engaged above
				let payload = unsafe { other.storage.take() };
				self.storage.construct(payload);
			}
			(false, false) => {}
		}
	}

	/// Moves the payload out, leaving `self` disengaged.
	pub fn take(&mut self) -> Self {
		match self.take_payload() {
			Some(value) => Self::some(value),
			None => Self::none(),
		}
	}

	/// Puts `value` in place and returns the previous content.
	pub fn replace(&mut self, value: T) -> Self {
		let previous = self.take();
		self.storage.construct(value);
		previous
	}

	pub fn get_or_insert_with<F>(&mut self, function: F) -> &mut T
	where
		F: FnOnce() -> T,
	{
		if self.is_none() {
			self.storage.construct_with(function);
		}
		// SAFETY: engaged by now
		unsafe { self.storage.get_mut() }
	}

	pub fn map<U, F>(self, function: F) -> Optional<U>
	where
		F: FnOnce(T) -> U,
	{
		match self.into_option() {
			Some(value) => Optional::some(function(value)),
			None => Optional::none(),
		}
	}

	pub fn as_option(&self) -> Option<&T> {
		if self.is_some() {
			// SAFETY: checked engaged above
			Some(unsafe { self.storage.get() })
		} else {
			None
		}
	}

	pub fn as_mut_option(&mut self) -> Option<&mut T> {
		if self.is_some() {
			// SAFETY: checked engaged above
			Some(unsafe { self.storage.get_mut() })
		} else {
			None
		}
	}

	pub fn into_option(mut self) -> Option<T> {
		self.take_payload()
	}

	pub fn iter(&self) -> Iter<'_, T> {
		Iter::new(self.as_option())
	}

	pub fn iter_mut(&mut self) -> IterMut<'_, T> {
		IterMut::new(self.as_mut_option())
	}

	fn take_payload(&mut self) -> Option<T> {
		if self.is_some() {
			// SAFETY: checked engaged above
			Some(unsafe { self.storage.take() })
		} else {
			None
		}
	}
}

/// Wraps `value` in an engaged optional.
///
/// The payload type is exactly the argument type, so `make_optional(&value)` holds a
/// reference. Use [`make_optional_cloned`] to store a copy of a borrowed value instead.
pub fn make_optional<T>(value: T) -> Optional<T> {
	Optional::some(value)
}

/// Builds an engaged optional holding a clone of `value`, with the reference stripped.
/// ```
/// use inline_optional::{make_optional_cloned, Optional};
///
/// let name = String::from("payload");
/// let optional: Optional<String> = make_optional_cloned(&name);
/// assert!(optional.eq_value(&name));
/// ```
pub fn make_optional_cloned<T>(value: &T) -> Optional<T>
where
	T: Clone,
{
	Optional::some(value.clone())
}

/// Builds an engaged optional whose payload is constructed from `args`.
/// ```
/// use inline_optional::{make_optional_with, Construct};
///
/// struct Pair {
/// 	first: i32,
/// 	second: i32,
/// }
///
/// impl Construct<(i32, i32)> for Pair {
/// 	fn construct((first, second): (i32, i32)) -> Self {
/// 		Pair { first, second }
/// 	}
/// }
///
/// let pair = make_optional_with::<Pair, _>((42, 43));
/// assert_eq!((pair.first, pair.second), (42, 43));
/// ```
pub fn make_optional_with<T, A>(args: A) -> Optional<T>
where
	T: Construct<A>,
{
	Optional::in_place(InPlace, args)
}

pub fn make_optional_list<T, I>(items: I) -> Optional<T>
where
	I: IntoIterator,
	T: FromIterator<I::Item>,
{
	Optional::in_place_list(InPlace, items)
}

impl<T> Default for Optional<T> {
	fn default() -> Self {
		Self::none()
	}
}

impl<T> From<Disengaged> for Optional<T> {
	fn from(_: Disengaged) -> Self {
		Self::none()
	}
}

/// Copy-constructs an engaged optional from a borrowed value.
impl<T> From<&T> for Optional<T>
where
	T: Clone,
{
	fn from(value: &T) -> Self {
		make_optional_cloned(value)
	}
}

impl<T> From<Option<T>> for Optional<T> {
	fn from(option: Option<T>) -> Self {
		match option {
			Some(value) => Self::some(value),
			None => Self::none(),
		}
	}
}

impl<T> From<Optional<T>> for Option<T> {
	fn from(optional: Optional<T>) -> Self {
		optional.into_option()
	}
}

impl<T> Clone for Optional<T>
where
	T: Clone,
{
	fn clone(&self) -> Self {
		match self.as_option() {
			Some(payload) => Self::some(payload.clone()),
			None => Self::none(),
		}
	}

	/// Copy assignment: constructs, clone-assigns or destroys depending on both engagements.
	fn clone_from(&mut self, source: &Self) {
		match source.as_option() {
			Some(payload) => self.assign_cloned(payload),
			None => self.reset(),
		}
	}
}

impl<T> Deref for Optional<T> {
	type Target = T;

	/// # Panics
	/// With [`EmptyAccess`] if disengaged.
	fn deref(&self) -> &T {
		match self.as_option() {
			Some(payload) => payload,
			None => panic!("{}", EmptyAccess),
		}
	}
}

impl<T> DerefMut for Optional<T> {
	fn deref_mut(&mut self) -> &mut T {
		match self.as_mut_option() {
			Some(payload) => payload,
			None => panic!("{}", EmptyAccess),
		}
	}
}

impl<T> Debug for Optional<T>
where
	T: Debug,
{
	fn fmt(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
		match self.as_option() {
			Some(value) => formatter.debug_tuple("Optional::some").field(value).finish(),
			None => formatter.debug_tuple("Optional::none").finish(),
		}
	}
}

impl<T> IntoIterator for Optional<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		IntoIter::new(self)
	}
}

impl<'a, T> IntoIterator for &'a Optional<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
	type Item = &'a mut T;
	type IntoIter = IterMut<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}
