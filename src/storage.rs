//! Inline payload storage for [`Optional`](crate::Optional).
//!
//! A [`Storage`] cell owns uninitialized space for exactly one payload plus the engaged flag.
//! It performs exactly the payload operation it is asked for and nothing more. All engagement
//! checks live one layer up, in the wrapper.
//!
//! How a payload is destroyed is chosen once per payload type through [`Storage::TRIVIAL`]:
//! types without drop glue go through [`Trivial`], everything else through [`NonTrivial`].
//! The choice is an associated constant, so the untaken branch is removed at monomorphization.

use core::mem::{self, MaybeUninit};

/// Tears down the payload of a cell that is disengaging.
pub(crate) trait Strategy {
	/// # Safety
	/// `payload` must be initialized. It is logically uninitialized afterwards.
	unsafe fn destroy<T>(payload: &mut MaybeUninit<T>);
}

/// Payloads without drop glue. Disengaging is a flag flip.
pub(crate) enum Trivial {}

impl Strategy for Trivial {
	#[inline(always)]
	unsafe fn destroy<T>(_payload: &mut MaybeUninit<T>) {
		debug_assert!(!mem::needs_drop::<T>());
	}
}

/// Payloads that need their destructor run.
pub(crate) enum NonTrivial {}

impl Strategy for NonTrivial {
	#[inline]
	unsafe fn destroy<T>(payload: &mut MaybeUninit<T>) {
		// SAFETY: the caller guarantees that `payload` is initialized
		unsafe { payload.assume_init_drop() }
	}
}

pub(crate) struct Storage<T> {
	payload: MaybeUninit<T>,
	engaged: bool,
}

impl<T> Storage<T> {
	/// `true` if `T` has no drop glue and the cell uses the [`Trivial`] strategy.
	pub(crate) const TRIVIAL: bool = !mem::needs_drop::<T>();

	pub(crate) const fn empty() -> Self {
		Self {
			payload: MaybeUninit::uninit(),
			engaged: false,
		}
	}

	pub(crate) const fn engaged_with(value: T) -> Self {
		Self {
			payload: MaybeUninit::new(value),
			engaged: true,
		}
	}

	#[inline]
	pub(crate) const fn is_engaged(&self) -> bool {
		self.engaged
	}

	/// Moves `value` into the empty slot.
	///
	/// Must only be called while disengaged, otherwise the live payload is leaked.
	#[inline]
	pub(crate) fn construct(&mut self, value: T) -> &mut T {
		self.construct_with(|| value)
	}

	/// Writes the result of `constructor` straight into the empty slot.
	///
	/// If `constructor` panics the cell stays disengaged.
	pub(crate) fn construct_with<F>(&mut self, constructor: F) -> &mut T
	where
		F: FnOnce() -> T,
	{
		debug_assert!(!self.engaged, "construct on an engaged storage cell");
		trace_transition!(payload = core::any::type_name::<T>(), "construct");
		let payload = self.payload.write(constructor());
		self.engaged = true;
		payload
	}

	/// Runs the payload's destructor (if it has one) and disengages.
	///
	/// The flag is cleared before the destructor runs, so a panicking destructor
	/// can never lead to a second destroy.
	///
	/// # Safety
	/// The cell must be engaged.
	pub(crate) unsafe fn destroy(&mut self) {
		debug_assert!(self.engaged, "destroy on a disengaged storage cell");
		trace_transition!(payload = core::any::type_name::<T>(), trivial = Self::TRIVIAL, "destroy");
		self.engaged = false;
		if Self::TRIVIAL {
			// SAFETY: the caller guarantees the cell was engaged
			unsafe { Trivial::destroy(&mut self.payload) }
		} else {
			// SAFETY: the caller guarantees the cell was engaged
			unsafe { NonTrivial::destroy(&mut self.payload) }
		}
	}

	/// Moves the payload out and disengages without running any destructor.
	///
	/// # Safety
	/// The cell must be engaged.
	pub(crate) unsafe fn take(&mut self) -> T {
		debug_assert!(self.engaged, "take on a disengaged storage cell");
		trace_transition!(payload = core::any::type_name::<T>(), "take");
		self.engaged = false;
		// SAFETY: the caller guarantees the cell was engaged, the flag is already cleared so
		// the bits left behind are never read or dropped again
		unsafe { self.payload.assume_init_read() }
	}

	/// # Safety
	/// The cell must be engaged.
	#[inline]
	pub(crate) unsafe fn get(&self) -> &T {
		// SAFETY: the caller guarantees the cell is engaged
		unsafe { self.payload.assume_init_ref() }
	}

	/// # Safety
	/// The cell must be engaged.
	#[inline]
	pub(crate) unsafe fn get_mut(&mut self) -> &mut T {
		// SAFETY: the caller guarantees the cell is engaged
		unsafe { self.payload.assume_init_mut() }
	}
}

impl<T> Drop for Storage<T> {
	fn drop(&mut self) {
		if self.engaged {
			// SAFETY: engaged means exactly one live payload occupies the slot
			unsafe { self.destroy() }
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;
	use std::panic::{catch_unwind, AssertUnwindSafe};
	use std::rc::Rc;
	use std::string::String;

	struct DropCounter(Rc<Cell<usize>>);

	impl Drop for DropCounter {
		fn drop(&mut self) {
			self.0.set(self.0.get() + 1);
		}
	}

	struct PanicOnDrop(Rc<Cell<usize>>);

	impl Drop for PanicOnDrop {
		fn drop(&mut self) {
			self.0.set(self.0.get() + 1);
			panic!("payload destructor failed");
		}
	}

	#[test]
	fn strategy_follows_drop_glue() {
		assert!(Storage::<u64>::TRIVIAL);
		assert!(Storage::<(u8, [i32; 4])>::TRIVIAL);
		assert!(!Storage::<String>::TRIVIAL);
		assert!(!Storage::<DropCounter>::TRIVIAL);
	}

	#[test]
	fn construct_then_destroy_runs_destructor_once() {
		let drops = Rc::new(Cell::new(0));
		let mut storage = Storage::empty();
		storage.construct(DropCounter(drops.clone()));
		assert!(storage.is_engaged());
		assert_eq!(drops.get(), 0);

		unsafe { storage.destroy() };
		assert!(!storage.is_engaged());
		assert_eq!(drops.get(), 1);

		drop(storage);
		assert_eq!(drops.get(), 1);
	}

	#[test]
	fn dropping_engaged_cell_destroys_payload() {
		let drops = Rc::new(Cell::new(0));
		drop(Storage::engaged_with(DropCounter(drops.clone())));
		assert_eq!(drops.get(), 1);

		drop(Storage::<DropCounter>::empty());
		assert_eq!(drops.get(), 1);
	}

	#[test]
	fn take_moves_out_without_destroying() {
		let drops = Rc::new(Cell::new(0));
		let mut storage = Storage::engaged_with(DropCounter(drops.clone()));
		let payload = unsafe { storage.take() };
		assert!(!storage.is_engaged());
		drop(storage);
		assert_eq!(drops.get(), 0);

		drop(payload);
		assert_eq!(drops.get(), 1);
	}

	#[test]
	fn trivial_payload_round_trip() {
		let mut storage = Storage::empty();
		*storage.construct(7u32) += 1;
		assert_eq!(unsafe { *storage.get() }, 8);
		unsafe { storage.destroy() };
		assert!(!storage.is_engaged());
		storage.construct(9);
		assert_eq!(unsafe { *storage.get_mut() }, 9);
	}

	#[test]
	fn panicking_constructor_leaves_cell_disengaged() {
		let mut storage = Storage::<String>::empty();
		let result = catch_unwind(AssertUnwindSafe(|| {
			storage.construct_with(|| panic!("constructor failed"));
		}));
		assert!(result.is_err());
		assert!(!storage.is_engaged());
	}

	#[test]
	fn panicking_destructor_is_not_run_twice() {
		let drops = Rc::new(Cell::new(0));
		let mut storage = Storage::engaged_with(PanicOnDrop(drops.clone()));
		let result = catch_unwind(AssertUnwindSafe(|| unsafe { storage.destroy() }));
		assert!(result.is_err());
		assert!(!storage.is_engaged());

		drop(storage);
		assert_eq!(drops.get(), 1);
	}
}
