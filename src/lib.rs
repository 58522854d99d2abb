#![no_std]
#![allow(clippy::tabs_in_doc_comments)]
#![doc = include_str!("../README.md")]

/// Emits a `trace!` event for a storage transition when the `tracing` feature is enabled.
macro_rules! trace_transition {
	($($arg:tt)*) => {
		#[cfg(feature = "tracing")]
		tracing::trace!($($arg)*);
	};
}

#[cfg(test)]
extern crate std;

mod capability;
mod compare;
mod error;
mod iterator;
mod marker;
mod option;
mod storage;

pub use capability::{Construct, MoveAssign, MoveFrom};
pub use compare::swap;
pub use error::EmptyAccess;
pub use iterator::{IntoIter, Iter, IterMut};
pub use marker::{Disengaged, InPlace};
pub use option::{make_optional, make_optional_cloned, make_optional_list, make_optional_with, Optional};
