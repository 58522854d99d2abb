use core::iter::FusedIterator;

use crate::Optional;

pub struct IntoIter<T> {
	value: Optional<T>,
}

impl<T> IntoIter<T> {
	pub(crate) fn new(value: Optional<T>) -> Self {
		Self { value }
	}
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	fn next(&mut self) -> Option<Self::Item> {
		self.value.take().into_option()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = usize::from(self.value.is_some());
		(remaining, Some(remaining))
	}
}

pub struct Iter<'a, T> {
	value: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
	pub(crate) fn new(value: Option<&'a T>) -> Self {
		Self { value }
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		self.value.take()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = usize::from(self.value.is_some());
		(remaining, Some(remaining))
	}
}

pub struct IterMut<'a, T> {
	value: Option<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
	pub(crate) fn new(value: Option<&'a mut T>) -> Self {
		Self { value }
	}
}

impl<'a, T> Iterator for IterMut<'a, T> {
	type Item = &'a mut T;

	fn next(&mut self) -> Option<Self::Item> {
		self.value.take()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = usize::from(self.value.is_some());
		(remaining, Some(remaining))
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
