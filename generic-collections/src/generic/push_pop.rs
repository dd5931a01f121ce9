//! Common trait for growable collections supporting push/pop at the back.
//!
//! [`PushPopCollection`] lets generic code treat [`List`] and `Vec` alike when
//! all it needs is append, pop-from-back, length and slice access.
//!
//! [`List`]: crate::generic::list::List

use crate::generic::list::List;

/// A collection that grows and shrinks at its back.
///
/// # Examples
///
/// ```rust
/// use generic_collections::generic::{list::List, push_pop::PushPopCollection};
///
/// fn drain_back<C: PushPopCollection<i32>>(collection: &mut C) -> Vec<i32> {
///     let mut drained = Vec::with_capacity(collection.len());
///     while let Some(item) = collection.pop() {
///         drained.push(item);
///     }
///     drained
/// }
///
/// let mut list = List::from(vec![1, 2, 3]);
/// assert_eq!(drain_back(&mut list), vec![3, 2, 1]);
///
/// let mut vec = vec![4, 5];
/// assert_eq!(drain_back(&mut vec), vec![5, 4]);
/// ```
pub trait PushPopCollection<T> {
    /// Appends an element to the back.
    fn push(&mut self, item: T);

    /// Removes and returns the last element, or `None` if the collection is empty.
    fn pop(&mut self) -> Option<T>;

    fn as_slice(&self) -> &[T];

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> PushPopCollection<T> for List<T> {
    fn push(&mut self, item: T) {
        self.add(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_last().ok()
    }

    fn as_slice(&self) -> &[T] {
        List::as_slice(self)
    }

    fn len(&self) -> usize {
        List::len(self)
    }
}

impl<T> PushPopCollection<T> for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
