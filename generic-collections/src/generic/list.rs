//! Growable, ordered list with index- and value-based convenience operations.
//!
//! This module provides [`List`], a `Vec`-backed sequence whose fallible
//! operations report [`ListError`] instead of panicking, and [`reduce`], a
//! left fold whose accumulator type is independent of the element type.
//!
//! Value-based lookups (`contains`, `index_of`, `remove`, `replace`) scan from
//! the front and always resolve to the first equal element.

use tracing::{debug, trace};

use crate::config::{ChunkPolicy, InsertPolicy, ListOptions};
use crate::error::{ListError, Result};

/// An ordered, resizable list.
///
/// Elements keep their insertion order unless moved by an explicit index
/// operation. Derived lists (`filter`, `map`, `chunk`) own their elements and
/// inherit this list's [`ListOptions`].
///
/// # Examples
///
/// ```rust
/// use generic_collections::generic::list::List;
///
/// let mut list = List::new();
/// list.add(2);
/// list.add_all([4, 6]);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.first(), Ok(&2));
/// assert_eq!(list.index_of(&6), Some(2));
///
/// list.insert(2, 5).unwrap();
/// assert_eq!(list.as_slice(), &[2, 4, 5, 6]);
/// ```
///
/// Equality compares elements only; two lists with different options but the
/// same elements are equal.
#[derive(Clone, Debug)]
pub struct List<T> {
    items: Vec<T>,
    options: ListOptions,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates an empty list with default options.
    pub fn new() -> Self {
        Self::with_options(ListOptions::default())
    }

    /// Creates an empty list with the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use generic_collections::config::{InsertPolicy, ListOptions};
    /// use generic_collections::generic::list::List;
    ///
    /// let options = ListOptions::default().with_insert_policy(InsertPolicy::AllowAppend);
    /// let mut list = List::with_options(options);
    ///
    /// // Appending through `insert` is only allowed with `AllowAppend`.
    /// list.insert(0, 'a').unwrap();
    /// list.insert(1, 'b').unwrap();
    /// assert_eq!(list.as_slice(), &['a', 'b']);
    /// ```
    pub fn with_options(options: ListOptions) -> Self {
        Self {
            items: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> ListOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ListOptions) {
        self.options = options;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Appends an element to the back of the list.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends every element of `items`, in order.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
    }

    /// Removes all elements. Options are kept.
    pub fn clear(&mut self) {
        trace!(len = self.items.len(), "clearing list");
        self.items.clear();
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements.
    pub fn first(&self) -> Result<&T> {
        self.items.first().ok_or(ListError::Empty)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements.
    pub fn last(&self) -> Result<&T> {
        self.items.last().ok_or(ListError::Empty)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements, otherwise
    /// [`ListError::Index`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use generic_collections::error::ListError;
    /// use generic_collections::generic::list::List;
    ///
    /// let list = List::from(vec![10, 20]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(ListError::Index { index: 2, len: 2 }));
    ///
    /// let empty: List<u8> = List::new();
    /// assert_eq!(empty.get(0), Err(ListError::Empty));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.validate_index(index)?;
        Ok(&self.items[index])
    }

    /// Inserts `item` before the element currently at `index`, shifting every
    /// later element one position to the right.
    ///
    /// With the default [`InsertPolicy::ExistingIndex`], `index` must refer to
    /// an existing element, so an empty list always fails and `index == len`
    /// is rejected; use [`List::add`] to append. [`InsertPolicy::AllowAppend`]
    /// also accepts `index == len`.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] or [`ListError::Index`], as for [`List::get`].
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        match self.options.insert {
            InsertPolicy::ExistingIndex => self.validate_index(index)?,
            InsertPolicy::AllowAppend => {
                if index > self.items.len() {
                    return Err(ListError::Index {
                        index,
                        len: self.items.len(),
                    });
                }
            }
        }

        self.items.insert(index, item);
        trace!(index, len = self.items.len(), "inserted element");
        Ok(())
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements.
    pub fn pop_first(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(ListError::Empty);
        }

        let item = self.items.remove(0);
        trace!(len = self.items.len(), "popped first element");
        Ok(item)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements.
    pub fn pop_last(&mut self) -> Result<T> {
        let item = self.items.pop().ok_or(ListError::Empty)?;
        trace!(len = self.items.len(), "popped last element");
        Ok(item)
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    pub fn remove_index(&mut self, index: usize) -> Result<T> {
        self.validate_index(index)?;

        let item = self.items.remove(index);
        trace!(index, len = self.items.len(), "removed element by index");
        Ok(item)
    }

    /// Overwrites the element at `index`.
    pub fn replace_index(&mut self, index: usize, item: T) -> Result<()> {
        self.validate_index(index)?;

        self.items[index] = item;
        trace!(index, "replaced element by index");
        Ok(())
    }

    /// Returns a new list with `f` applied to every element, in order.
    ///
    /// The receiver is left untouched and the result has the same length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use generic_collections::generic::list::List;
    ///
    /// let list = List::from(vec![1, 2, 3]);
    /// let doubled = list.map(|n| n * 2);
    ///
    /// assert_eq!(doubled.as_slice(), &[2, 4, 6]);
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn map<F>(&self, f: F) -> List<T>
    where
        F: FnMut(&T) -> T,
    {
        self.derive(self.items.iter().map(f).collect())
    }

    // Shared bounds rule: an empty list reports `Empty` before any index check.
    fn validate_index(&self, index: usize) -> Result<()> {
        if self.items.is_empty() {
            return Err(ListError::Empty);
        }
        if index >= self.items.len() {
            return Err(ListError::Index {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    fn derive(&self, items: Vec<T>) -> List<T> {
        List {
            items,
            options: self.options,
        }
    }
}

impl<T: Clone> List<T> {
    /// Returns a new list holding the elements for which `predicate` is true,
    /// in their original relative order.
    pub fn filter<P>(&self, mut predicate: P) -> List<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.derive(
            self.items
                .iter()
                .filter(|&item| predicate(item))
                .cloned()
                .collect(),
        )
    }

    /// Splits the list into consecutive lists of `size` elements; the final
    /// chunk holds the remainder.
    ///
    /// When `size >= len` the whole list comes back as a single chunk, so an
    /// empty list yields one empty chunk. A `size` of zero yields no chunks
    /// under [`ChunkPolicy::Lenient`] (the default).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidChunkSize`] for a zero `size` when the list
    /// uses [`ChunkPolicy::Strict`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use generic_collections::generic::list::List;
    ///
    /// let list = List::from(vec![2, 4, 6, 8]);
    /// let chunks = list.chunk(3).unwrap();
    ///
    /// assert_eq!(chunks.len(), 2);
    /// assert_eq!(chunks[0].as_slice(), &[2, 4, 6]);
    /// assert_eq!(chunks[1].as_slice(), &[8]);
    ///
    /// assert!(list.chunk(0).unwrap().is_empty());
    /// ```
    pub fn chunk(&self, size: usize) -> Result<Vec<List<T>>> {
        if size == 0 {
            return match self.options.chunk {
                ChunkPolicy::Lenient => {
                    debug!(len = self.items.len(), "chunk size of zero yields no chunks");
                    Ok(Vec::new())
                }
                ChunkPolicy::Strict => Err(ListError::InvalidChunkSize),
            };
        }

        if size >= self.items.len() {
            return Ok(vec![self.clone()]);
        }

        Ok(self
            .items
            .chunks(size)
            .map(|chunk| self.derive(chunk.to_vec()))
            .collect())
    }
}

impl<T: PartialEq> List<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns `true` if every element of `items` is present. An empty
    /// `items` is trivially contained.
    pub fn contains_all(&self, items: &[T]) -> bool {
        items.iter().all(|item| self.contains(item))
    }

    /// Removes the first element equal to `item`, reporting whether one was
    /// found.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                trace!(index, len = self.items.len(), "removed element by value");
                true
            }
            None => false,
        }
    }

    /// Replaces the first element equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if no element equals `old`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use generic_collections::error::ListError;
    /// use generic_collections::generic::list::List;
    ///
    /// let mut list = List::from(vec![2, 4, 6]);
    /// list.replace(&6, 8).unwrap();
    /// assert_eq!(list.as_slice(), &[2, 4, 8]);
    ///
    /// assert_eq!(list.replace(&1, 8), Err(ListError::NotFound));
    /// ```
    pub fn replace(&mut self, old: &T, new: T) -> Result<()> {
        let index = self.index_of(old).ok_or(ListError::NotFound)?;

        self.items[index] = new;
        trace!(index, "replaced element by value");
        Ok(())
    }
}

/// Folds `list` from the front, starting from `seed`.
///
/// # Examples
///
/// ```rust
/// use generic_collections::generic::list::{reduce, List};
///
/// let list = List::from(vec![1, 2, 3]);
/// assert_eq!(reduce(&list, 0, |acc, n| acc + n), 6);
///
/// let words = List::from(vec!["a", "bc"]);
/// assert_eq!(reduce(&words, String::new(), |acc, w| acc + w), "abc");
/// ```
pub fn reduce<T, A, F>(list: &List<T>, seed: A, f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    list.items.iter().fold(seed, f)
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialEq> PartialEq<[T]> for List<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for List<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items.as_slice() == other.as_slice()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            options: ListOptions::default(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for List<T> {
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(list: List<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
