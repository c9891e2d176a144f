//! A contiguous list with a capacity fixed at creation.
//!
//! [`ArrayList`] keeps its elements packed in slots `0..len` of one buffer
//! that is allocated once and never grows. Random access is *O*(1);
//! inserting or removing at a position shifts the elements after it, which
//! is *O*(*n*).
//!
//! # Examples
//!
//! ```
//! use linear_list::{ArrayList, Error};
//!
//! let mut list = ArrayList::with_capacity(3).unwrap();
//! list.insert(0, "a").unwrap();
//! list.insert(1, "b").unwrap();
//! list.insert(0, "c").unwrap();
//! assert_eq!(list.as_slice(), &["c", "a", "b"]);
//!
//! assert_eq!(list.insert(0, "d"), Err(Error::CapacityExceeded { capacity: 3 }));
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::slice;

/// A list stored in one fixed-capacity buffer.
pub struct ArrayList<T> {
    /// elements live in `elements[..len]`; reserved up front to `capacity`
    elements: Vec<T>,
    /// maximum number of elements, immutable after creation
    capacity: usize,
}

impl<T> ArrayList<T> {
    /// Construct an empty list able to hold `capacity` elements.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `capacity` is zero;
    /// - [`Error::AllocationFailure`] if the buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::{ArrayList, Error};
    ///
    /// let list = ArrayList::<u32>::with_capacity(8).unwrap();
    /// assert_eq!(list.capacity(), 8);
    /// assert!(list.is_empty());
    ///
    /// assert!(matches!(
    ///     ArrayList::<u32>::with_capacity(0),
    ///     Err(Error::InvalidArgument(_))
    /// ));
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument("capacity must be positive"));
        }
        let mut elements = Vec::new();
        elements.try_reserve_exact(capacity)?;
        Ok(Self { elements, capacity })
    }

    /// Remove every element. The buffer is kept.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if no more elements can be inserted.
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len })
        }
    }

    /// Return a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::with_capacity(4).unwrap();
    /// list.insert(0, 'x').unwrap();
    /// assert_eq!(list.get(0), Ok(&'x'));
    /// assert_eq!(list.get(1), Err(Error::IndexOutOfRange { index: 1, len: 1 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.elements[index])
    }

    /// Return a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.elements[index])
    }

    /// Return the index of the first element equal to `elem`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element is equal.
    pub fn locate(&self, elem: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        self.locate_by(|e| e == elem)
    }

    /// Return the index of the first element matching the predicate `f`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::ArrayList;
    ///
    /// let mut list = ArrayList::with_capacity(4).unwrap();
    /// for (at, value) in [3, 8, 12].iter().enumerate() {
    ///     list.insert(at, *value).unwrap();
    /// }
    /// assert_eq!(list.locate_by(|&x| x > 5), Ok(1));
    /// ```
    pub fn locate_by<F>(&self, f: F) -> Result<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.iter().position(f).ok_or(Error::NotFound)
    }

    /// Return the index of the first element whose key, as computed by `f`,
    /// equals `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no key is equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::ArrayList;
    ///
    /// let mut list = ArrayList::with_capacity(2).unwrap();
    /// list.insert(0, ("alice", 31)).unwrap();
    /// list.insert(1, ("bob", 27)).unwrap();
    /// assert_eq!(list.locate_by_key(&"bob", |&(name, _)| name), Ok(1));
    /// ```
    pub fn locate_by_key<K, F>(&self, key: &K, mut f: F) -> Result<usize>
    where
        F: FnMut(&T) -> K,
        K: PartialEq,
    {
        self.locate_by(|e| f(e) == *key)
    }

    /// Return the element right before the first element equal to `elem`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if `elem` is not in the list;
    /// - [`Error::NoPredecessor`] if `elem` is the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::with_capacity(3).unwrap();
    /// list.insert(0, 1).unwrap();
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(list.predecessor_of(&2), Ok(&1));
    /// assert_eq!(list.predecessor_of(&1), Err(Error::NoPredecessor));
    /// assert_eq!(list.predecessor_of(&5), Err(Error::NotFound));
    /// ```
    pub fn predecessor_of(&self, elem: &T) -> Result<&T>
    where
        T: PartialEq,
    {
        match self.locate(elem)? {
            0 => Err(Error::NoPredecessor),
            at => Ok(&self.elements[at - 1]),
        }
    }

    /// Return the element right after the first element equal to `elem`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if `elem` is not in the list;
    /// - [`Error::NoSuccessor`] if `elem` is the last element.
    pub fn successor_of(&self, elem: &T) -> Result<&T>
    where
        T: PartialEq,
    {
        let at = self.locate(elem)?;
        self.elements.get(at + 1).ok_or(Error::NoSuccessor)
    }

    /// Insert `elem` at `index`, shifting the elements from `index` on one
    /// slot to the right, and return `index`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// - [`Error::CapacityExceeded`] if the list is full;
    /// - [`Error::IndexOutOfRange`] unless `index <= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::with_capacity(4).unwrap();
    /// assert_eq!(list.insert(0, 1), Ok(0));
    /// assert_eq!(list.insert(1, 3), Ok(1));
    /// assert_eq!(list.insert(1, 2), Ok(1));
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    ///
    /// assert_eq!(list.insert(5, 4), Err(Error::IndexOutOfRange { index: 5, len: 3 }));
    /// ```
    pub fn insert(&mut self, index: usize, elem: T) -> Result<usize> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        // never reallocates: `len < capacity` and the buffer was reserved
        // to `capacity` at creation
        self.elements.insert(index, elem);
        Ok(index)
    }

    /// Remove and return the element at `index`, shifting the elements after
    /// it one slot to the left.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyCollection`] if the list is empty;
    /// - [`Error::IndexOutOfRange`] unless `index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::with_capacity(4).unwrap();
    /// assert_eq!(list.remove(0), Err(Error::EmptyCollection));
    ///
    /// list.insert(0, 'a').unwrap();
    /// list.insert(1, 'b').unwrap();
    /// assert_eq!(list.remove(0), Ok('a'));
    /// assert_eq!(list.as_slice(), &['b']);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }
        self.check_index(index)?;
        Ok(self.elements.remove(index))
    }

    /// Call `visit` on every element in index order, stopping at the first
    /// error and returning it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::ArrayList;
    ///
    /// let mut list = ArrayList::with_capacity(3).unwrap();
    /// list.insert(0, 1).unwrap();
    /// list.insert(1, 2).unwrap();
    ///
    /// let mut out = String::new();
    /// list.traverse(|x| {
    ///     out.push_str(&x.to_string());
    ///     Ok::<_, ()>(())
    /// })
    /// .unwrap();
    /// assert_eq!(out, "12");
    /// ```
    pub fn traverse<E, F>(&self, visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.elements.iter().try_for_each(visit)
    }

    /// Like [`ArrayList::traverse`], but `visit` may modify the elements.
    pub fn traverse_mut<E, F>(&mut self, visit: F) -> Result<(), E>
    where
        F: FnMut(&mut T) -> Result<(), E>,
    {
        self.elements.iter_mut().try_for_each(visit)
    }

    /// Extract a slice of the elements, in index order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    /// Copy the elements into a new buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.capacity);
        elements.extend_from_slice(&self.elements);
        Self {
            elements,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: &[i32]) -> ArrayList<i32> {
        let mut list = ArrayList::with_capacity(capacity).unwrap();
        for (at, value) in values.iter().enumerate() {
            list.insert(at, *value).unwrap();
        }
        list
    }

    #[test]
    fn test_array_zero_capacity() {
        assert_eq!(
            ArrayList::<i32>::with_capacity(0),
            Err(Error::InvalidArgument("capacity must be positive"))
        );
    }

    #[test]
    fn test_array_huge_capacity() {
        let result = ArrayList::<u64>::with_capacity(usize::MAX);
        assert!(matches!(result, Err(Error::AllocationFailure(_))));
    }

    #[test]
    fn test_array_scenario() {
        let mut list = ArrayList::with_capacity(3).unwrap();
        assert_eq!(list.insert(0, "a"), Ok(0));
        assert_eq!(list.insert(1, "b"), Ok(1));
        assert_eq!(list.insert(0, "c"), Ok(0));
        assert_eq!(list.as_slice(), &["c", "a", "b"]);
        assert!(list.is_full());
        assert_eq!(
            list.insert(0, "d"),
            Err(Error::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(list.as_slice(), &["c", "a", "b"]);
    }

    #[test]
    fn test_array_insert_bounds() {
        for len in 0..4 {
            let values: Vec<i32> = (0..len as i32).collect();
            for capacity in len.max(1)..6 {
                for pos in 0..=len + 2 {
                    let mut list = filled(capacity, &values);
                    let result = list.insert(pos, 99);
                    if pos > len && len < capacity {
                        assert_eq!(result, Err(Error::IndexOutOfRange { index: pos, len }));
                    } else if len == capacity {
                        assert_eq!(result, Err(Error::CapacityExceeded { capacity }));
                    } else {
                        assert_eq!(result, Ok(pos));
                        assert_eq!(list.len(), len + 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_array_insert_front_shifts() {
        let mut list = filled(8, &[4, 5, 6, 7]);
        list.insert(0, 3).unwrap();
        assert_eq!(list.get(0), Ok(&3));
        for (i, value) in (4..8).enumerate() {
            assert_eq!(list.get(i + 1), Ok(&value));
        }
        assert_eq!(list.get(5), Err(Error::IndexOutOfRange { index: 5, len: 5 }));
    }

    #[test]
    fn test_array_remove() {
        let mut list = filled(5, &[1, 2, 3, 4]);
        assert_eq!(list.remove(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(list.remove(1), Ok(2));
        assert_eq!(list.as_slice(), &[1, 3, 4]);
        assert_eq!(list.remove(2), Ok(4));
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.remove(0), Ok(3));
        assert!(list.is_empty());
        assert_eq!(list.remove(0), Err(Error::EmptyCollection));
        assert_eq!(list.capacity(), 5);
    }

    #[test]
    fn test_array_locate_and_neighbours() {
        let list = filled(6, &[10, 20, 30, 20]);
        assert_eq!(list.locate(&20), Ok(1));
        assert_eq!(list.locate(&40), Err(Error::NotFound));
        assert_eq!(list.locate_by_key(&0, |x| x % 3), Ok(2));

        assert_eq!(list.predecessor_of(&20), Ok(&10));
        assert_eq!(list.predecessor_of(&10), Err(Error::NoPredecessor));
        assert_eq!(list.predecessor_of(&40), Err(Error::NotFound));

        assert_eq!(list.successor_of(&20), Ok(&30));
        assert_eq!(list.successor_of(&30), Ok(&20));
        assert_eq!(list.successor_of(&40), Err(Error::NotFound));

        let list = filled(3, &[1, 2]);
        assert_eq!(list.successor_of(&2), Err(Error::NoSuccessor));
    }

    #[test]
    fn test_array_clear_keeps_capacity() {
        let mut list = filled(4, &[1, 2, 3, 4]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
        assert_eq!(list.insert(0, 7), Ok(0));
    }

    #[test]
    fn test_array_traverse() {
        let mut list = filled(4, &[1, 2, 3, 4]);
        let mut seen = Vec::new();
        let result = list.traverse(|&x| {
            if x == 3 {
                return Err(x);
            }
            seen.push(x);
            Ok(())
        });
        assert_eq!(result, Err(3));
        assert_eq!(seen, vec![1, 2]);

        list.traverse_mut(|x| {
            *x *= 10;
            Ok::<_, ()>(())
        })
        .unwrap();
        assert_eq!(list.as_slice(), &[10, 20, 30, 40]);

        let empty = ArrayList::<i32>::with_capacity(1).unwrap();
        assert_eq!(empty.traverse(|_| Err(())), Ok(()));
    }

    #[test]
    fn test_array_clone() {
        let list = filled(5, &[1, 2]);
        let mut cloned = list.clone();
        assert_eq!(cloned, list);
        assert_eq!(cloned.capacity(), 5);
        cloned.insert(2, 3).unwrap();
        *cloned.get_mut(0).unwrap() = 0;
        assert_eq!(format!("{:?}", cloned), "[0, 2, 3]");
        assert_eq!(format!("{:?}", list), "[1, 2]");
    }

    #[test]
    fn test_array_random_insert_remove() {
        let capacity = 64;
        let mut sut = ArrayList::with_capacity(capacity).unwrap();
        let mut model: Vec<u32> = Vec::new();
        for _ in 0..10_000 {
            if model.len() < capacity && (model.is_empty() || rand::random::<bool>()) {
                let pos = rand::random_range(0..=model.len());
                let value = rand::random_range(0..1000);
                assert_eq!(sut.insert(pos, value), Ok(pos));
                model.insert(pos, value);
            } else {
                let pos = rand::random_range(0..model.len());
                assert_eq!(sut.remove(pos), Ok(model.remove(pos)));
            }
            assert_eq!(sut.as_slice(), model.as_slice());
        }
    }
}
