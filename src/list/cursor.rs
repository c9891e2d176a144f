//! Cursor operations of a [`List`].
//!
//! The cursor of a `List` always rests on a node (never between nodes) and
//! moves cyclically: advancing from the tail lands on the head and retreating
//! from the head lands on the tail. It is `None` exactly when the list is
//! empty.
//!
//! # Examples
//!
//! Here is a simple example showing how the cursor works. (The cursor is
//! denoted by `|`, and the head is always printed first).
//! ```
//! use linear_list::List;
//!
//! let mut list = List::new();
//!
//! // Inserting after the cursor builds the list forward: [ A B |C ]
//! list.insert_after('A').unwrap();
//! list.insert_after('B').unwrap();
//! list.insert_after('C').unwrap();
//! assert_eq!(list.read_cursor(), Ok(&'C'));
//!
//! // Advancing returns the current element, then moves: [|A B C ]
//! assert_eq!(list.advance_cursor(), Ok(&'C'));
//! assert_eq!(list.read_cursor(), Ok(&'A'));
//!
//! // Inserting before the head makes a new head: [|D A B C ]
//! list.insert_before('D').unwrap();
//! assert_eq!(list.head(), Some(&'D'));
//!
//! // Deleting the head moves both the head and the cursor forward: [|A B C ]
//! assert_eq!(list.delete_cursor(), Ok('D'));
//! assert_eq!(list.head(), Some(&'A'));
//! assert_eq!(list.read_cursor(), Ok(&'A'));
//! ```
//!
//! [`List`]: crate::List

use crate::error::{Error, Result};
use crate::list::List;

impl<T> List<T> {
    fn cursor_node(&self) -> Result<usize> {
        self.cursor.ok_or(Error::EmptyCollection)
    }

    /// Move the cursor to the head, or leave it unset if the list is empty.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn reset_cursor(&mut self) {
        self.cursor = self.head;
    }

    /// Return a reference to the element at the cursor, without moving it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.read_cursor(), Err(Error::EmptyCollection));
    ///
    /// list.insert_after(1).unwrap();
    /// assert_eq!(list.read_cursor(), Ok(&1));
    /// ```
    pub fn read_cursor(&self) -> Result<&T> {
        let cursor = self.cursor_node()?;
        Ok(&self.nodes[cursor].element)
    }

    /// Return a mutable reference to the element at the cursor, without
    /// moving it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    ///
    /// let mut list = List::new();
    /// list.insert_after(3).unwrap();
    /// *list.read_cursor_mut().unwrap() *= 5;
    /// assert_eq!(list.read_cursor(), Ok(&15));
    /// ```
    pub fn read_cursor_mut(&mut self) -> Result<&mut T> {
        let cursor = self.cursor_node()?;
        Ok(&mut self.nodes[cursor].element)
    }

    /// Return the element at the cursor, then move the cursor to the next
    /// node.
    ///
    /// In a list of one element the cursor stays where it is.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// assert_eq!(list.advance_cursor(), Ok(&1));
    /// assert_eq!(list.advance_cursor(), Ok(&2));
    /// // cyclic
    /// assert_eq!(list.advance_cursor(), Ok(&1));
    /// ```
    pub fn advance_cursor(&mut self) -> Result<&T> {
        let cursor = self.cursor_node()?;
        self.cursor = Some(self.nodes[cursor].next);
        Ok(&self.nodes[cursor].element)
    }

    /// Return the element at the cursor, then move the cursor to the previous
    /// node.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.retreat_cursor(), Ok(&1));
    /// assert_eq!(list.read_cursor(), Ok(&3));
    /// ```
    pub fn retreat_cursor(&mut self) -> Result<&T> {
        let cursor = self.cursor_node()?;
        self.cursor = Some(self.nodes[cursor].prev);
        Ok(&self.nodes[cursor].element)
    }

    /// Insert a new element before the cursor and move the cursor onto it.
    ///
    /// If the cursor was on the head, the new element becomes the head. In an
    /// empty list the new element becomes both the head and the cursor.
    ///
    /// This operation should compute in *O*(1) time (amortized, as the node
    /// arena may grow).
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the node cannot be allocated; the list
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::new();
    /// list.insert_before(1).unwrap();
    /// list.insert_before(2).unwrap();
    /// list.insert_before(3).unwrap();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn insert_before(&mut self, item: T) -> Result<()> {
        match self.cursor {
            Some(cursor) => {
                let node = self.attach_after(Some(self.nodes[cursor].prev), item)?;
                if self.head == Some(cursor) {
                    self.head = Some(node);
                }
                self.cursor = Some(node);
            }
            None => {
                self.attach_after(None, item)?;
            }
        }
        Ok(())
    }

    /// Insert a new element after the cursor and move the cursor onto it.
    ///
    /// The head never changes, except that in an empty list the new element
    /// becomes both the head and the cursor.
    ///
    /// This operation should compute in *O*(1) time (amortized, as the node
    /// arena may grow).
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the node cannot be allocated; the list
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::new();
    /// list.insert_after(1).unwrap();
    /// list.insert_after(2).unwrap();
    /// list.insert_after(3).unwrap();
    /// assert_eq!(list.read_cursor(), Ok(&3));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, item: T) -> Result<()> {
        let node = self.attach_after(self.cursor, item)?;
        self.cursor = Some(node);
        Ok(())
    }

    /// Remove the element at the cursor and return it. The cursor moves to
    /// the next node.
    ///
    /// If the removed node was the head, the next node becomes the head.
    /// Removing the last element leaves the head and the cursor unset.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.delete_cursor(), Ok(1));
    /// assert_eq!(list.head(), Some(&2));
    /// assert_eq!(list.read_cursor(), Ok(&2));
    ///
    /// list.clear();
    /// assert_eq!(list.delete_cursor(), Err(Error::EmptyCollection));
    /// ```
    pub fn delete_cursor(&mut self) -> Result<T> {
        let cursor = self.cursor_node()?;
        Ok(self.detach_node(cursor))
    }

    /// Move the cursor to the first element, scanning forward from the head,
    /// that equals `value`.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches (including when the list is
    /// empty). The cursor is then left where it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 2]);
    /// assert!(list.set_cursor(&2).is_ok());
    /// assert_eq!(list.advance_cursor(), Ok(&2));
    /// assert_eq!(list.read_cursor(), Ok(&3));
    ///
    /// assert_eq!(list.set_cursor(&5), Err(Error::NotFound));
    /// assert_eq!(list.read_cursor(), Ok(&3));
    /// ```
    pub fn set_cursor(&mut self, value: &T) -> Result<()>
    where
        T: PartialEq,
    {
        self.set_cursor_by(|element| element == value)
    }

    /// Like [`List::set_cursor`], but matching with a predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([("a", 1), ("b", 2)]);
    /// list.set_cursor_by(|&(name, _)| name == "b").unwrap();
    /// assert_eq!(list.read_cursor(), Ok(&("b", 2)));
    /// ```
    pub fn set_cursor_by<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&T) -> bool,
    {
        let head = self.head.ok_or(Error::NotFound)?;
        let mut at = head;
        for _ in 0..self.len() {
            if f(&self.nodes[at].element) {
                self.cursor = Some(at);
                return Ok(());
            }
            at = self.nodes[at].next;
        }
        Err(Error::NotFound)
    }
}
