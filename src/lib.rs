//! This crate provides two linear lists: a circular doubly-linked list driven
//! by a persistent cursor, and a contiguous list with a fixed capacity.
//!
//! The [`List`] inserts and removes elements around its cursor in constant
//! time. In compromise, locating an element by value takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use linear_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::new();
//! list.insert_after(1).unwrap(); // [|1]
//! list.insert_after(2).unwrap(); // [1 |2]
//! list.insert_before(3).unwrap(); // [1 |3 2]
//! assert_eq!(list.read_cursor(), Ok(&3));
//! assert_eq!(list, List::from_iter([1, 3, 2]));
//!
//! assert_eq!(list.delete_cursor(), Ok(3)); // [1 |2]
//! assert_eq!(list.advance_cursor(), Ok(&2)); // [|1 2], cyclic
//! assert_eq!(list.read_cursor(), Ok(&1));
//! ```
//!
//! The [`ArrayList`] keeps its elements in one buffer allocated at creation.
//! Positions are 0-based, and inserting into a full list fails instead of
//! growing it.
//!
//! ```
//! use linear_list::{ArrayList, Error};
//!
//! let mut list = ArrayList::with_capacity(2).unwrap();
//! list.insert(0, 'b').unwrap();
//! list.insert(0, 'a').unwrap();
//! assert_eq!(list.as_slice(), &['a', 'b']);
//! assert_eq!(list.insert(1, 'c'), Err(Error::CapacityExceeded { capacity: 2 }));
//! ```
//!
//! Every fallible operation returns a [`Result`] with an [`Error`] naming the
//! condition. A failed operation leaves the list unchanged.
//!
//! # Memory Layout
//!
//! The nodes of a `List` live in one arena vector and link to each other by
//! index:
//! ```text
//!          ┌───────────────────────────────────────────────────────┐
//!          ↓                                                       │
//!    ╔═══════════╗           ╔═══════════╗                   ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ───→ ║   next    ║ ─┘
//!    ╟───────────╢           ╟───────────╢                   ╟───────────╢
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←─── ║   prev    ║
//! │  ╟───────────╢           ╟───────────╢                   ╟───────────╢
//! │  ║ payload T ║           ║ payload T ║                   ║ payload T ║
//! │  ╚═══════════╝           ╚═══════════╝                   ╚═══════════╝
//! │      head                     ↑                              ↑  tail
//! │                               │                              │
//! └───────────────────────────────┼──────────────────────────────┘
//! ╔═══════════╗                   │
//! ║  cursor   ║ ──────────────────┘
//! ╟───────────╢
//! ║   head    ║
//! ╟───────────╢
//! ║   nodes   ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - the arena `nodes`, whose length is the length of the list;
//! - the index `head` of the first element, if any;
//! - the index `cursor` of the current element, if any.
//!
//! There is no sentinel node: the `next` of the tail is the head, and the
//! `prev` of the head is the tail. A list of one element links the node to
//! itself. `head` and `cursor` are unset exactly when the list is empty.
//!
//! Arena slots are not kept in list order. Removing a node moves the last slot
//! of the arena into the hole, so the arena never has gaps.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. They go
//! from the head to the tail and are double-ended, fused and non-cyclic. The
//! cursor is not touched by iteration.
//!
//! ## Examples
//!
//! ```
//! use linear_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Traversal
//!
//! [`List::traverse`] and [`ArrayList::traverse`] visit every element in order
//! with a fallible visitor, stopping at the first error.
//!
//! ```
//! use linear_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter(["a", "b", "c"]);
//! let mut joined = String::new();
//! let result = list.traverse(|s| {
//!     if *s == "c" {
//!         return Err("stopped at c");
//!     }
//!     joined.push_str(s);
//!     Ok(())
//! });
//! assert_eq!(result, Err("stopped at c"));
//! assert_eq!(joined, "ab");
//! ```
//!
//! [`List`]: crate::List
//! [`ArrayList`]: crate::ArrayList
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Error`]: crate::Error
//! [`Result`]: crate::Result

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub use array::ArrayList;
pub use error::{Error, Result};

pub mod array;
pub mod list;

mod error;
