use std::fmt::{Debug, Formatter};

use crate::error::Result;
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a circular doubly-linked list with a persistent cursor.
///
/// Inserting and deleting at the cursor take *O*(1) time. Repositioning the
/// cursor by value takes *O*(*n*) time.
///
/// The `List` contains:
/// - an arena `nodes` owning every node of the ring; a node links to its
///   neighbours by arena index;
/// - a `head` index, the logically first node (`None` iff the list is empty);
/// - a `cursor` index, the current node (`None` iff the list is empty).
///
/// The length of the list is the length of the arena, so it is available in
/// *O*(1) time.
///
/// # Naming Conventions
///
/// - `head`: the node where traversal starts. It is "first" only by
///   insertion history and relocates when a node is inserted before it at
///   the cursor, or when it is deleted.
/// - `tail`: `head.prev`, the node traversal ends with.
pub struct List<T> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) head: Option<usize>,
    pub(crate) cursor: Option<usize>,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    pub(crate) fn tail_node(&self) -> Option<usize> {
        self.head.map(|head| self.nodes[head].prev)
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Allocate a node holding `element`, forming a ring of its own, and
    /// return its index.
    fn new_node(&mut self, element: T) -> Result<usize> {
        self.nodes.try_reserve(1)?;
        let at = self.nodes.len();
        self.nodes.push(Node {
            next: at,
            prev: at,
            element,
        });
        Ok(at)
    }

    /// Attach a single node `node` to the ring, between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent (only checked in
    /// `#[cfg(debug_assertions)]`), otherwise the ring becomes ill-formed.
    fn attach_node(&mut self, prev: usize, next: usize, node: usize) {
        #[cfg(debug_assertions)]
        assert_adjacent(&self.nodes, prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(&self.nodes, prev, node);
            assert_adjacent(&self.nodes, node, next);
        }
    }

    /// Create a node holding `element` and splice it in right after `prev`,
    /// returning its index.
    ///
    /// If `prev` is `None` the list must be empty; the new node becomes both
    /// the head and the cursor.
    pub(crate) fn attach_after(&mut self, prev: Option<usize>, element: T) -> Result<usize> {
        let node = self.new_node(element)?;
        match prev {
            Some(prev) => {
                let next = self.nodes[prev].next;
                self.attach_node(prev, next, node);
            }
            None => {
                debug_assert!(self.head.is_none() && self.cursor.is_none());
                self.head = Some(node);
                self.cursor = Some(node);
            }
        }
        Ok(node)
    }

    /// Detach the node at `at` from the ring, release it, and return its
    /// element.
    ///
    /// A head or cursor on the detached node moves to its successor, or
    /// becomes `None` if the node was the last one.
    pub(crate) fn detach_node(&mut self, at: usize) -> T {
        let (prev, next) = (self.nodes[at].prev, self.nodes[at].next);
        if next == at {
            self.head = None;
            self.cursor = None;
        } else {
            self.connect(prev, next);
            if self.head == Some(at) {
                self.head = Some(next);
            }
            if self.cursor == Some(at) {
                self.cursor = Some(next);
            }
        }
        let node = self.nodes.swap_remove(at);
        if at < self.nodes.len() {
            self.relocate(self.nodes.len(), at);
        }
        node.element
    }

    /// The node that lived in arena slot `from` has been moved to slot `to`;
    /// rewrite every link, and the head and cursor, that still say `from`.
    fn relocate(&mut self, from: usize, to: usize) {
        let (prev, next) = (self.nodes[to].prev, self.nodes[to].next);
        // a ring of one links to itself
        let prev = if prev == from { to } else { prev };
        let next = if next == from { to } else { next };
        self.connect(prev, to);
        self.connect(to, next);
        if self.head == Some(from) {
            self.head = Some(to);
        }
        if self.cursor == Some(from) {
            self.cursor = Some(to);
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use linear_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            cursor: None,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.insert_after("foo").unwrap();
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.insert_after(2).unwrap();
    /// assert_eq!(list.len(), 1);
    ///
    /// list.insert_before(1).unwrap();
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Removes all elements from the `List`.
    ///
    /// Elements are deleted one at a time at the cursor, so they are dropped
    /// in ring order starting from the cursor. The cursor ends up reset.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.head(), None);
    /// ```
    pub fn clear(&mut self) {
        while self.delete_cursor().is_ok() {}
        self.reset_cursor();
    }

    /// Provides a reference to the head element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.head(), None);
    ///
    /// list.insert_after(1).unwrap();
    /// list.insert_before(0).unwrap();
    /// assert_eq!(list.head(), Some(&0));
    /// ```
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes[head].element)
    }

    /// Provides a reference to the tail element (the one right before the
    /// head), or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.tail(), Some(&3));
    /// ```
    #[inline]
    pub fn tail(&self) -> Option<&T> {
        self.tail_node().map(|tail| &self.nodes[tail].element)
    }

    /// Adds an element before the head and makes it the new head.
    ///
    /// The cursor of a non-empty list stays on its node; an empty list gets
    /// its cursor on the new element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2).unwrap();
    /// assert_eq!(list.head(), Some(&2));
    ///
    /// list.push_front(1).unwrap();
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.read_cursor(), Ok(&2));
    /// ```
    pub fn push_front(&mut self, elt: T) -> Result<()> {
        let node = self.attach_after(self.tail_node(), elt)?;
        self.head = Some(node);
        Ok(())
    }

    /// Adds an element after the tail, keeping the head and the cursor of a
    /// non-empty list where they are.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1).unwrap();
    /// list.push_back(3).unwrap();
    /// assert_eq!(list.tail(), Some(&3));
    /// assert_eq!(list.read_cursor(), Ok(&1));
    /// ```
    pub fn push_back(&mut self, elt: T) -> Result<()> {
        self.attach_after(self.tail_node(), elt).map(drop)
    }

    /// Removes the head element and returns it, or `None` if the list is
    /// empty.
    ///
    /// A cursor on the head follows it to the next node.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([3, 1]);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.detach_node(head))
    }

    /// Removes the tail element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// assert_eq!(list.pop_back(), Some(3));
    /// assert_eq!(list.tail(), Some(&1));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail_node()?;
        Some(self.detach_node(tail))
    }

    /// Provides a forward iterator, from the head to the tail.
    ///
    /// The iterator does not use the cursor and is not cyclic.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.insert_after(0).unwrap();
    /// list.insert_after(1).unwrap();
    /// list.insert_after(2).unwrap();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(nodes: &[Node<T>], prev: usize, next: usize) {
    assert_eq!(nodes[prev].next, next);
    assert_eq!(nodes[next].prev, prev);
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
