use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    /// Lists are equal when they hold equal elements in the same order from
    /// their heads. Cursor positions are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Copy the whole ring, including the positions of the head and the
    /// cursor.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            head: self.head,
            cursor: self.cursor,
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.nodes.clone_from(&other.nodes);
        self.head = other.head;
        self.cursor = other.cursor;
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Call `visit` on every element, from the head around the ring to the
    /// tail, stopping at the first error and returning it.
    ///
    /// Elements after the failing one are not visited. The cursor is not
    /// moved.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, plus the cost of
    /// `visit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3, 4]);
    ///
    /// let mut sum = 0;
    /// assert_eq!(list.traverse(|&x| { sum += x; Ok::<_, ()>(()) }), Ok(()));
    /// assert_eq!(sum, 10);
    ///
    /// let mut seen = Vec::new();
    /// let result = list.traverse(|&x| {
    ///     if x == 3 {
    ///         return Err("three");
    ///     }
    ///     seen.push(x);
    ///     Ok(())
    /// });
    /// assert_eq!(result, Err("three"));
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    pub fn traverse<E, F>(&self, visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.iter().try_for_each(visit)
    }

    /// Like [`List::traverse`], but `visit` may modify the elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.traverse_mut(|x| {
    ///     *x *= 2;
    ///     Ok::<_, ()>(())
    /// })
    /// .unwrap();
    /// assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
    /// ```
    pub fn traverse_mut<E, F>(&mut self, visit: F) -> Result<(), E>
    where
        F: FnMut(&mut T) -> Result<(), E>,
    {
        self.iter_mut().try_for_each(visit)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq_ignores_cursor() {
        let mut a = List::from_iter(vec![1, 2, 3]);
        let b = List::from_iter(vec![1, 2, 3]);
        a.set_cursor(&3).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, List::from_iter(vec![1, 2]));
        assert!(List::from_iter(vec![1, 2]) < a);
    }

    #[test]
    fn list_eq_with_different_arena_layout() {
        // same sequence, built in different orders
        let a = List::from_iter(vec![1, 2, 3]);
        let mut b = List::new();
        b.insert_before(3).unwrap();
        b.insert_before(2).unwrap();
        b.insert_before(1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn list_clone_keeps_head_and_cursor() {
        let mut list = List::from_iter(vec![1, 2, 3]);
        list.set_cursor(&2).unwrap();
        let mut cloned = list.clone();
        cloned.assert_ring(&[1, 2, 3], Some(1));
        assert_eq!(cloned.delete_cursor(), Ok(2));
        list.assert_ring(&[1, 2, 3], Some(1));

        cloned.clone_from(&list);
        cloned.assert_ring(&[1, 2, 3], Some(1));
    }

    #[test]
    fn list_traverse_visits_every_element_once() {
        let mut list = List::new();
        for value in 0..5 {
            list.insert_before(value).unwrap();
        }
        list.set_cursor(&2).unwrap();

        let mut visited = Vec::new();
        let result: Result<(), ()> = list.traverse(|&x| {
            visited.push(x);
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(visited, vec![4, 3, 2, 1, 0]);
        // the cursor is not used for traversal
        assert_eq!(list.read_cursor(), Ok(&2));
    }

    #[test]
    fn list_traverse_empty() {
        let list = List::<i32>::new();
        let mut calls = 0;
        let result: Result<(), ()> = list.traverse(|_| {
            calls += 1;
            Err(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(calls, 0);
    }

    #[test]
    fn list_traverse_aborts_on_error() {
        let mut list = List::from_iter(vec![1, 2, 3, 4]);
        let result = list.traverse_mut(|x| {
            if *x == 3 {
                return Err(*x);
            }
            *x += 10;
            Ok(())
        });
        assert_eq!(result, Err(3));
        // visits before the failure are not rolled back
        assert_eq!(Vec::from_iter(list), vec![11, 12, 3, 4]);
    }

    #[test]
    fn list_contains() {
        let list = List::from_iter(vec!["a", "b"]);
        assert!(list.contains(&"b"));
        assert!(!list.contains(&"c"));
        assert!(!List::<&str>::new().contains(&"a"));
    }
}
