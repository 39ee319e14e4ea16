use std::fmt;

use crate::errors::ContainerError;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked, insertion-ordered sequence.
///
/// Appends walk to the tail (O(n)); removal only happens at the front (O(1)).
/// Hands and the deck are both stored in a `Sequence<Card>`.
///
/// # Examples
///
/// ```
/// use blackjack_engine::containers::Sequence;
///
/// let mut seq = Sequence::new();
/// seq.append("a");
/// seq.append("b");
/// assert_eq!(seq.get(1), Ok(&"b"));
/// assert_eq!(seq.remove_first(), Some("a"));
/// assert_eq!(seq.to_string(), "[b]->null");
/// ```
pub struct Sequence<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Attaches `value` after the current tail.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Detaches and returns the first value, or `None` when empty.
    pub fn remove_first(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Reads the value at `index`, walking from the head.
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        let out_of_range = ContainerError::OutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        self.iter().nth(index).ok_or(out_of_range)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drops every node, leaving an empty sequence.
    pub fn clear(&mut self) {
        while self.remove_first().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        // unlink iteratively; the default recursive drop can overflow on long chains
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // locate the tail once, then keep appending behind it
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            let node = cursor.insert(Box::new(Node { value, next: None }));
            cursor = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.extend(iter);
        seq
    }
}

/// Forward-only iterator over a [`Sequence`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]->null");
        }
        for value in self.iter() {
            write!(f, "[{}]->", value)?;
        }
        write!(f, "null")
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_insertion_order() {
        let mut seq = Sequence::new();
        for i in 0..5 {
            seq.append(i);
        }
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_vec(), vec![0, 1, 2, 3, 4]);
        for i in 0..5 {
            assert_eq!(seq.get(i), Ok(&i));
        }
    }

    #[test]
    fn get_past_the_end_is_out_of_range() {
        let seq: Sequence<u8> = [1, 2].into_iter().collect();
        assert_eq!(
            seq.get(2),
            Err(ContainerError::OutOfRange { index: 2, len: 2 })
        );
        let empty: Sequence<u8> = Sequence::new();
        assert!(empty.get(0).is_err());
    }

    #[test]
    fn remove_first_on_empty_returns_none() {
        let mut seq: Sequence<&str> = Sequence::new();
        assert_eq!(seq.remove_first(), None);
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert!(seq.first().is_none());
    }

    #[test]
    fn remove_first_then_append_reuses_empty_head() {
        let mut seq = Sequence::new();
        seq.append('x');
        assert_eq!(seq.remove_first(), Some('x'));
        assert!(seq.is_empty());
        seq.append('y');
        assert_eq!(seq.first(), Some(&'y'));
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn renders_as_chain() {
        let mut seq = Sequence::new();
        assert_eq!(seq.to_string(), "[]->null");
        seq.append(7);
        seq.append(8);
        assert_eq!(seq.to_string(), "[7]->[8]->null");
        assert_eq!(format!("{:?}", seq), "[7, 8]");
    }

    #[test]
    fn clear_empties_everything() {
        let mut seq: Sequence<u32> = (0..100).collect();
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.iter().count(), 0);
    }

    #[test]
    fn long_chain_drops_without_overflow() {
        let seq: Sequence<u32> = (0..200_000).collect();
        assert_eq!(seq.len(), 200_000);
        drop(seq);
    }
}
