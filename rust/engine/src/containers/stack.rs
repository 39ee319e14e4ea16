use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// LIFO stack over an owned node chain. The head node is the top.
///
/// Participants keep the cards they were dealt here, and round sessions keep
/// their plays, so history can be replayed oldest-first with [`Stack::reversed`].
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            let node = *node;
            self.top = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Iterates from the top (newest) down to the base (oldest).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }

    /// Values from the base (oldest) up to the top (newest), without mutating the stack.
    pub fn reversed(&self) -> Vec<&T> {
        let mut out: Vec<&T> = self.iter().collect();
        out.reverse();
        out
    }

    /// Renders base to top, e.g. `Base -> [a] -> [b] -> Top`.
    pub fn reversed_display(&self) -> String
    where
        T: fmt::Display,
    {
        let mut s = String::from("Base -> ");
        for value in self.reversed() {
            s.push_str(&format!("[{}] -> ", value));
        }
        s.push_str("Top");
        s
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut copy = Stack::new();
        for value in self.reversed() {
            copy.push(value.clone());
        }
        copy
    }
}

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

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders top to base, e.g. `Top -> [c] -> [b] -> null`.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Top -> ")?;
        for value in self.iter() {
            write!(f, "[{}] -> ", value)?;
        }
        write!(f, "null")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.push('b');
        stack.push('c');
        assert_eq!(stack.pop(), Some('c'));
        assert_eq!(stack.pop(), Some('b'));
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn peek_does_not_mutate() {
        let mut stack = Stack::new();
        assert!(stack.peek().is_none());
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn reversed_view_is_chronological() {
        let mut stack = Stack::new();
        for v in ["first", "second", "third"] {
            stack.push(v);
        }
        assert_eq!(stack.reversed(), vec![&"first", &"second", &"third"]);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&"third"));
    }

    #[test]
    fn renders_both_directions() {
        let mut stack = Stack::new();
        assert_eq!(stack.to_string(), "Top -> null");
        assert_eq!(stack.reversed_display(), "Base -> Top");
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.to_string(), "Top -> [2] -> [1] -> null");
        assert_eq!(stack.reversed_display(), "Base -> [1] -> [2] -> Top");
    }

    #[test]
    fn clone_preserves_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        let mut copy = stack.clone();
        assert_eq!(copy.pop(), Some(2));
        assert_eq!(copy.pop(), Some(1));
        assert_eq!(stack.len(), 2);
    }
}
