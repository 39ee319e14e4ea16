use std::fmt;

/// Slot in the queue's node arena. Vacant slots hold no value and are threaded
/// onto the free list through `next`.
struct Slot<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// FIFO queue with O(1) enqueue at the tail and dequeue at the head.
///
/// Nodes live in an arena and link to each other by index, so the tail can be
/// reached without a second owner. Dequeued slots are recycled.
pub struct Queue<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn enqueue(&mut self, value: T) {
        let idx = self.allocate(value);
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Detaches the head value; `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let idx = self.head?;
        let slot = &mut self.slots[idx];
        let value = slot.value.take();
        self.head = slot.next;
        slot.next = self.free;
        self.free = Some(idx);
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.and_then(|idx| self.slots[idx].value.as_ref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drains every element, then enqueues `values` in order.
    pub fn reset_to<I: IntoIterator<Item = T>>(&mut self, values: I) {
        while self.dequeue().is_some() {}
        for value in values {
            self.enqueue(value);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            next: self.head,
        }
    }

    fn allocate(&mut self, value: T) -> usize {
        match self.free {
            Some(idx) => {
                let slot = &mut self.slots[idx];
                self.free = slot.next;
                slot.value = Some(value);
                slot.next = None;
                idx
            }
            None => {
                self.slots.push(Slot {
                    value: Some(value),
                    next: None,
                });
                self.slots.len() - 1
            }
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    queue: &'a Queue<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = &self.queue.slots[self.next?];
        self.next = slot.next;
        slot.value.as_ref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Head -> ")?;
        for value in self.iter() {
            write!(f, "[{}] -> ", value)?;
        }
        write!(f, "Tail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_enqueue_order() {
        let mut q = Queue::new();
        q.enqueue('a');
        q.enqueue('b');
        q.enqueue('c');
        assert_eq!(q.dequeue(), Some('a'));
        assert_eq!(q.dequeue(), Some('b'));
        assert_eq!(q.dequeue(), Some('c'));
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.len(), 0);
        assert!(q.is_empty());
    }

    #[test]
    fn empty_queue_has_no_head_or_tail() {
        let mut q: Queue<u8> = Queue::new();
        assert!(q.peek().is_none());
        q.enqueue(1);
        q.dequeue();
        assert!(q.head.is_none());
        assert!(q.tail.is_none());
        assert!(q.peek().is_none());
    }

    #[test]
    fn slots_are_recycled() {
        let mut q = Queue::new();
        for round in 0..10 {
            q.enqueue(round);
            q.enqueue(round + 100);
            assert_eq!(q.dequeue(), Some(round));
            assert_eq!(q.dequeue(), Some(round + 100));
        }
        assert!(q.slots.len() <= 2);
    }

    #[test]
    fn interleaved_operations_keep_fifo() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(3);
        assert_eq!(q.peek(), Some(&2));
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn reset_to_replaces_contents() {
        let mut q = Queue::new();
        q.enqueue("stale");
        q.enqueue("stale2");
        q.reset_to(["p1", "p2"]);
        assert_eq!(q.len(), 2);
        assert_eq!(q.to_string(), "Head -> [p1] -> [p2] -> Tail");
        assert_eq!(q.dequeue(), Some("p1"));
        assert_eq!(q.dequeue(), Some("p2"));
        assert_eq!(q.dequeue(), None);
    }
}
