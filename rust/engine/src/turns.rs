use crate::containers::Queue;

/// Round-robin turn order: everyone queued acts once before anyone repeats.
///
/// # Examples
///
/// ```
/// use blackjack_engine::turns::TurnSequencer;
///
/// let mut turns = TurnSequencer::new();
/// turns.start_round(["Ana", "Dealer"]);
/// assert_eq!(turns.current(), Some(&"Ana"));
/// assert_eq!(turns.advance(), Some("Ana"));
/// assert_eq!(turns.advance(), Some("Dealer"));
/// assert!(!turns.has_pending_turns());
/// assert_eq!(turns.advance(), None);
/// ```
#[derive(Debug, Default)]
pub struct TurnSequencer<T> {
    queue: Queue<T>,
}

impl<T> TurnSequencer<T> {
    pub fn new() -> Self {
        Self {
            queue: Queue::new(),
        }
    }

    /// Drops whatever was still pending and queues `participants` in order.
    pub fn start_round<I: IntoIterator<Item = T>>(&mut self, participants: I) {
        self.queue.reset_to(participants);
    }

    pub fn current(&self) -> Option<&T> {
        self.queue.peek()
    }

    /// Ends the current turn, returning whose it was.
    pub fn advance(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    pub fn has_pending_turns(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
