//! Trailing debounce bookkeeping.
//!
//! Every event gets an immediate evaluation from the caller plus one timer
//! armed with the returned [`Ticket`]. Only the newest ticket fires, so the
//! final resting state is always evaluated once after a burst of events.

/// Delay of the trailing scroll evaluation.
pub const SCROLL_DEBOUNCE_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u32,
    generation: u64,
    pending: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SCROLL_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: false,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Registers an event and returns the ticket for the trailing timer.
    /// Any ticket handed out before becomes stale.
    pub fn on_event(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Ticket(self.generation)
    }

    /// Returns true when `ticket` is the newest one, in which case the
    /// trailing evaluation should run.
    pub fn on_timer(&mut self, ticket: Ticket) -> bool {
        if !self.pending || ticket.0 != self.generation {
            return false;
        }
        self.pending = false;
        true
    }

    /// Teardown: every outstanding ticket becomes stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.on_event();
        let second = debouncer.on_event();
        let third = debouncer.on_event();

        assert!(!debouncer.on_timer(first));
        assert!(!debouncer.on_timer(second));
        assert!(debouncer.on_timer(third));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn ticket_fires_once() {
        let mut debouncer = Debouncer::new(10);
        let ticket = debouncer.on_event();
        assert!(debouncer.on_timer(ticket));
        assert!(!debouncer.on_timer(ticket));
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.on_event();
        debouncer.cancel();
        assert!(!debouncer.on_timer(ticket));
        assert_eq!(debouncer.delay_ms(), SCROLL_DEBOUNCE_MS);
    }
}
