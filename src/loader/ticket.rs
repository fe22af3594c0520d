use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identity of one loader instance.
///
/// Completions travel through the app message channel tagged with the ticket
/// of the loader that produced them. A completion is only applied to the
/// loader holding the same ticket, so a message from a torn-down loader can
/// never land on its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    /// Allocate a process-unique ticket
    pub(crate) fn next() -> Self {
        Self(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw ticket number
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_unique_and_increasing() {
        let a = LoadTicket::next();
        let b = LoadTicket::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_ticket_display() {
        let ticket = LoadTicket(42);
        assert_eq!(ticket.to_string(), "load-42");
        assert_eq!(ticket.get(), 42);
    }
}
