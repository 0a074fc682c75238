//! Liveness tracking for asynchronous session loads.
//!
//! Every load, login and logout takes a new ticket. A completion is applied
//! only if its ticket is still the newest one and the owning provider has
//! not been torn down.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTicket(u64);

#[derive(Debug, Default)]
pub struct SessionEpoch {
    current: u64,
    disposed: bool,
}

impl SessionEpoch {
    /// Starts a new session transition, superseding any in flight.
    pub fn begin(&mut self) -> SessionTicket {
        self.current += 1;
        SessionTicket(self.current)
    }

    /// Supersedes whatever is in flight without starting anything new.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    /// The owner went away; nothing may be applied any more.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_current(&self, ticket: SessionTicket) -> bool {
        !self.disposed && ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut epoch = SessionEpoch::default();
        let first = epoch.begin();
        let second = epoch.begin();
        assert!(!epoch.is_current(first));
        assert!(epoch.is_current(second));
    }

    #[test]
    fn test_logout_discards_pending_load() {
        let mut epoch = SessionEpoch::default();
        let load = epoch.begin();
        epoch.invalidate();
        assert!(!epoch.is_current(load));
    }

    #[test]
    fn test_dispose_discards_everything() {
        let mut epoch = SessionEpoch::default();
        let load = epoch.begin();
        epoch.dispose();
        assert!(!epoch.is_current(load));
        let later = epoch.begin();
        assert!(!epoch.is_current(later));
    }
}
