use std::cell::Cell;

/// Orders mount requests: only the latest one may run.
///
/// A mount deferred to `DOMContentLoaded` holds a ticket; a newer request
/// or an unmount invalidates it.
#[derive(Debug, Default)]
pub struct MountSchedule {
    generation: Cell<u64>,
}

impl MountSchedule {
    pub const fn new() -> Self {
        Self { generation: Cell::new(0) }
    }

    /// Ticket for a new request; older tickets go stale.
    pub fn request(&self) -> u64 {
        self.cancel();
        self.generation.get()
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_deferred_one() {
        let schedule = MountSchedule::new();
        let default_mount = schedule.request();
        let override_mount = schedule.request();

        assert!(!schedule.is_current(default_mount));
        assert!(schedule.is_current(override_mount));
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let schedule = MountSchedule::new();
        let ticket = schedule.request();
        schedule.cancel();
        assert!(!schedule.is_current(ticket));
    }
}
