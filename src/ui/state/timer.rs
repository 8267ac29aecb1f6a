// SPDX-License-Identifier: MPL-2.0
//! Single-slot timers.
//!
//! A timer here is a ticket: arming hands out a fresh number which the
//! delayed message carries back. Arming again or cancelling invalidates the
//! previous ticket, so only the most recent registration ever fires.

/// One logical timer (loader delay, resize debounce, ...).
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    ticket: u64,
    armed: bool,
}

impl TimerSlot {
    /// Arms the slot, replacing any pending registration.
    pub fn arm(&mut self) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.armed = true;
        self.ticket
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Consumes `ticket` if it is the pending one.
    pub fn fire(&mut self, ticket: u64) -> bool {
        if self.armed && ticket == self.ticket {
            self.armed = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut slot = TimerSlot::default();
        let first = slot.arm();
        let second = slot.arm();

        assert!(!slot.fire(first));
        assert!(slot.fire(second));
        assert!(!slot.fire(second), "a ticket fires once");
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let mut slot = TimerSlot::default();
        let ticket = slot.arm();
        slot.cancel();

        assert!(!slot.is_armed());
        assert!(!slot.fire(ticket));
    }
}
