//! Toast notification slot.
//!
//! One toast at a time. Each `show` bumps `seq`; the auto-dismiss timer
//! only clears the toast it was started for.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use std::time::Duration;

use retina::handshake::Notification;

pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub current: Option<Notification>,
    pub seq: u64,
}

impl NotificationState {
    /// Replace any visible toast. Returns the new sequence number.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.seq += 1;
        self.current = Some(notification);
        self.seq
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Dismiss only if `seq` is still the visible toast.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.seq == seq && self.current.is_some() {
            self.current = None;
            return true;
        }
        false
    }
}
