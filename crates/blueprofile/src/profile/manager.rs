//! Profile manager capability and completion delivery
//!
//! Concrete profiles (hands-free, A2DP, HID, ...) implement [`ProfileManager`].
//! Each connect/disconnect call hands the manager a [`CompletionHandle`] that
//! must be resolved once, from any thread, when the attempt finishes.

use crate::gap::BdAddr;
use crate::profile::types::ServiceClass;
use log::trace;
use std::sync::mpsc::Sender;

/// Result of one profile attempt. The error carries the manager's failure text.
pub type AttemptOutcome = Result<(), String>;

/// Capability set the controller drives every profile through
pub trait ProfileManager: Send + Sync {
    /// Stable identifier of the profile this manager serves
    fn service_class(&self) -> ServiceClass;

    /// Start connecting the profile to `address`
    fn connect(&self, address: BdAddr, done: CompletionHandle);

    /// Start disconnecting the profile from `address`
    fn disconnect(&self, address: BdAddr, done: CompletionHandle);

    /// Whether the profile is currently connected to `address`
    fn is_connected(&self, address: &BdAddr) -> bool;

    /// Called when the controller stops waiting for an attempt on `address`.
    fn reset(&self, _address: &BdAddr) {}
}

/// Message queued back to the controller when a handle resolves
#[derive(Debug)]
pub(crate) struct AttemptCompletion {
    pub attempt: usize,
    pub outcome: AttemptOutcome,
}

/// One-shot completion target for a single profile attempt.
///
/// Dropping an unresolved handle reports the attempt as failed.
#[derive(Debug)]
pub struct CompletionHandle {
    attempt: usize,
    service_class: ServiceClass,
    sender: Option<Sender<AttemptCompletion>>,
}

impl CompletionHandle {
    pub(crate) fn new(
        attempt: usize,
        service_class: ServiceClass,
        sender: Sender<AttemptCompletion>,
    ) -> Self {
        Self {
            attempt,
            service_class,
            sender: Some(sender),
        }
    }

    /// Service class of the attempt this handle belongs to
    pub fn service_class(&self) -> ServiceClass {
        self.service_class
    }

    pub fn succeed(self) {
        self.complete(Ok(()));
    }

    pub fn fail(self, reason: impl Into<String>) {
        self.complete(Err(reason.into()));
    }

    /// Resolve from an error string; an empty string means success.
    pub fn complete_with_error_text(self, error: &str) {
        if error.is_empty() {
            self.succeed();
        } else {
            self.fail(error);
        }
    }

    pub fn complete(mut self, outcome: AttemptOutcome) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: AttemptOutcome) {
        if let Some(sender) = self.sender.take() {
            // The controller may already be gone
            if sender
                .send(AttemptCompletion {
                    attempt: self.attempt,
                    outcome,
                })
                .is_err()
            {
                trace!(
                    "Completion for {} attempt {} has no receiver",
                    self.service_class,
                    self.attempt
                );
            }
        }
    }
}

impl Drop for CompletionHandle {
    fn drop(&mut self) {
        self.send(Err(format!(
            "{} dropped its completion handle",
            self.service_class
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_handle_delivers_exactly_once() {
        let (tx, rx) = channel();
        let handle = CompletionHandle::new(3, ServiceClass::Hid, tx);
        handle.fail("page timeout");

        let completion = rx.try_recv().unwrap();
        assert_eq!(completion.attempt, 3);
        assert_eq!(completion.outcome, Err("page timeout".to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_handle_reports_failure() {
        let (tx, rx) = channel();
        drop(CompletionHandle::new(0, ServiceClass::A2dp, tx));

        let completion = rx.try_recv().unwrap();
        assert!(completion.outcome.is_err());
    }

    #[test]
    fn test_error_text_mapping() {
        let (tx, rx) = channel();
        CompletionHandle::new(0, ServiceClass::Hid, tx.clone()).complete_with_error_text("");
        CompletionHandle::new(1, ServiceClass::Hid, tx).complete_with_error_text("busy");

        assert_eq!(rx.try_recv().unwrap().outcome, Ok(()));
        assert_eq!(rx.try_recv().unwrap().outcome, Err("busy".to_string()));
    }
}
