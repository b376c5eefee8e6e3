//! Session queue
//!
//! Serializes profile sessions: only the front controller runs, the next
//! one starts when it finishes.

use crate::controller::core::{ProfileController, SessionState};
use log::{debug, warn};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct SessionQueue {
    sessions: VecDeque<ProfileController>,
}

impl SessionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a controller, starting it immediately if nothing else is running
    pub fn push(&mut self, controller: ProfileController) {
        debug!(
            "Queueing {} session for {} ({} ahead)",
            controller.intent(),
            controller.address(),
            self.sessions.len()
        );
        self.sessions.push_back(controller);

        if self.sessions.len() == 1 {
            self.start_front();
        }
    }

    /// The running session, if any
    pub fn active(&self) -> Option<&ProfileController> {
        self.sessions.front()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drive the front session without blocking
    pub fn poll(&mut self) {
        while let Some(front) = self.sessions.front_mut() {
            if front.poll() != SessionState::Done {
                break;
            }
            self.sessions.pop_front();
            self.start_front();
        }
    }

    /// Drive sessions until the queue drains or `timeout` elapses
    pub fn process_events(&mut self, timeout: Option<Duration>) {
        let start_time = Instant::now();

        loop {
            self.poll();

            let remaining_timeout = timeout.map(|t| t.saturating_sub(start_time.elapsed()));
            if remaining_timeout == Some(Duration::ZERO) {
                break;
            }

            match self.sessions.front_mut() {
                Some(front) => {
                    front.process_events(remaining_timeout);
                }
                None => break,
            }
        }
    }

    /// Start queued sessions until one stays in flight
    fn start_front(&mut self) {
        while let Some(front) = self.sessions.front_mut() {
            if let Err(e) = front.start_session() {
                warn!("Failed to start queued session: {}", e);
            }
            if !front.is_done() {
                break;
            }
            self.sessions.pop_front();
        }
    }
}
