//! Profile connection controller
//!
//! This module provides the sequencing policy above the profile managers:
//! - One session per connect/disconnect request
//! - Strictly sequential profile attempts, each bounded by a watchdog
//! - A single aggregated report per session
//! - A queue serializing sessions for the embedding service

pub mod core;
pub mod queue;
pub mod watchdog;

// Re-export the public API
pub use self::core::{CompletionSink, PostCompletionCallback, ProfileController, SessionState};
pub use self::queue::SessionQueue;
pub use self::watchdog::{DeadlineWatchdog, Watchdog};
