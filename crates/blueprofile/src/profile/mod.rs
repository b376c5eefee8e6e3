//! Profile managers and the registry the controller selects them from
//!
//! This module provides:
//! - 16-bit service class identifiers for the supported profiles
//! - The `ProfileManager` capability trait and its one-shot completion handle
//! - The Class-of-Device to profile policy table
//! - The `ProfileRegistry` holding managers, policy and configuration

pub mod constants;
pub mod manager;
pub mod registry;
pub mod table;
pub mod types;

// Re-export the public API
pub use self::constants::*;
pub use self::manager::{AttemptOutcome, CompletionHandle, ProfileManager};
pub use self::registry::ProfileRegistry;
pub use self::table::{CodRule, ProfileTable};
pub use self::types::*;
