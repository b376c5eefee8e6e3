//! BlueProfile - Bluetooth profile connection orchestration
//!
//! This library sequences connect/disconnect requests across the profile
//! managers of a Bluetooth host. Given a remote device and either an explicit
//! profile or the device's Class of Device, it attempts each selected profile
//! in turn, bounds every attempt with a watchdog, and reports one aggregated
//! result.

pub mod controller;
pub mod error;
pub mod gap;
pub mod profile;

// Re-export common types for convenience
pub use controller::{
    CompletionSink, DeadlineWatchdog, PostCompletionCallback, ProfileController, SessionQueue,
    SessionState, Watchdog,
};
pub use error::{AddressParseError, RegistryError, SessionError};
pub use gap::{BdAddr, ClassOfDevice, MajorServiceClass};
pub use profile::{
    AttemptOutcome, CodRule, CompletionHandle, Intent, ProfileManager, ProfileRegistry,
    ProfileTable, ProfileTarget, RegistryConfig, ServiceClass,
};
