//! Error types for the blueprofile library
//!
//! This module defines the error types used throughout the library.

use crate::profile::ServiceClass;
use thiserror::Error;

/// The single error a profile session can report to its completion sink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No profile is applicable to the request")]
    NoApplicableProfile,

    #[error("ConnectionFailedError")]
    ConnectionFailed,

    #[error("DisconnectionFailedError")]
    DisconnectionFailed,

    #[error("Bluetooth service is not available")]
    ServiceUnavailable,

    #[error("Session was dropped before it completed")]
    Aborted,

    #[error("Invalid state for operation")]
    InvalidState,
}

/// Errors raised while populating a profile registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Profile {0} already registered")]
    DuplicateProfile(ServiceClass),
}

/// Errors produced when parsing a textual device address
#[derive(Error, Debug)]
pub enum AddressParseError {
    #[error("Malformed device address: {0}")]
    Format(String),

    #[error("Invalid hex in device address: {0}")]
    Hex(#[from] hex::FromHexError),
}
