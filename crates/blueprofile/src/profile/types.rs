//! Type definitions for profile selection
//!
//! This module contains the identifiers and request descriptors a profile
//! session is built from.

use crate::gap::ClassOfDevice;
use crate::profile::constants::*;
use std::fmt;
use std::time::Duration;

/// Bluetooth service classes a profile manager can serve.
///
/// See Bluetooth Assigned Numbers, "Service Class Profile Identifiers".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceClass {
    /// OBEX Object Push
    ObexObjectPush,
    /// Headset Profile
    Headset,
    /// Headset Audio Gateway
    HeadsetAg,
    /// Hands-Free Profile
    Handsfree,
    /// Hands-Free Audio Gateway
    HandsfreeAg,
    /// Audio Source
    A2dpSource,
    /// Audio Sink
    A2dpSink,
    /// Advanced Audio Distribution
    A2dp,
    /// A/V Remote Control
    Avrcp,
    /// A/V Remote Control Target
    AvrcpTarget,
    /// A/V Remote Control Controller
    AvrcpController,
    /// Human Interface Device
    Hid,
    /// Phonebook Access Client
    PbapPce,
    /// Phonebook Access Server
    PbapPse,
    /// Message Access Server
    MapMas,
    /// Message Notification Server
    MapMns,

    /// Any other 16-bit service class
    Other(u16),
}

impl ServiceClass {
    /// Get the 16-bit service class identifier
    pub fn value(&self) -> u16 {
        match self {
            ServiceClass::ObexObjectPush => OBEX_OBJECT_PUSH_UUID16,
            ServiceClass::Headset => HEADSET_UUID16,
            ServiceClass::HeadsetAg => HEADSET_AG_UUID16,
            ServiceClass::Handsfree => HANDSFREE_UUID16,
            ServiceClass::HandsfreeAg => HANDSFREE_AG_UUID16,
            ServiceClass::A2dpSource => A2DP_SOURCE_UUID16,
            ServiceClass::A2dpSink => A2DP_SINK_UUID16,
            ServiceClass::A2dp => ADVANCED_AUDIO_DISTRIBUTION_UUID16,
            ServiceClass::Avrcp => AVRCP_UUID16,
            ServiceClass::AvrcpTarget => AVRCP_TARGET_UUID16,
            ServiceClass::AvrcpController => AVRCP_CONTROLLER_UUID16,
            ServiceClass::Hid => HID_UUID16,
            ServiceClass::PbapPce => PBAP_PCE_UUID16,
            ServiceClass::PbapPse => PBAP_PSE_UUID16,
            ServiceClass::MapMas => MAP_MAS_UUID16,
            ServiceClass::MapMns => MAP_MNS_UUID16,
            ServiceClass::Other(value) => *value,
        }
    }

    /// Create a service class from its 16-bit identifier
    pub fn from_value(value: u16) -> Self {
        match value {
            OBEX_OBJECT_PUSH_UUID16 => ServiceClass::ObexObjectPush,
            HEADSET_UUID16 => ServiceClass::Headset,
            HEADSET_AG_UUID16 => ServiceClass::HeadsetAg,
            HANDSFREE_UUID16 => ServiceClass::Handsfree,
            HANDSFREE_AG_UUID16 => ServiceClass::HandsfreeAg,
            A2DP_SOURCE_UUID16 => ServiceClass::A2dpSource,
            A2DP_SINK_UUID16 => ServiceClass::A2dpSink,
            ADVANCED_AUDIO_DISTRIBUTION_UUID16 => ServiceClass::A2dp,
            AVRCP_UUID16 => ServiceClass::Avrcp,
            AVRCP_TARGET_UUID16 => ServiceClass::AvrcpTarget,
            AVRCP_CONTROLLER_UUID16 => ServiceClass::AvrcpController,
            HID_UUID16 => ServiceClass::Hid,
            PBAP_PCE_UUID16 => ServiceClass::PbapPce,
            PBAP_PSE_UUID16 => ServiceClass::PbapPse,
            MAP_MAS_UUID16 => ServiceClass::MapMas,
            MAP_MNS_UUID16 => ServiceClass::MapMns,
            other => ServiceClass::Other(other),
        }
    }
}

impl From<u16> for ServiceClass {
    fn from(value: u16) -> Self {
        ServiceClass::from_value(value)
    }
}

impl From<ServiceClass> for u16 {
    fn from(value: ServiceClass) -> Self {
        value.value()
    }
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceClass::Other(value) => write!(f, "0x{:04X}", value),
            known => write!(f, "{:?}(0x{:04X})", known, known.value()),
        }
    }
}

/// Whether a session brings profiles up or tears them down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Connect,
    Disconnect,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Connect => write!(f, "connect"),
            Intent::Disconnect => write!(f, "disconnect"),
        }
    }
}

/// What a session targets: one named profile, or whatever the device class implies.
///
/// For disconnect sessions the device class is ignored and every connected
/// profile is targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTarget {
    /// Exactly this profile
    Service(ServiceClass),
    /// Profiles derived from the remote device's class
    DeviceClass(ClassOfDevice),
}

impl ProfileTarget {
    /// Builds a target from the optional parameters of a connect/disconnect request.
    ///
    /// An explicit service class wins over the device class. Returns `None`
    /// when neither is supplied.
    pub fn from_request(service_uuid: Option<u16>, cod: Option<u32>) -> Option<Self> {
        match (service_uuid, cod) {
            (Some(uuid), _) => Some(ProfileTarget::Service(ServiceClass::from_value(uuid))),
            (None, Some(cod)) => Some(ProfileTarget::DeviceClass(ClassOfDevice(cod))),
            (None, None) => None,
        }
    }

    /// The explicitly requested service class, if any
    pub fn service_class(&self) -> Option<ServiceClass> {
        match self {
            ProfileTarget::Service(class) => Some(*class),
            ProfileTarget::DeviceClass(_) => None,
        }
    }
}

/// Configuration owned by the profile registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Upper bound on a single connect/disconnect attempt
    pub connection_timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_millis(DEFAULT_CONNECTION_TIMEOUT_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_class_values() {
        assert_eq!(ServiceClass::Hid.value(), 0x1124);
        assert_eq!(ServiceClass::from_value(0x111E), ServiceClass::Handsfree);
        assert_eq!(ServiceClass::from_value(0x1234), ServiceClass::Other(0x1234));
        assert_eq!(u16::from(ServiceClass::Other(0x1234)), 0x1234);
        assert_eq!(ServiceClass::A2dp.to_string(), "A2dp(0x110D)");
    }

    #[test]
    fn test_target_from_request() {
        assert_eq!(
            ProfileTarget::from_request(Some(0x1124), Some(0x240404)),
            Some(ProfileTarget::Service(ServiceClass::Hid))
        );
        assert_eq!(
            ProfileTarget::from_request(None, Some(0x240404)),
            Some(ProfileTarget::DeviceClass(ClassOfDevice(0x240404)))
        );
        assert_eq!(ProfileTarget::from_request(None, None), None);
        assert_eq!(
            ProfileTarget::DeviceClass(ClassOfDevice(0)).service_class(),
            None
        );
    }
}
