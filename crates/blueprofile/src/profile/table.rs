//! Class-of-Device to profile policy
//!
//! The table is supplied by the embedder; nothing here decides which
//! profiles a device class implies.

use crate::gap::ClassOfDevice;
use crate::profile::types::ServiceClass;

/// Predicate over a Class of Device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodRule {
    HasAudio,
    HasRendering,
    Peripheral,
    RemoteControl,
    Keyboard,
    PointingDevice,
    /// Every rule must match
    AllOf(Vec<CodRule>),
    /// At least one rule must match
    AnyOf(Vec<CodRule>),
}

impl CodRule {
    pub fn matches(&self, cod: ClassOfDevice) -> bool {
        match self {
            CodRule::HasAudio => cod.has_audio(),
            CodRule::HasRendering => cod.has_rendering(),
            CodRule::Peripheral => cod.is_peripheral(),
            CodRule::RemoteControl => cod.is_remote_control(),
            CodRule::Keyboard => cod.is_keyboard(),
            CodRule::PointingDevice => cod.is_pointing_device(),
            CodRule::AllOf(rules) => rules.iter().all(|rule| rule.matches(cod)),
            CodRule::AnyOf(rules) => rules.iter().any(|rule| rule.matches(cod)),
        }
    }
}

/// Ordered list of `(rule, profile)` entries
#[derive(Debug, Clone, Default)]
pub struct ProfileTable {
    entries: Vec<(CodRule, ServiceClass)>,
}

impl ProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; entries are evaluated in insertion order
    pub fn rule(mut self, rule: CodRule, service_class: ServiceClass) -> Self {
        self.entries.push((rule, service_class));
        self
    }

    pub fn push(&mut self, rule: CodRule, service_class: ServiceClass) {
        self.entries.push((rule, service_class));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Profiles implied by `cod`, in table order, each listed once.
    ///
    /// Invalid device classes imply nothing.
    pub fn profiles_for(&self, cod: ClassOfDevice) -> Vec<ServiceClass> {
        let mut profiles = Vec::new();
        if cod.is_invalid() {
            return profiles;
        }

        for (rule, service_class) in &self.entries {
            if rule.matches(cod) && !profiles.contains(service_class) {
                profiles.push(*service_class);
            }
        }

        profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ProfileTable {
        ProfileTable::new()
            .rule(CodRule::HasAudio, ServiceClass::Handsfree)
            .rule(
                CodRule::AnyOf(vec![CodRule::HasAudio, CodRule::HasRendering]),
                ServiceClass::A2dp,
            )
            .rule(
                CodRule::AllOf(vec![
                    CodRule::Peripheral,
                    CodRule::AnyOf(vec![
                        CodRule::Keyboard,
                        CodRule::PointingDevice,
                        CodRule::RemoteControl,
                    ]),
                ]),
                ServiceClass::Hid,
            )
            .rule(CodRule::HasRendering, ServiceClass::A2dp)
    }

    #[test]
    fn test_profiles_follow_table_order() {
        assert_eq!(
            table().profiles_for(ClassOfDevice(0x240404)),
            vec![ServiceClass::Handsfree, ServiceClass::A2dp]
        );
        assert_eq!(
            table().profiles_for(ClassOfDevice(0x040414)),
            vec![ServiceClass::A2dp]
        );
        assert_eq!(
            table().profiles_for(ClassOfDevice(0x000540)),
            vec![ServiceClass::Hid]
        );
    }

    #[test]
    fn test_non_matching_and_invalid_classes() {
        // Computer: no audio, not a peripheral
        assert!(table().profiles_for(ClassOfDevice(0x000104)).is_empty());
        assert!(table().profiles_for(ClassOfDevice(0x1F00)).is_empty());
        assert!(table().profiles_for(ClassOfDevice(0x0124_0404)).is_empty());
        assert!(ProfileTable::new()
            .profiles_for(ClassOfDevice(0x240404))
            .is_empty());
    }
}
