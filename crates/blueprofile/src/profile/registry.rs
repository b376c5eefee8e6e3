//! Profile registry
//!
//! Holds the registered profile managers in registration order, the
//! Class-of-Device policy table and the session configuration.

use crate::error::RegistryError;
use crate::gap::{BdAddr, ClassOfDevice};
use crate::profile::manager::ProfileManager;
use crate::profile::table::ProfileTable;
use crate::profile::types::{RegistryConfig, ServiceClass};
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Registered profile managers plus the policy used to select among them
pub struct ProfileRegistry {
    /// Managers in registration order
    managers: RwLock<Vec<Arc<dyn ProfileManager>>>,

    /// Class-of-Device policy
    table: RwLock<ProfileTable>,

    /// Session configuration
    config: RegistryConfig,

    /// Adapter enabled and not toggling
    available: AtomicBool,
}

impl ProfileRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            managers: RwLock::new(Vec::new()),
            table: RwLock::new(ProfileTable::new()),
            config,
            available: AtomicBool::new(true),
        }
    }

    pub fn with_table(config: RegistryConfig, table: ProfileTable) -> Self {
        let registry = Self::new(config);
        registry.set_table(table);
        registry
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Replace the Class-of-Device policy table
    pub fn set_table(&self, table: ProfileTable) {
        *self.table.write().unwrap_or_else(PoisonError::into_inner) = table;
    }

    /// Register a profile manager. One manager per service class.
    pub fn register(&self, manager: Arc<dyn ProfileManager>) -> Result<(), RegistryError> {
        let service_class = manager.service_class();
        let mut managers = self.managers.write().unwrap_or_else(PoisonError::into_inner);

        if managers.iter().any(|m| m.service_class() == service_class) {
            return Err(RegistryError::DuplicateProfile(service_class));
        }

        info!("Registered profile manager {}", service_class);
        managers.push(manager);
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    pub fn set_available(&self, available: bool) {
        debug!("Profile service available: {}", available);
        self.available.store(available, Ordering::SeqCst);
    }

    /// Look up the manager serving `service_class`
    pub fn find(&self, service_class: ServiceClass) -> Option<Arc<dyn ProfileManager>> {
        self.managers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|m| m.service_class() == service_class)
            .cloned()
    }

    /// Every manager connected to `address`, in registration order
    pub fn connected_profiles(&self, address: &BdAddr) -> Vec<Arc<dyn ProfileManager>> {
        self.managers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|m| m.is_connected(address))
            .cloned()
            .collect()
    }

    /// Managers the policy table selects for `cod`, skipping profiles
    /// already connected to `address`.
    pub fn profiles_for_device_class(
        &self,
        address: &BdAddr,
        cod: ClassOfDevice,
    ) -> Vec<Arc<dyn ProfileManager>> {
        let wanted = self
            .table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .profiles_for(cod);

        let mut profiles = Vec::new();
        for service_class in wanted {
            match self.find(service_class) {
                Some(manager) if manager.is_connected(address) => {
                    debug!("{} already connected to {}", service_class, address);
                }
                Some(manager) => profiles.push(manager),
                None => debug!("No manager registered for {}", service_class),
            }
        }

        profiles
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::manager::CompletionHandle;
    use crate::profile::table::CodRule;

    struct StaticProfile {
        service_class: ServiceClass,
        connected: AtomicBool,
    }

    impl StaticProfile {
        fn new(service_class: ServiceClass, connected: bool) -> Arc<Self> {
            Arc::new(Self {
                service_class,
                connected: AtomicBool::new(connected),
            })
        }
    }

    impl ProfileManager for StaticProfile {
        fn service_class(&self) -> ServiceClass {
            self.service_class
        }

        fn connect(&self, _address: BdAddr, done: CompletionHandle) {
            done.succeed();
        }

        fn disconnect(&self, _address: BdAddr, done: CompletionHandle) {
            done.succeed();
        }

        fn is_connected(&self, _address: &BdAddr) -> bool {
            self.connected.load(Ordering::SeqCst)
        }
    }

    fn names(managers: &[Arc<dyn ProfileManager>]) -> Vec<ServiceClass> {
        managers.iter().map(|m| m.service_class()).collect()
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let registry = ProfileRegistry::default();
        registry
            .register(StaticProfile::new(ServiceClass::Hid, false))
            .unwrap();

        assert_eq!(
            registry
                .register(StaticProfile::new(ServiceClass::Hid, true))
                .unwrap_err(),
            RegistryError::DuplicateProfile(ServiceClass::Hid)
        );
        assert!(registry.find(ServiceClass::Hid).is_some());
        assert!(registry.find(ServiceClass::A2dp).is_none());
    }

    #[test]
    fn test_connected_profiles_keep_registration_order() {
        let registry = ProfileRegistry::default();
        registry.register(StaticProfile::new(ServiceClass::Hid, true)).unwrap();
        registry.register(StaticProfile::new(ServiceClass::ObexObjectPush, false)).unwrap();
        registry.register(StaticProfile::new(ServiceClass::A2dp, true)).unwrap();
        registry.register(StaticProfile::new(ServiceClass::Handsfree, true)).unwrap();

        assert_eq!(
            names(&registry.connected_profiles(&BdAddr::default())),
            vec![ServiceClass::Hid, ServiceClass::A2dp, ServiceClass::Handsfree]
        );
    }

    #[test]
    fn test_device_class_selection_skips_connected_and_unregistered() {
        let table = ProfileTable::new()
            .rule(CodRule::HasAudio, ServiceClass::Handsfree)
            .rule(CodRule::HasAudio, ServiceClass::A2dp)
            .rule(CodRule::HasRendering, ServiceClass::Avrcp);
        let registry = ProfileRegistry::with_table(RegistryConfig::default(), table);
        registry.register(StaticProfile::new(ServiceClass::A2dp, false)).unwrap();
        registry.register(StaticProfile::new(ServiceClass::Handsfree, true)).unwrap();

        assert_eq!(
            names(&registry.profiles_for_device_class(&BdAddr::default(), ClassOfDevice(0x240404))),
            vec![ServiceClass::A2dp]
        );
    }

    #[test]
    fn test_availability_flag() {
        let registry = ProfileRegistry::default();
        assert!(registry.is_available());
        registry.set_available(false);
        assert!(!registry.is_available());
    }
}
