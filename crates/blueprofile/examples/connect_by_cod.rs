use blueprofile::{
    BdAddr, ClassOfDevice, CodRule, CompletionHandle, Intent, ProfileController, ProfileManager,
    ProfileRegistry, ProfileTable, ProfileTarget, RegistryConfig, ServiceClass, SessionError,
    SessionState,
};
use std::collections::HashSet;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Profile manager that answers from a worker thread after a delay
struct SimulatedProfile {
    service_class: ServiceClass,
    latency: Duration,
    accept: bool,
    connected: Arc<Mutex<HashSet<BdAddr>>>,
}

impl SimulatedProfile {
    fn spawn_reply(&self, address: BdAddr, connect: bool, done: CompletionHandle) {
        let latency = self.latency;
        let accept = self.accept;
        let connected = Arc::clone(&self.connected);

        thread::spawn(move || {
            thread::sleep(latency);
            if !accept {
                done.fail("remote device rejected the request");
                return;
            }
            let mut connected = connected.lock().unwrap();
            if connect {
                connected.insert(address);
            } else {
                connected.remove(&address);
            }
            done.succeed();
        });
    }
}

impl ProfileManager for SimulatedProfile {
    fn service_class(&self) -> ServiceClass {
        self.service_class
    }

    fn connect(&self, address: BdAddr, done: CompletionHandle) {
        println!("  {} connecting to {}", self.service_class, address);
        self.spawn_reply(address, true, done);
    }

    fn disconnect(&self, address: BdAddr, done: CompletionHandle) {
        println!("  {} disconnecting from {}", self.service_class, address);
        self.spawn_reply(address, false, done);
    }

    fn is_connected(&self, address: &BdAddr) -> bool {
        self.connected.lock().unwrap().contains(address)
    }
}

fn run(controller: &mut ProfileController) -> Result<(), Box<dyn Error>> {
    controller.start_session()?;
    let state = controller.process_events(Some(Duration::from_secs(10)));
    if state != SessionState::Done {
        return Err("session did not finish in time".into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let table = ProfileTable::new()
        .rule(CodRule::HasAudio, ServiceClass::Handsfree)
        .rule(
            CodRule::AnyOf(vec![CodRule::HasAudio, CodRule::HasRendering]),
            ServiceClass::A2dp,
        )
        .rule(
            CodRule::AllOf(vec![
                CodRule::Peripheral,
                CodRule::AnyOf(vec![CodRule::Keyboard, CodRule::PointingDevice]),
            ]),
            ServiceClass::Hid,
        );
    let registry = Arc::new(ProfileRegistry::with_table(
        RegistryConfig {
            connection_timeout: Duration::from_millis(500),
        },
        table,
    ));

    for (service_class, latency_ms, accept) in [
        (ServiceClass::Handsfree, 50, false),
        (ServiceClass::A2dp, 80, true),
        (ServiceClass::Hid, 2_000, true),
    ] {
        registry.register(Arc::new(SimulatedProfile {
            service_class,
            latency: Duration::from_millis(latency_ms),
            accept,
            connected: Arc::new(Mutex::new(HashSet::new())),
        }))?;
    }

    let address: BdAddr = "00:11:22:33:44:55".parse()?;
    let cod = ClassOfDevice(0x240404);
    println!("Connecting {} (CoD {})", address, cod);

    let mut controller = ProfileController::new(
        Intent::Connect,
        address,
        ProfileTarget::DeviceClass(cod),
        Arc::clone(&registry),
        Box::new(|result: Result<(), SessionError>| println!("Connect result: {:?}", result)),
        Box::new(|| println!("Connect session finished")),
    );
    run(&mut controller)?;

    // The HID manager answers after the watchdog has given up
    let keyboard: BdAddr = "00:11:22:33:44:66".parse()?;
    let mut controller = ProfileController::new(
        Intent::Connect,
        keyboard,
        ProfileTarget::DeviceClass(ClassOfDevice(0x000540)),
        Arc::clone(&registry),
        Box::new(|result: Result<(), SessionError>| println!("Keyboard result: {:?}", result)),
        Box::new(|| {}),
    );
    run(&mut controller)?;

    println!("Disconnecting {}", address);
    let mut controller = ProfileController::new(
        Intent::Disconnect,
        address,
        ProfileTarget::DeviceClass(ClassOfDevice::default()),
        Arc::clone(&registry),
        Box::new(|result: Result<(), SessionError>| println!("Disconnect result: {:?}", result)),
        Box::new(|| println!("Disconnect session finished")),
    );
    run(&mut controller)?;

    Ok(())
}
