//! Profile connection controller implementation
//!
//! A `ProfileController` runs one session: it builds the ordered list of
//! profiles for a device, attempts them one at a time under a watchdog, and
//! reports one aggregated result.
//!
//! Sessions are single-threaded. Profile managers may resolve their
//! completion handles from any thread; the results are queued and applied
//! when the owner calls [`ProfileController::poll`] or
//! [`ProfileController::process_events`].

use crate::controller::watchdog::{DeadlineWatchdog, Watchdog};
use crate::error::SessionError;
use crate::gap::BdAddr;
use crate::profile::manager::{AttemptCompletion, CompletionHandle, ProfileManager};
use crate::profile::registry::ProfileRegistry;
use crate::profile::types::{Intent, ProfileTarget, ServiceClass};
use log::{debug, info, warn};
use std::fmt;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Receives the session's single result
pub type CompletionSink = Box<dyn FnOnce(Result<(), SessionError>) + Send + 'static>;

/// Invoked once, right after the completion sink
pub type PostCompletionCallback = Box<dyn FnOnce() + Send + 'static>;

/// Observable session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, `start_session` not called yet
    Created,
    /// One profile attempt is in flight
    Attempting,
    /// Result reported; terminal
    Done,
}

/// Drives connect/disconnect attempts for one device and one intent
pub struct ProfileController {
    intent: Intent,
    address: BdAddr,
    target: ProfileTarget,
    registry: Arc<ProfileRegistry>,
    timeout: Duration,

    /// Built once by `start_session`, never reordered
    profiles: Vec<Arc<dyn ProfileManager>>,
    /// Effective list length; lowered to `cursor` on truncation
    end: usize,
    /// Index of the next profile to attempt
    cursor: usize,
    /// Any attempt succeeded
    success: bool,
    /// Service availability was lost during the session
    unavailable: bool,
    state: SessionState,

    watchdog: Box<dyn Watchdog>,
    sender: Sender<AttemptCompletion>,
    completions: Receiver<AttemptCompletion>,

    sink: Option<CompletionSink>,
    callback: Option<PostCompletionCallback>,
}

impl ProfileController {
    /// Create a controller using a [`DeadlineWatchdog`]
    pub fn new(
        intent: Intent,
        address: BdAddr,
        target: ProfileTarget,
        registry: Arc<ProfileRegistry>,
        sink: CompletionSink,
        callback: PostCompletionCallback,
    ) -> Self {
        Self::with_watchdog(
            intent,
            address,
            target,
            registry,
            sink,
            callback,
            Box::new(DeadlineWatchdog::new()),
        )
    }

    /// Create a controller with a caller-supplied watchdog
    pub fn with_watchdog(
        intent: Intent,
        address: BdAddr,
        target: ProfileTarget,
        registry: Arc<ProfileRegistry>,
        sink: CompletionSink,
        callback: PostCompletionCallback,
        watchdog: Box<dyn Watchdog>,
    ) -> Self {
        let (sender, completions) = channel();
        let timeout = registry.config().connection_timeout;

        Self {
            intent,
            address,
            target,
            registry,
            timeout,
            profiles: Vec::new(),
            end: 0,
            cursor: 0,
            success: false,
            unavailable: false,
            state: SessionState::Created,
            watchdog,
            sender,
            completions,
            sink: Some(sink),
            callback: Some(callback),
        }
    }

    /// Remote device address
    pub fn address(&self) -> BdAddr {
        self.address
    }

    /// The explicitly requested profile, `None` in device-class mode
    pub fn service_class(&self) -> Option<ServiceClass> {
        self.target.service_class()
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == SessionState::Done
    }

    /// Build the profile list and start the first attempt.
    ///
    /// Must be called once; later calls return `InvalidState`.
    pub fn start_session(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Created {
            warn!("Session for {} already started", self.address);
            return Err(SessionError::InvalidState);
        }

        info!(
            "Starting {} session for {} ({:?})",
            self.intent, self.address, self.target
        );

        if !self.registry.is_available() {
            warn!("Bluetooth service unavailable, ending session");
            self.unavailable = true;
            self.end_session();
            return Ok(());
        }

        self.profiles = self.setup_profiles();
        self.end = self.profiles.len();

        if self.profiles.is_empty() {
            warn!("No profile was selected for {}", self.address);
            self.end_session();
            return Ok(());
        }

        self.state = SessionState::Attempting;
        self.next();
        Ok(())
    }

    /// Apply queued completions and check the watchdog without blocking
    pub fn poll(&mut self) -> SessionState {
        while self.state == SessionState::Attempting {
            match self.completions.try_recv() {
                Ok(completion) => self.notify_completion(completion),
                Err(_) => break,
            }
        }

        if self.state == SessionState::Attempting && self.watchdog.has_expired() {
            self.give_up_and_continue();
        }

        self.state
    }

    /// Block until the session is done or `timeout` elapses
    pub fn process_events(&mut self, timeout: Option<Duration>) -> SessionState {
        let start_time = Instant::now();

        loop {
            if self.poll() != SessionState::Attempting {
                break;
            }

            let remaining_timeout = timeout.map(|t| t.saturating_sub(start_time.elapsed()));
            if remaining_timeout == Some(Duration::ZERO) {
                break;
            }

            let wait = match (remaining_timeout, self.watchdog.remaining()) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };

            let received = match wait {
                Some(wait) => self.completions.recv_timeout(wait).ok(),
                None => self.completions.recv().ok(),
            };

            if let Some(completion) = received {
                self.notify_completion(completion);
            }
        }

        self.state
    }

    fn setup_profiles(&self) -> Vec<Arc<dyn ProfileManager>> {
        match (self.target, self.intent) {
            // No pre-check of the current connection state
            (ProfileTarget::Service(service_class), _) => {
                let profile = self.registry.find(service_class);
                if profile.is_none() {
                    warn!("No manager registered for {}", service_class);
                }
                profile.into_iter().collect()
            }
            (ProfileTarget::DeviceClass(_), Intent::Disconnect) => {
                self.registry.connected_profiles(&self.address)
            }
            (ProfileTarget::DeviceClass(cod), Intent::Connect) => {
                if cod.is_invalid() {
                    warn!("Invalid class of device {} for {}", cod, self.address);
                    return Vec::new();
                }
                self.registry.profiles_for_device_class(&self.address, cod)
            }
        }
    }

    /// Start the attempt at the cursor, or end the session when none remain
    fn next(&mut self) {
        if !self.registry.is_available() {
            warn!("Bluetooth service became unavailable");
            self.unavailable = true;
            self.end = self.cursor;
        }

        if self.cursor >= self.end {
            self.end_session();
            return;
        }

        let profile = Arc::clone(&self.profiles[self.cursor]);
        let attempt = self.cursor;
        self.cursor += 1;

        self.watchdog.arm(self.timeout);

        let done = CompletionHandle::new(attempt, profile.service_class(), self.sender.clone());
        debug!(
            "Attempt {}/{}: {} {} on {}",
            attempt + 1,
            self.end,
            self.intent,
            profile.service_class(),
            self.address
        );

        match self.intent {
            Intent::Connect => profile.connect(self.address, done),
            Intent::Disconnect => profile.disconnect(self.address, done),
        }
    }

    fn notify_completion(&mut self, completion: AttemptCompletion) {
        if self.state != SessionState::Attempting || completion.attempt + 1 != self.cursor {
            debug!(
                "Ignoring stale completion for attempt {} on {}",
                completion.attempt, self.address
            );
            return;
        }

        self.watchdog.disarm();

        let service_class = self.profiles[completion.attempt].service_class();
        match completion.outcome {
            Ok(()) => {
                debug!("{} {} succeeded", service_class, self.intent);
                self.success = true;
            }
            Err(reason) => {
                warn!("{} {} failed: {}", service_class, self.intent, reason);
            }
        }

        self.next();
    }

    /// Watchdog expiry: abandon the current attempt and drop the rest
    fn give_up_and_continue(&mut self) {
        self.watchdog.disarm();

        let attempt = self.cursor - 1;
        let profile = &self.profiles[attempt];
        warn!(
            "Timeout waiting for {} {} on {}, skipping {} remaining profile(s)",
            profile.service_class(),
            self.intent,
            self.address,
            self.end - self.cursor
        );
        profile.reset(&self.address);

        self.end = self.cursor;
        self.next();
    }

    fn end_session(&mut self) {
        let result = if self.success {
            Ok(())
        } else if self.unavailable {
            Err(SessionError::ServiceUnavailable)
        } else if self.profiles.is_empty() {
            Err(SessionError::NoApplicableProfile)
        } else {
            match self.intent {
                Intent::Connect => Err(SessionError::ConnectionFailed),
                Intent::Disconnect => Err(SessionError::DisconnectionFailed),
            }
        };

        self.report(result);
    }

    fn report(&mut self, result: Result<(), SessionError>) {
        if self.state == SessionState::Done {
            return;
        }
        self.state = SessionState::Done;
        self.watchdog.disarm();

        match &result {
            Ok(()) => info!("{} session for {} succeeded", self.intent, self.address),
            Err(e) => info!("{} session for {} failed: {}", self.intent, self.address, e),
        }

        if let Some(sink) = self.sink.take() {
            sink(result);
        }
        if let Some(callback) = self.callback.take() {
            callback();
        }
    }
}

impl Drop for ProfileController {
    fn drop(&mut self) {
        if self.state != SessionState::Done {
            warn!("{} session for {} dropped before completion", self.intent, self.address);
            self.report(Err(SessionError::Aborted));
        }
    }
}

impl fmt::Debug for ProfileController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileController")
            .field("intent", &self.intent)
            .field("address", &self.address)
            .field("target", &self.target)
            .field("cursor", &self.cursor)
            .field("end", &self.end)
            .field("success", &self.success)
            .field("state", &self.state)
            .finish()
    }
}
