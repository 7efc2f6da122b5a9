// ── Controller facade ──
//
// Composition root for one contacts-API connection: builds the transport
// and client from configuration, wires service + store + effect engine,
// and owns the engine task's lifecycle.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use cartera_api::{ContactsClient, TransportConfig};

use crate::action::Action;
use crate::config::SyncConfig;
use crate::device::{DeviceContactsProvider, NativeContacts};
use crate::effects::EffectsEngine;
use crate::error::CoreError;
use crate::service::ContactsService;
use crate::store::ContactStore;

/// The main entry point for consumers.
///
/// Cheaply cloneable. [`start()`](Self::start) spawns the effect engine;
/// until then, dispatched Begin intents queue up on the action channel.
#[derive(Clone)]
pub struct ContactsController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    config: SyncConfig,
    store: ContactStore,
    service: Arc<ContactsService>,
    cancel: CancellationToken,
    actions_rx: Mutex<Option<mpsc::UnboundedReceiver<Action>>>,
    engine_task: Mutex<Option<JoinHandle<()>>>,
}

impl ContactsController {
    /// Create a controller with no device address-book plugin. Native
    /// queries will fail with the plugin-absence error.
    pub fn new(config: SyncConfig) -> Result<Self, CoreError> {
        Self::build(config, NativeContacts::unavailable())
    }

    /// Create a controller with a platform contact-picker behind it.
    pub fn with_device_provider(
        config: SyncConfig,
        provider: Arc<dyn DeviceContactsProvider>,
    ) -> Result<Self, CoreError> {
        Self::build(config, NativeContacts::new(provider))
    }

    fn build(config: SyncConfig, device: NativeContacts) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
            ..TransportConfig::default()
        };
        let client = ContactsClient::new(config.api_url.clone(), config.instance.clone(), &transport)?;

        let (store, actions_rx) = ContactStore::new();
        let service = Arc::new(ContactsService::new(client, device, store.subscribe()));

        Ok(Self {
            inner: Arc::new(ControllerInner {
                config,
                store,
                service,
                cancel: CancellationToken::new(),
                actions_rx: Mutex::new(Some(actions_rx)),
                engine_task: Mutex::new(None),
            }),
        })
    }

    /// Spawn the effect engine. Must be called from within a tokio
    /// runtime; calling it twice is a no-op.
    pub fn start(&self) {
        let Some(actions_rx) = self
            .inner
            .actions_rx
            .lock()
            .expect("actions_rx lock poisoned")
            .take()
        else {
            return;
        };

        let engine = EffectsEngine::new(
            self.inner.store.clone(),
            Arc::clone(&self.inner.service),
            self.inner.cancel.child_token(),
        );

        let handle = tokio::spawn(engine.run(actions_rx));
        *self
            .inner
            .engine_task
            .lock()
            .expect("engine_task lock poisoned") = Some(handle);

        debug!("contacts controller started");
    }

    /// Cancel in-flight work and join the engine task.
    pub async fn shutdown(&self) {
        self.inner.cancel.cancel();

        let handle = self
            .inner
            .engine_task
            .lock()
            .expect("engine_task lock poisoned")
            .take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }

        debug!("contacts controller stopped");
    }

    /// Access the state store (clone freely; all clones share state).
    pub fn store(&self) -> &ContactStore {
        &self.inner.store
    }

    /// Direct access to the domain service, for callers that want a
    /// one-shot result instead of a state transition (e.g. `pick_one`).
    pub fn service(&self) -> &Arc<ContactsService> {
        &self.inner.service
    }

    /// The controller configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.inner.config
    }
}
