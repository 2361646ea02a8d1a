//! Application context - dependency injection container

use std::sync::Arc;

use asnalo_core::{Action, AppState, SalesAssistant, Store, TextGenerator};
use asnalo_domain::{Config, Result};
use asnalo_infra::fixtures::{seed_clients, seed_deals};
use asnalo_infra::GeminiClient;
use chrono::{Local, NaiveDate};
use parking_lot::RwLock;
use tracing::info;

/// Application context holding the record store and services
///
/// The store sits behind a lock so commands can share one context across
/// tasks; assistant calls never hold the lock across an await.
pub struct AppContext {
    pub config: Config,
    store: RwLock<Store>,
    assistant: SalesAssistant,
    today: NaiveDate,
}

impl AppContext {
    /// Load configuration and build the context for the local date
    pub fn new() -> Result<Self> {
        let config = asnalo_infra::config::load()?;
        Self::with_config(config, Local::now().date_naive())
    }

    /// Build the context with the Gemini adapter described by `config`
    pub fn with_config(config: Config, today: NaiveDate) -> Result<Self> {
        let client = GeminiClient::from_config(&config.gateway)?;
        if !client.has_credential() {
            info!("no generation credential configured, assistant will use fallbacks");
        }
        Ok(Self::with_generator(config, Arc::new(client), today))
    }

    /// Build the context around any text generator, seeded with fixture records
    pub fn with_generator(
        config: Config,
        generator: Arc<dyn TextGenerator>,
        today: NaiveDate,
    ) -> Self {
        let state = AppState::new(seed_deals(today), seed_clients());
        info!(
            deals = state.deals.len(),
            clients = state.clients.len(),
            today = %today,
            "application context initialised"
        );

        Self {
            config,
            store: RwLock::new(Store::new(state)),
            assistant: SalesAssistant::new(generator),
            today,
        }
    }

    /// Date the session treats as "today"
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn assistant(&self) -> &SalesAssistant {
        &self.assistant
    }

    /// Run `f` against the store under a read lock
    pub fn read<T>(&self, f: impl FnOnce(&Store) -> T) -> T {
        let store = self.store.read();
        f(&*store)
    }

    /// Apply one action. Returns whether anything changed.
    pub fn dispatch(&self, action: Action) -> bool {
        self.store.write().dispatch(action)
    }

    /// Copy of the full application state
    pub fn snapshot(&self) -> AppState {
        self.read(|store| store.state().clone())
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}
