use crate::events::{self, AppEvent};
use crate::models::Ledger;
use crate::scheduler::ReminderScheduler;
use crate::settings::Settings;
use crate::storage::{LedgerStore, SettingsStore};
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};

#[derive(Clone)]
pub struct AppState {
    pub ledger_store: LedgerStore,
    pub settings_store: SettingsStore,
    pub ledger: Arc<Mutex<Ledger>>,
    pub settings: Arc<Mutex<Settings>>,
    pub scheduler: ReminderScheduler,
    pub events: broadcast::Sender<AppEvent>,
}

impl AppState {
    pub fn new(
        ledger_store: LedgerStore,
        settings_store: SettingsStore,
        ledger: Ledger,
        settings: Settings,
    ) -> Self {
        Self {
            ledger_store,
            settings_store,
            ledger: Arc::new(Mutex::new(ledger)),
            settings: Arc::new(Mutex::new(settings)),
            scheduler: ReminderScheduler::new(),
            events: events::channel(),
        }
    }
}
