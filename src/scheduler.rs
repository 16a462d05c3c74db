use crate::settings::Settings;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Periodic hydration reminders, driven entirely by the settings record.
/// `refresh` tears down the running reminder task and re-registers it, so
/// it is safe to call after every settings change.
#[derive(Clone, Default)]
pub struct ReminderScheduler {
    task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent startup hook; callers follow it with `refresh`.
    pub async fn setup(&self) {
        let mut task = self.task.lock().await;
        if let Some(handle) = task.take() {
            handle.abort();
        }
        info!("reminder scheduler ready");
    }

    pub async fn refresh(&self, settings: &Settings) {
        let mut task = self.task.lock().await;
        if let Some(handle) = task.take() {
            handle.abort();
        }

        if !settings.notifications_enabled {
            info!("reminders disabled");
            return;
        }

        // a stored record can hold a bad interval; reminders must outlive it
        let interval_hours = match settings.validate() {
            Ok(()) => settings.interval_hours,
            Err(err) => {
                let fallback = Settings::default().interval_hours;
                error!("invalid reminder interval ({err}), using {fallback}h");
                fallback
            }
        };

        let period = Duration::from_secs_f64(interval_hours * 3600.0);
        let name = settings.name.clone();
        info!(interval_hours, "reminders scheduled");

        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // the first tick fires immediately; reminders start one period in
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if name.is_empty() {
                    info!("hora de beber água!");
                } else {
                    info!(%name, "hora de beber água!");
                }
            }
        }));
    }

    pub async fn is_running(&self) -> bool {
        self.task.lock().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refresh_spawns_when_enabled() {
        let scheduler = ReminderScheduler::new();
        scheduler.setup().await;
        scheduler.refresh(&Settings::default()).await;
        assert!(scheduler.is_running().await);
    }

    #[tokio::test]
    async fn refresh_stops_when_disabled() {
        let scheduler = ReminderScheduler::new();
        scheduler.refresh(&Settings::default()).await;

        let mut settings = Settings::default();
        settings.notifications_enabled = false;
        scheduler.refresh(&settings).await;
        assert!(!scheduler.is_running().await);
    }

    #[tokio::test]
    async fn refresh_survives_bad_interval() {
        let scheduler = ReminderScheduler::new();
        for bad in [-1.0, 0.0, f64::NAN, f64::INFINITY, 9.0] {
            let mut settings = Settings::default();
            settings.interval_hours = bad;
            scheduler.refresh(&settings).await;
            assert!(scheduler.is_running().await);
        }
    }

    #[tokio::test]
    async fn setup_twice_is_safe() {
        let scheduler = ReminderScheduler::new();
        scheduler.setup().await;
        scheduler.setup().await;
        assert!(!scheduler.is_running().await);
    }
}
