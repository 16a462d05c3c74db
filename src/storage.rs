use crate::errors::AppError;
use crate::models::Ledger;
use crate::settings::Settings;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

const LEDGER_FILE: &str = "waterHistory.json";
const SETTINGS_FILE: &str = "notificationSettings.json";

pub fn resolve_data_dir() -> Result<PathBuf, std::io::Error> {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    Ok(PathBuf::from("data"))
}

/// Owns the `waterHistory` blob. Reads degrade to an empty ledger so the
/// app stays usable when the file is missing or corrupt; writes rewrite
/// the whole blob after every mutation.
#[derive(Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(LEDGER_FILE),
        }
    }

    pub async fn load(&self) -> Ledger {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(ledger) => ledger,
                Err(err) => {
                    error!("failed to parse water history: {err}");
                    Ledger::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ledger::default(),
            Err(err) => {
                error!("failed to read water history: {err}");
                Ledger::default()
            }
        }
    }

    pub async fn save(&self, ledger: &Ledger) -> Result<(), AppError> {
        let payload = serde_json::to_vec_pretty(ledger).map_err(AppError::internal)?;
        fs::write(&self.path, payload).await.map_err(AppError::internal)?;
        Ok(())
    }
}

/// Owns the `notificationSettings` blob. An absent or unreadable record is
/// `None`; the caller falls back to `Settings::default()`.
#[derive(Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SETTINGS_FILE),
        }
    }

    pub async fn load(&self) -> Option<Settings> {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<Settings>(&bytes) {
                Ok(settings) => {
                    if let Err(err) = settings.validate() {
                        error!("stored settings invalid ({err}), using defaults");
                        return None;
                    }
                    Some(settings)
                }
                Err(err) => {
                    error!("failed to parse settings: {err}");
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read settings: {err}");
                None
            }
        }
    }

    pub async fn save(&self, settings: &Settings) -> Result<(), AppError> {
        let payload = serde_json::to_vec_pretty(settings).map_err(AppError::internal)?;
        fs::write(&self.path, payload).await.map_err(AppError::internal)?;
        Ok(())
    }
}
