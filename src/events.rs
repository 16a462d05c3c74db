use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Observers of ledger mutations. The drink handler only mutates and
/// persists; side effects like the drop sound hang off this channel.
#[derive(Debug, Clone)]
pub enum AppEvent {
    CountChanged { date: String, count: u32 },
}

pub fn channel() -> broadcast::Sender<AppEvent> {
    broadcast::channel(16).0
}

/// Stand-in for the original app's audio collaborator: reacts to each
/// count change and "plays" the drop sound. Playback failure must never
/// block the mutation, so this runs fully detached from the handler.
pub fn spawn_audio_listener(mut rx: broadcast::Receiver<AppEvent>) {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(AppEvent::CountChanged { date, count }) => {
                    debug!(%date, count, "playing water drop sound");
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "audio listener fell behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_reach_subscribers() {
        let tx = channel();
        let mut rx = tx.subscribe();
        tx.send(AppEvent::CountChanged {
            date: "01/01/2024".to_string(),
            count: 2,
        })
        .unwrap();
        let AppEvent::CountChanged { date, count } = rx.recv().await.unwrap();
        assert_eq!(date, "01/01/2024");
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn send_without_subscribers_is_harmless() {
        let tx = channel();
        let result = tx.send(AppEvent::CountChanged {
            date: "01/01/2024".to_string(),
            count: 1,
        });
        assert!(result.is_err());
    }
}
