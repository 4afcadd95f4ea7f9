//! Deferred completion timer for the refresh affordance.
//!
//! Refresh never loads anything (there is no backend); it only holds
//! the UI in a loading state for a fixed delay. The delay runs through
//! `tokio::time` so tests can drive it under a paused clock instead of
//! waiting on real time.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::events::AppEvent;

/// Simulated fetch latency, matching the reference behavior.
pub const REFRESH_DELAY: Duration = Duration::from_millis(800);

/// Spawn the timer that ends a refresh. The handle lets the caller
/// abort a still-pending timer when refresh is re-invoked.
pub fn spawn_refresh_timer(
    generation: u64,
    event_tx: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(REFRESH_DELAY).await;
        let _ = event_tx.send(AppEvent::RefreshComplete { generation });
    })
}
