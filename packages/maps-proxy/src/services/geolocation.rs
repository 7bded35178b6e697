use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::models::{Position, PositionError, PositionOptions};

/// Identifier the platform assigns to a running watch
pub type WatchId = u32;

/// Channel a platform pushes watch readings into
pub type PositionSender = mpsc::UnboundedSender<Result<Position, PositionError>>;

/// Host location subsystem (browser geolocation, GPS daemon, ...)
pub trait GeolocationPlatform: Send + Sync + 'static {
    /// Whether the host exposes a location capability at all
    fn is_supported(&self) -> bool;

    /// Resolve a single reading
    fn current_position(
        &self,
        options: PositionOptions,
    ) -> impl Future<Output = Result<Position, PositionError>> + Send;

    /// Start pushing readings into `sender` until [`clear_watch`] is called.
    ///
    /// [`clear_watch`]: GeolocationPlatform::clear_watch
    fn watch_position(&self, options: PositionOptions, sender: PositionSender) -> WatchId;

    fn clear_watch(&self, id: WatchId);
}

/// Platform for hosts with no location subsystem
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPlatform;

impl GeolocationPlatform for UnsupportedPlatform {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(&self, _options: PositionOptions) -> Result<Position, PositionError> {
        Err(PositionError::PositionUnavailable)
    }

    fn watch_position(&self, _options: PositionOptions, _sender: PositionSender) -> WatchId {
        0
    }

    fn clear_watch(&self, _id: WatchId) {}
}

/// Sink for transient user-facing notifications (toasts)
pub trait Notifier: Send + Sync + 'static {
    fn success(&self, title: &str, description: &str);
    fn error(&self, title: &str, description: &str);
}

impl<T: Notifier> Notifier for Arc<T> {
    fn success(&self, title: &str, description: &str) {
        (**self).success(title, description)
    }

    fn error(&self, title: &str, description: &str) {
        (**self).error(title, description)
    }
}

/// Notifier that writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, title: &str, description: &str) {
        tracing::info!("🔔 {}: {}", title, description);
    }

    fn error(&self, title: &str, description: &str) {
        tracing::warn!("🔔 {}: {}", title, description);
    }
}
