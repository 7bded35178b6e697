use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::{sync::mpsc, sync::RwLock, task::JoinHandle};
use tracing::{debug, info, warn};

use super::geolocation::{GeolocationPlatform, Notifier, TracingNotifier, WatchId};
use crate::models::{Position, PositionOptions};

pub const NOT_SUPPORTED_MESSAGE: &str = "المتصفح لا يدعم خدمة تحديد الموقع";
pub const ERROR_TITLE: &str = "خطأ في تحديد الموقع";
pub const SUCCESS_TITLE: &str = "تم تحديد الموقع";
pub const SUCCESS_DESCRIPTION: &str = "تم الحصول على موقعك الحالي بنجاح";

/// Snapshot of what the provider last observed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationState {
    pub position: Option<Position>,
    pub error: Option<String>,
    pub is_loading: bool,
}

/// One-shot and continuous location lookups on top of a platform
pub struct LocationProvider<P, N = TracingNotifier> {
    platform: Arc<P>,
    notifier: N,
    state: RwLock<LocationState>,
}

impl<P: GeolocationPlatform> LocationProvider<P> {
    /// Provider that reports notifications through the log
    pub fn with_platform(platform: Arc<P>) -> Self {
        Self::new(platform, TracingNotifier)
    }
}

impl<P: GeolocationPlatform, N: Notifier> LocationProvider<P, N> {
    pub fn new(platform: Arc<P>, notifier: N) -> Self {
        Self {
            platform,
            notifier,
            state: RwLock::new(LocationState::default()),
        }
    }

    pub async fn state(&self) -> LocationState {
        self.state.read().await.clone()
    }

    /// Request a single high-accuracy reading.
    ///
    /// Returns `None` when the platform lacks support or the request fails;
    /// the reason is recorded in [`LocationState::error`] and surfaced
    /// through the notifier.
    pub async fn get_current_location(&self) -> Option<Position> {
        if !self.platform.is_supported() {
            self.state.write().await.error = Some(NOT_SUPPORTED_MESSAGE.to_string());
            self.notifier.error(ERROR_TITLE, NOT_SUPPORTED_MESSAGE);
            return None;
        }

        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.error = None;
        }

        let result = self
            .platform
            .current_position(PositionOptions::one_shot())
            .await;

        let mut state = self.state.write().await;
        state.is_loading = false;

        match result {
            Ok(position) => {
                state.position = Some(position.clone());
                drop(state);

                info!(
                    "📍 Location acquired ({}, {}) ±{:.0}m",
                    position.latitude, position.longitude, position.accuracy
                );
                self.notifier.success(SUCCESS_TITLE, SUCCESS_DESCRIPTION);
                Some(position)
            }
            Err(e) => {
                let message = e.to_string();
                state.error = Some(message.clone());
                drop(state);

                warn!("Location request failed: {:?}", e);
                self.notifier.error(ERROR_TITLE, &message);
                None
            }
        }
    }

    /// Start continuous tracking, calling `on_update` for every reading.
    ///
    /// Failed and out-of-range readings are logged and skipped. Must be
    /// called from within a tokio runtime.
    pub fn watch_location<F>(&self, mut on_update: F) -> WatchHandle
    where
        F: FnMut(Position) + Send + 'static,
    {
        if !self.platform.is_supported() {
            self.notifier.error(ERROR_TITLE, NOT_SUPPORTED_MESSAGE);
            return WatchHandle::noop();
        }

        let (sender, mut receiver) = mpsc::unbounded_channel();
        let id = self
            .platform
            .watch_position(PositionOptions::watch(), sender);
        debug!("Started location watch {}", id);

        let cancelled = Arc::new(AtomicBool::new(false));
        let task_cancelled = cancelled.clone();

        let task = tokio::spawn(async move {
            while let Some(reading) = receiver.recv().await {
                if task_cancelled.load(Ordering::SeqCst) {
                    break;
                }
                match reading {
                    Ok(position) if position.is_valid() => on_update(position),
                    Ok(position) => warn!(
                        "Location watch {} skipped out-of-range reading ({}, {})",
                        id, position.latitude, position.longitude
                    ),
                    Err(e) => warn!("Location watch {} error: {}", id, e),
                }
            }
        });

        let platform = Arc::clone(&self.platform);
        WatchHandle {
            active: Some(ActiveWatch {
                id,
                cancelled,
                task,
                clear: Box::new(move |id| platform.clear_watch(id)),
            }),
        }
    }
}

struct ActiveWatch {
    id: WatchId,
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<()>,
    clear: Box<dyn FnOnce(WatchId) + Send>,
}

/// Cancels a running watch. Dropping the handle leaves the watch running.
pub struct WatchHandle {
    active: Option<ActiveWatch>,
}

impl WatchHandle {
    /// Handle that does nothing when canceled
    pub fn noop() -> Self {
        Self { active: None }
    }

    /// Whether canceling this handle has no effect
    pub fn is_noop(&self) -> bool {
        self.active.is_none()
    }

    /// Stop tracking; no updates are delivered after this returns
    pub fn cancel(mut self) {
        if let Some(watch) = self.active.take() {
            watch.cancelled.store(true, Ordering::SeqCst);
            watch.task.abort();
            (watch.clear)(watch.id);
            debug!("Cancelled location watch {}", watch.id);
        }
    }
}
