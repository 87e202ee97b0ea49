//! Shared application state for axum handlers.

use std::sync::Arc;

use devicehub_app::ports::DeviceRepository;
use devicehub_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Device CRUD service.
    pub device_service: Arc<DeviceService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<R> AppState<R>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(device_service: DeviceService<R>) -> Self {
        Self::from_arc(Arc::new(device_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also needed outside the HTTP layer.
    pub fn from_arc(device_service: Arc<DeviceService<R>>) -> Self {
        Self { device_service }
    }
}
