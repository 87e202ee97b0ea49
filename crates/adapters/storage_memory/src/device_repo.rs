//! In-memory implementation of [`DeviceRepository`].

use std::collections::HashMap;

use tokio::sync::Mutex;

use devicehub_app::ports::DeviceRepository;
use devicehub_domain::device::Device;
use devicehub_domain::error::{DeviceHubError, NotFoundError};
use devicehub_domain::id::DeviceId;

/// Device repository backed by a `HashMap` behind one coarse-grained lock.
///
/// Every operation holds the lock for its whole duration, which totally orders
/// writes (last writer wins) and makes `list` / `search_by_brand` consistent
/// snapshots. Snapshots are copied out while locked, then the lock is released
/// before returning.
#[derive(Debug, Default)]
pub struct InMemoryDeviceRepository {
    devices: Mutex<HashMap<DeviceId, Device>>,
}

impl InMemoryDeviceRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceRepository for InMemoryDeviceRepository {
    async fn create(&self, device: Device) {
        let mut devices = self.devices.lock().await;
        tracing::trace!(device_id = %device.id, "storing device");
        devices.insert(device.id, device);
    }

    async fn get_by_id(&self, id: DeviceId) -> Result<Device, DeviceHubError> {
        let devices = self.devices.lock().await;
        devices
            .get(&id)
            .cloned()
            .ok_or_else(|| NotFoundError::new(id).into())
    }

    async fn list(&self) -> Vec<Device> {
        let devices = self.devices.lock().await;
        devices.values().cloned().collect()
    }

    async fn update(&self, id: DeviceId, device: Device) -> Result<(), DeviceHubError> {
        let mut devices = self.devices.lock().await;
        let Some(slot) = devices.get_mut(&id) else {
            return Err(NotFoundError::new(id).into());
        };
        tracing::trace!(device_id = %id, "replacing device");
        *slot = device;
        Ok(())
    }

    async fn delete(&self, id: DeviceId) -> Result<(), DeviceHubError> {
        let mut devices = self.devices.lock().await;
        match devices.remove(&id) {
            Some(_) => {
                tracing::trace!(device_id = %id, "removed device");
                Ok(())
            }
            None => Err(NotFoundError::new(id).into()),
        }
    }

    async fn search_by_brand(&self, brand: &str) -> Vec<Device> {
        let devices = self.devices.lock().await;
        devices
            .values()
            .filter(|device| device.brand == brand)
            .cloned()
            .collect()
    }
}
