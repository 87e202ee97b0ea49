//! Storage port — repository trait for device persistence.

use std::future::Future;

use devicehub_domain::device::Device;
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::DeviceId;

/// Authoritative storage for [`Device`]s, keyed by [`DeviceId`].
///
/// Implementations must serialize every operation against every other one:
/// no call may observe a partially applied mutation, and `list` /
/// `search_by_brand` return a consistent snapshot taken under the same
/// exclusion as writes.
pub trait DeviceRepository {
    /// Insert `device`, overwriting any record stored under the same id.
    fn create(&self, device: Device) -> impl Future<Output = ()> + Send;

    /// Get a device by its identifier.
    ///
    /// Fails with [`DeviceHubError::NotFound`] when no such device exists.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Device, DeviceHubError>> + Send;

    /// Get every stored device, in no particular order.
    fn list(&self) -> impl Future<Output = Vec<Device>> + Send;

    /// Replace the record stored under `id` with `device`.
    ///
    /// Fails with [`DeviceHubError::NotFound`] when `id` is absent; never inserts.
    fn update(
        &self,
        id: DeviceId,
        device: Device,
    ) -> impl Future<Output = Result<(), DeviceHubError>> + Send;

    /// Remove the record stored under `id`.
    ///
    /// Fails with [`DeviceHubError::NotFound`] when `id` is absent.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DeviceHubError>> + Send;

    /// Get every device whose `brand` equals `brand` exactly (case-sensitive).
    fn search_by_brand(&self, brand: &str) -> impl Future<Output = Vec<Device>> + Send;
}
