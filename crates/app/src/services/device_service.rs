//! Device service — use-cases for managing devices.

use devicehub_domain::device::{CreateDeviceInput, Device};
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::DeviceId;
use devicehub_domain::time;

use crate::ports::DeviceRepository;

/// Application service for device CRUD and search.
///
/// This is the only place a [`Device`]'s identity (`id`, `created_at`) is
/// minted. The service holds no state of its own between calls.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new device with a fresh id and the current time as `created_at`.
    ///
    /// `input` is already validated, so this cannot fail.
    #[tracing::instrument(skip(self, input), fields(device_name = %input.name(), brand = %input.brand()))]
    pub async fn create_device(&self, input: CreateDeviceInput) -> Device {
        let device = Device::new(DeviceId::new(), input, time::now());
        self.repo.create(device.clone()).await;
        tracing::debug!(device_id = %device.id, "device created");
        device
    }

    /// Look up a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, DeviceHubError> {
        self.repo.get_by_id(id).await
    }

    /// List all devices.
    pub async fn list_devices(&self) -> Vec<Device> {
        self.repo.list().await
    }

    /// Replace `name` and `brand` of an existing device, keeping `id` and `created_at`.
    ///
    /// The read and the write are two separate repository calls. A concurrent
    /// delete landing between them makes the write fail with `NotFound` even
    /// though the read succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when no device with `id` exists,
    /// either at read time or at write time.
    #[tracing::instrument(skip(self, input), fields(device_name = %input.name(), brand = %input.brand()))]
    pub async fn update_device(
        &self,
        id: DeviceId,
        input: CreateDeviceInput,
    ) -> Result<Device, DeviceHubError> {
        let mut device = self.repo.get_by_id(id).await?;
        device.apply(input);
        self.repo.update(id, device.clone()).await?;
        Ok(device)
    }

    /// Delete a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), DeviceHubError> {
        self.repo.delete(id).await
    }

    /// Find devices whose brand equals `brand` exactly.
    ///
    /// An empty `brand` is not a wildcard; it only matches devices with an
    /// empty brand, of which there are none.
    #[tracing::instrument(skip(self))]
    pub async fn search_devices_by_brand(&self, brand: &str) -> Vec<Device> {
        self.repo.search_by_brand(brand).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devicehub_domain::error::NotFoundError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryDeviceRepo {
        store: Mutex<HashMap<DeviceId, Device>>,
    }

    impl DeviceRepository for InMemoryDeviceRepo {
        fn create(&self, device: Device) -> impl Future<Output = ()> + Send {
            self.store.lock().unwrap().insert(device.id, device);
            async {}
        }

        fn get_by_id(
            &self,
            id: DeviceId,
        ) -> impl Future<Output = Result<Device, DeviceHubError>> + Send {
            let result: Result<Device, DeviceHubError> = self
                .store
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or_else(|| NotFoundError::new(id).into());
            async { result }
        }

        fn list(&self) -> impl Future<Output = Vec<Device>> + Send {
            let result: Vec<Device> = self.store.lock().unwrap().values().cloned().collect();
            async { result }
        }

        fn update(
            &self,
            id: DeviceId,
            device: Device,
        ) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result: Result<(), DeviceHubError> = match store.get_mut(&id) {
                Some(slot) => {
                    *slot = device;
                    Ok(())
                }
                None => Err(NotFoundError::new(id).into()),
            };
            async { result }
        }

        fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
            let result: Result<(), DeviceHubError> = match self.store.lock().unwrap().remove(&id) {
                Some(_) => Ok(()),
                None => Err(NotFoundError::new(id).into()),
            };
            async { result }
        }

        fn search_by_brand(&self, brand: &str) -> impl Future<Output = Vec<Device>> + Send {
            let result: Vec<Device> = self
                .store
                .lock()
                .unwrap()
                .values()
                .filter(|d| d.brand == brand)
                .cloned()
                .collect();
            async { result }
        }
    }

    /// Reads succeed but every write reports the device as gone, as if a
    /// concurrent delete landed between the two halves of an update.
    struct DeletedDuringUpdateRepo {
        inner: InMemoryDeviceRepo,
    }

    impl DeviceRepository for DeletedDuringUpdateRepo {
        fn create(&self, device: Device) -> impl Future<Output = ()> + Send {
            self.inner.create(device)
        }

        fn get_by_id(
            &self,
            id: DeviceId,
        ) -> impl Future<Output = Result<Device, DeviceHubError>> + Send {
            self.inner.get_by_id(id)
        }

        fn list(&self) -> impl Future<Output = Vec<Device>> + Send {
            self.inner.list()
        }

        fn update(
            &self,
            id: DeviceId,
            _device: Device,
        ) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
            self.inner.store.lock().unwrap().remove(&id);
            async move { Err(NotFoundError::new(id).into()) }
        }

        fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
            self.inner.delete(id)
        }

        fn search_by_brand(&self, brand: &str) -> impl Future<Output = Vec<Device>> + Send {
            self.inner.search_by_brand(brand)
        }
    }

    fn make_service() -> DeviceService<InMemoryDeviceRepo> {
        DeviceService::new(InMemoryDeviceRepo::default())
    }

    fn input(name: &str, brand: &str) -> CreateDeviceInput {
        CreateDeviceInput::new(name, brand).unwrap()
    }

    #[tokio::test]
    async fn should_populate_device_when_created() {
        let svc = make_service();
        let before = time::now();

        let created = svc.create_device(input("iPhone 12", "Apple")).await;

        assert_eq!(created.name, "iPhone 12");
        assert_eq!(created.brand, "Apple");
        assert!(created.created_at >= before);
        assert!(created.created_at <= time::now());
    }

    #[tokio::test]
    async fn should_assign_distinct_ids_when_creating_identical_inputs() {
        let svc = make_service();
        let a = svc.create_device(input("iPhone 12", "Apple")).await;
        let b = svc.create_device(input("iPhone 12", "Apple")).await;
        assert_ne!(a.id, b.id);
        assert_eq!(svc.list_devices().await.len(), 2);
    }

    #[tokio::test]
    async fn should_return_created_device_when_fetched_by_id() {
        let svc = make_service();
        let created = svc.create_device(input("iPhone 12", "Apple")).await;

        let fetched = svc.get_device(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_not_found_when_device_missing() {
        let svc = make_service();
        let result = svc.get_device(DeviceId::new()).await;
        assert!(matches!(result, Err(DeviceHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_exactly_the_created_devices() {
        let svc = make_service();
        let mut expected = vec![
            svc.create_device(input("iPhone 12", "Apple")).await.id,
            svc.create_device(input("Galaxy S21", "Samsung")).await.id,
            svc.create_device(input("Pixel 6", "Google")).await.id,
        ];

        let mut listed: Vec<DeviceId> = svc.list_devices().await.iter().map(|d| d.id).collect();

        expected.sort_by_key(|id| id.as_uuid());
        listed.sort_by_key(|id| id.as_uuid());
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_nothing_stored() {
        let svc = make_service();
        assert!(svc.list_devices().await.is_empty());
    }

    #[tokio::test]
    async fn should_preserve_identity_when_updating() {
        let svc = make_service();
        let original = svc.create_device(input("iPhone 12", "Apple")).await;

        let updated = svc
            .update_device(original.id, input("Galaxy S21", "Samsung"))
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.name, "Galaxy S21");
        assert_eq!(updated.brand, "Samsung");
        assert_eq!(svc.get_device(original.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn should_not_create_when_updating_missing_device() {
        let svc = make_service();
        let id = DeviceId::new();

        let result = svc.update_device(id, input("iPhone 12", "Apple")).await;

        assert!(matches!(result, Err(DeviceHubError::NotFound(_))));
        assert!(svc.list_devices().await.is_empty());
    }

    #[tokio::test]
    async fn should_surface_not_found_when_device_deleted_between_read_and_write() {
        let svc = DeviceService::new(DeletedDuringUpdateRepo {
            inner: InMemoryDeviceRepo::default(),
        });
        let created = svc.create_device(input("iPhone 12", "Apple")).await;

        let result = svc
            .update_device(created.id, input("iPhone 13", "Apple"))
            .await;

        assert!(matches!(
            result,
            Err(DeviceHubError::NotFound(NotFoundError { id })) if id == created.id
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_after_delete() {
        let svc = make_service();
        let created = svc.create_device(input("iPhone 12", "Apple")).await;

        svc.delete_device(created.id).await.unwrap();

        assert!(matches!(
            svc.get_device(created.id).await,
            Err(DeviceHubError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_device(created.id).await,
            Err(DeviceHubError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_match_brand_exactly_when_searching() {
        let svc = make_service();
        let iphone = svc.create_device(input("iPhone 12", "Apple")).await;
        let ipad = svc.create_device(input("iPad", "Apple")).await;
        svc.create_device(input("Lowercase", "apple")).await;
        svc.create_device(input("Substring", "Apple Inc")).await;
        svc.create_device(input("Galaxy S21", "Samsung")).await;

        let mut found: Vec<DeviceId> = svc
            .search_devices_by_brand("Apple")
            .await
            .iter()
            .map(|d| d.id)
            .collect();
        found.sort_by_key(|id| id.as_uuid());

        let mut expected = vec![iphone.id, ipad.id];
        expected.sort_by_key(|id| id.as_uuid());
        assert_eq!(found, expected);
    }

    #[tokio::test]
    async fn should_return_nothing_when_searching_empty_brand() {
        let svc = make_service();
        svc.create_device(input("iPhone 12", "Apple")).await;
        assert!(svc.search_devices_by_brand("").await.is_empty());
    }
}
