//! # devicehub-adapter-storage-memory
//!
//! Process-lifetime storage adapter.
//!
//! ## Responsibilities
//! - Implement the `DeviceRepository` port defined in `devicehub-app::ports::storage`
//! - Own the device collection together with the lock guarding it, so every
//!   caller (and every test) gets an isolated instance instead of a global
//!
//! ## Dependency rule
//! Depends on `devicehub-app` (for port traits) and `devicehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod device_repo;

pub use device_repo::InMemoryDeviceRepository;
