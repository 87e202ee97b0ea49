//! Device — the single resource managed by devicehub.
//!
//! A [`Device`] is only ever constructed by the application service, which
//! owns identifier generation and creation timestamping. After creation only
//! `name` and `brand` may change, and only through [`Device::apply`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::DeviceId;
use crate::time::Timestamp;

/// A managed device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub brand: String,
    pub created_at: Timestamp,
}

impl Device {
    /// Build a device from validated input with an identity chosen by the caller.
    #[must_use]
    pub fn new(id: DeviceId, input: CreateDeviceInput, created_at: Timestamp) -> Self {
        let CreateDeviceInput { name, brand } = input;
        Self {
            id,
            name,
            brand,
            created_at,
        }
    }

    /// Replace `name` and `brand` with the values from `input`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, input: CreateDeviceInput) {
        self.name = input.name;
        self.brand = input.brand;
    }
}

/// Validated payload for creating a device or fully replacing its mutable fields.
///
/// Both fields are guaranteed non-empty: the only way to obtain a value is
/// through [`CreateDeviceInput::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDeviceInput {
    name: String,
    brand: String,
}

impl CreateDeviceInput {
    /// Validate and wrap a `name`/`brand` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] or [`ValidationError::EmptyBrand`]
    /// when the corresponding field is empty. `name` is checked first.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let brand = brand.into();
        if brand.is_empty() {
            return Err(ValidationError::EmptyBrand);
        }
        Ok(Self { name, brand })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }
}
