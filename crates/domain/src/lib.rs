//! # devicehub-domain
//!
//! Pure domain model for the devicehub resource manager.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Device** entity and the validated **`CreateDeviceInput`**
//!   payload used for both creation and full replacement
//! - Contain all invariant enforcement (non-empty `name` and `brand`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
