//! Inventory module - item/location models and the lookup trait consumed by
//! the coordinators for referential checks.
//!
//! Item and location management itself lives in the admin screens, outside
//! this crate; only the read side is needed here.

mod inventory_model;
mod inventory_traits;

pub use inventory_model::{Item, Location};
pub use inventory_traits::InventoryRepositoryTrait;
