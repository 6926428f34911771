//! Inventory items feature: the item store, the domain service, and the
//! HTTP surface for the add/consume/finish/restore/delete lifecycle.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{InventoryService, ItemStore};
