mod inventory_service;
mod item_store;

pub use inventory_service::InventoryService;
pub use item_store::ItemStore;
