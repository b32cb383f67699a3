pub mod admin_inventory;
pub mod login;
pub mod not_found;

pub use admin_inventory::AdminInventoryPage;
