//! Platform-neutral core of the StockDesk inventory admin.
//!
//! The browser frontend and the CLI both build on these pieces:
//! the item model, the session gate, draft validation, the closed error
//! taxonomy and the remote workflows behind [`api::InventoryApi`].

pub mod api;
pub mod controller;
pub mod draft;
pub mod error;
pub mod images;
pub mod memory;
pub mod model;
pub mod session;
pub mod workflow;

pub use api::{ApiFailure, ImageUpload, InventoryApi, ItemFields, ItemPayload};
pub use controller::InventoryAdmin;
pub use draft::{Draft, FormMode, ItemForm};
pub use error::{AdminError, DraftField, Operation, ValidationError};
pub use images::{asset_host, resolve_image_url, PLACEHOLDER_IMAGE};
pub use model::{Category, InventoryItem, ItemStatus, Prescription};
pub use session::{AuthContext, MemorySession, Role, SessionProvider, SessionUser};
