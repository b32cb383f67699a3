//! Backend REST surface consumed by the admin view.
//!
//! Platforms plug in their own HTTP stack by implementing [`InventoryApi`];
//! everything above it (classification, workflows, the controller) is
//! shared.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    error::{AdminError, Operation},
    model::{Category, InventoryItem, ItemStatus, Prescription},
};

/// Collection path, relative to the API base.
pub const INVENTORY_PATH: &str = "/admin/inventory";

/// Builds the collection URL from an API base such as
/// `http://localhost:5000/api`.
pub fn collection_url(api_base: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), INVENTORY_PATH)
}

/// Builds the URL of one item. The id is percent-encoded.
pub fn item_url(api_base: &str, id: &str) -> String {
    format!("{}/{}", collection_url(api_base), urlencoding::encode(id))
}

/// Why a request did not produce a usable result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// The backend answered with a non-success status.
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` field of the JSON error body, when present.
        message: Option<String>,
    },
    /// The request never completed.
    Transport(String),
    /// The body could not be decoded.
    Decode(String),
}

impl ApiFailure {
    /// Builds a status failure, pulling the backend message out of `body`.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiFailure::Status {
            status,
            message: backend_message(body),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts the `message` field from a JSON error body.
pub fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}

/// Decodes a collection body one record at a time. Records that do not
/// decode are logged and skipped so one bad row cannot hide the rest.
pub fn decode_items(body: serde_json::Value) -> Result<Vec<InventoryItem>, ApiFailure> {
    let serde_json::Value::Array(records) = body else {
        return Err(ApiFailure::Decode("inventory body is not a JSON array".to_string()));
    };
    let total = records.len();
    let items: Vec<InventoryItem> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping undecodable inventory record");
                None
            },
        })
        .collect();
    if items.len() < total {
        tracing::warn!(skipped = total - items.len(), total, "inventory list partially decoded");
    }
    Ok(items)
}

impl AdminError {
    /// Classifies a transport-level failure for `operation`.
    pub fn from_failure(operation: Operation, failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::Status {
                status: 401, ..
            } => AdminError::AuthenticationRejected,
            // Fetch errors never echo the backend.
            _ if operation == Operation::Fetch => AdminError::failed(Operation::Fetch, None),
            ApiFailure::Status {
                status: 400,
                message,
            } if matches!(operation, Operation::Create | Operation::Update) => {
                AdminError::BackendRejected {
                    message: message.unwrap_or_else(|| AdminError::INVALID_DATA.to_string()),
                }
            },
            ApiFailure::Status {
                message, ..
            } => AdminError::failed(operation, message),
            ApiFailure::Transport(_) | ApiFailure::Decode(_) => AdminError::failed(operation, None),
        }
    }
}

/// Scalar fields of a create or update request, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    /// Trimmed name.
    pub name: String,
    /// Trimmed description.
    pub description: String,
    /// Category.
    pub category: Category,
    /// Price, greater than zero.
    pub price: f64,
    /// Units on hand.
    pub stock: u32,
    /// Trimmed brand.
    pub brand: String,
    /// Trimmed pack size, `None` when left blank.
    pub pack_size: Option<String>,
    /// Listing status.
    pub status: ItemStatus,
    /// Prescription requirement.
    pub prescription: Prescription,
}

impl ItemFields {
    /// Text parts of the multipart body, in wire order.
    pub fn form_parts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("category", self.category.code().to_string()),
            ("price", self.price.to_string()),
            ("stock", self.stock.to_string()),
            ("brand", self.brand.clone()),
            ("packSize", self.pack_size.clone().unwrap_or_default()),
            ("status", self.status.code().to_string()),
            ("prescription", self.prescription.code().to_string()),
        ]
    }
}

/// Image part of a create or update request.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageUpload<U> {
    /// Freshly selected files, sent as repeated `images` file parts.
    New(Vec<U>),
    /// Unchanged references, sent as one `images` text part holding a JSON
    /// array.
    Existing(Vec<String>),
}

impl<U> ImageUpload<U> {
    /// JSON text for [`ImageUpload::Existing`], `None` for new files.
    pub fn existing_json(&self) -> Option<String> {
        match self {
            ImageUpload::New(_) => None,
            ImageUpload::Existing(refs) => {
                Some(serde_json::to_string(refs).unwrap_or_else(|_| "[]".to_string()))
            },
        }
    }
}

/// Multipart payload for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPayload<U> {
    /// Scalar fields.
    pub fields: ItemFields,
    /// Images to upload or keep.
    pub images: ImageUpload<U>,
}

/// Field name of every image part.
pub const IMAGES_FIELD: &str = "images";

/// Authenticated access to the inventory collection.
///
/// Futures are not required to be `Send` so the trait can be implemented on
/// top of browser fetch.
#[async_trait(?Send)]
pub trait InventoryApi {
    /// Platform handle for a file waiting to be uploaded.
    type Upload: Clone;

    /// `GET` the full collection.
    async fn list(&self, token: &str) -> Result<Vec<InventoryItem>, ApiFailure>;

    /// `POST` a new item. Returns the backend's acknowledgement body.
    async fn create(
        &self,
        token: &str,
        payload: &ItemPayload<Self::Upload>,
    ) -> Result<serde_json::Value, ApiFailure>;

    /// `PUT` an existing item.
    async fn update(
        &self,
        token: &str,
        id: &str,
        payload: &ItemPayload<Self::Upload>,
    ) -> Result<serde_json::Value, ApiFailure>;

    /// `DELETE` an item. Returns the confirmation body.
    async fn delete(&self, token: &str, id: &str) -> Result<serde_json::Value, ApiFailure>;
}
