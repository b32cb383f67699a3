//! In-memory backend with the same contract as the REST service.
//!
//! Uploads are plain file names; a created item stores them as
//! `uploads/products/<name>` the way the real service does.

use std::{cell::RefCell, collections::HashMap};

use async_trait::async_trait;
use serde_json::json;

use crate::{
    api::{ApiFailure, ImageUpload, InventoryApi, ItemPayload},
    model::InventoryItem,
};

/// Request kinds recorded by [`MemoryInventoryApi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    /// `GET` collection.
    List,
    /// `POST` collection.
    Create,
    /// `PUT` item.
    Update,
    /// `DELETE` item.
    Delete,
}

/// Stateful fake of `/api/admin/inventory`.
#[derive(Debug)]
pub struct MemoryInventoryApi {
    token: String,
    items: RefCell<Vec<InventoryItem>>,
    calls: RefCell<Vec<Call>>,
    failures: RefCell<HashMap<Call, ApiFailure>>,
    next_id: RefCell<u64>,
}

impl MemoryInventoryApi {
    /// Backend accepting only `token`, seeded with `items`.
    pub fn new(token: &str, items: Vec<InventoryItem>) -> Self {
        Self {
            token: token.to_string(),
            items: RefCell::new(items),
            calls: RefCell::new(Vec::new()),
            failures: RefCell::new(HashMap::new()),
            next_id: RefCell::new(1),
        }
    }

    /// Makes the next request of kind `call` fail with `failure`.
    pub fn fail_next(&self, call: Call, failure: ApiFailure) {
        self.failures.borrow_mut().insert(call, failure);
    }

    /// Requests received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Current server-side state.
    pub fn items(&self) -> Vec<InventoryItem> {
        self.items.borrow().clone()
    }

    /// Replaces server-side state, e.g. to simulate another admin's edit.
    pub fn set_items(&self, items: Vec<InventoryItem>) {
        *self.items.borrow_mut() = items;
    }

    fn enter(&self, call: Call, token: &str) -> Result<(), ApiFailure> {
        self.calls.borrow_mut().push(call);
        if let Some(failure) = self.failures.borrow_mut().remove(&call) {
            return Err(failure);
        }
        if token != self.token {
            return Err(ApiFailure::from_status(401, r#"{"message":"Not authorized"}"#));
        }
        Ok(())
    }

    fn apply(item: &mut InventoryItem, payload: &ItemPayload<String>) {
        let fields = &payload.fields;
        item.name = fields.name.clone();
        item.description = fields.description.clone();
        item.category = fields.category.clone();
        item.price = fields.price;
        item.stock = fields.stock;
        item.brand = fields.brand.clone();
        item.pack_size = fields.pack_size.clone();
        item.status = fields.status;
        item.prescription = fields.prescription;
        item.images = stored_images(&payload.images);
    }
}

fn stored_images(images: &ImageUpload<String>) -> Vec<String> {
    match images {
        ImageUpload::New(files) => {
            files.iter().map(|name| format!("uploads/products/{name}")).collect()
        },
        ImageUpload::Existing(refs) => refs.clone(),
    }
}

#[async_trait(?Send)]
impl InventoryApi for MemoryInventoryApi {
    type Upload = String;

    async fn list(&self, token: &str) -> Result<Vec<InventoryItem>, ApiFailure> {
        self.enter(Call::List, token)?;
        Ok(self.items())
    }

    async fn create(
        &self,
        token: &str,
        payload: &ItemPayload<String>,
    ) -> Result<serde_json::Value, ApiFailure> {
        self.enter(Call::Create, token)?;
        if matches!(&payload.images, ImageUpload::New(files) if files.is_empty()) {
            return Err(ApiFailure::from_status(
                400,
                r#"{"message":"At least one image is required"}"#,
            ));
        }
        let id = {
            let mut next = self.next_id.borrow_mut();
            let id = format!("item-{}", *next);
            *next += 1;
            id
        };
        let fields = &payload.fields;
        let item = InventoryItem {
            id,
            name: fields.name.clone(),
            description: fields.description.clone(),
            category: fields.category.clone(),
            brand: fields.brand.clone(),
            pack_size: fields.pack_size.clone(),
            price: fields.price,
            stock: fields.stock,
            status: fields.status,
            prescription: fields.prescription,
            images: stored_images(&payload.images),
            image: None,
        };
        let body = json!({ "message": "Product created", "id": item.id });
        self.items.borrow_mut().push(item);
        Ok(body)
    }

    async fn update(
        &self,
        token: &str,
        id: &str,
        payload: &ItemPayload<String>,
    ) -> Result<serde_json::Value, ApiFailure> {
        self.enter(Call::Update, token)?;
        let mut items = self.items.borrow_mut();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Err(ApiFailure::from_status(404, r#"{"message":"Product not found"}"#));
        };
        Self::apply(item, payload);
        Ok(json!({ "message": "Product updated", "id": id }))
    }

    async fn delete(&self, token: &str, id: &str) -> Result<serde_json::Value, ApiFailure> {
        self.enter(Call::Delete, token)?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(ApiFailure::from_status(404, r#"{"message":"Product not found"}"#));
        }
        Ok(json!({ "message": "Product deleted" }))
    }
}
