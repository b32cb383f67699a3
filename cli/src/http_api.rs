//! `reqwest` implementation of [`InventoryApi`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, RequestBuilder,
};
use serde::de::DeserializeOwned;
use stockdesk_shared::{
    api::{collection_url, decode_items, item_url, IMAGES_FIELD},
    ApiFailure, ImageUpload, InventoryApi, InventoryItem, ItemPayload,
};

use crate::utils::UploadFile;

/// Client for `/api/admin/inventory` on a StockDesk backend.
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    client: Client,
    api_base: String,
}

impl HttpInventoryApi {
    /// Client for the backend at `api_base`, e.g. `http://localhost:5000/api`.
    pub fn new(api_base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sd-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are issued against.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn multipart(payload: &ItemPayload<UploadFile>) -> Result<Form, ApiFailure> {
        let mut form = Form::new();
        for (name, value) in payload.fields.form_parts() {
            form = form.text(name, value);
        }
        match &payload.images {
            ImageUpload::New(files) => {
                for file in files {
                    let part = Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone())
                        .mime_str(&file.mime_type)
                        .map_err(|err| ApiFailure::Transport(err.to_string()))?;
                    form = form.part(IMAGES_FIELD, part);
                }
            },
            ImageUpload::Existing(_) => {
                if let Some(json) = payload.images.existing_json() {
                    form = form.text(IMAGES_FIELD, json);
                }
            },
        }
        Ok(form)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder, token: &str) -> Result<T, ApiFailure> {
    let response = request
        .bearer_auth(token)
        .send()
        .await
        .map_err(|err| ApiFailure::Transport(err.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| ApiFailure::Transport(err.to_string()))?;
    if !status.is_success() {
        return Err(ApiFailure::from_status(status.as_u16(), &body));
    }
    decode_body(&body)
}

/// Decodes a success body; an empty body reads as JSON `null`.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiFailure> {
    let parsed = if body.trim().is_empty() {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_str(body)
    };
    parsed.map_err(|err| ApiFailure::Decode(err.to_string()))
}

#[async_trait(?Send)]
impl InventoryApi for HttpInventoryApi {
    type Upload = UploadFile;

    async fn list(&self, token: &str) -> Result<Vec<InventoryItem>, ApiFailure> {
        let body = send(self.client.get(collection_url(&self.api_base)), token).await?;
        decode_items(body)
    }

    async fn create(
        &self,
        token: &str,
        payload: &ItemPayload<UploadFile>,
    ) -> Result<serde_json::Value, ApiFailure> {
        let form = Self::multipart(payload)?;
        send(self.client.post(collection_url(&self.api_base)).multipart(form), token).await
    }

    async fn update(
        &self,
        token: &str,
        id: &str,
        payload: &ItemPayload<UploadFile>,
    ) -> Result<serde_json::Value, ApiFailure> {
        let form = Self::multipart(payload)?;
        send(self.client.put(item_url(&self.api_base, id)).multipart(form), token).await
    }

    async fn delete(&self, token: &str, id: &str) -> Result<serde_json::Value, ApiFailure> {
        send(self.client.delete(item_url(&self.api_base, id)), token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_success_body_decodes_as_null() {
        let value: serde_json::Value = decode_body("").expect("null body");
        assert!(value.is_null());
        let list: Result<Vec<InventoryItem>, _> = decode_body("  ");
        assert!(matches!(list, Err(ApiFailure::Decode(_))));
    }
}
