use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use stockdesk_shared::{
    api::{collection_url, decode_items, item_url, IMAGES_FIELD},
    ApiFailure, ImageUpload, InventoryApi, InventoryItem, ItemPayload,
};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::API_BASE;

/// Browser `fetch` client for `/api/admin/inventory`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooInventoryApi;

fn js_error(e: JsValue) -> ApiFailure {
    ApiFailure::Transport(format!("{:?}", e))
}

fn net_error(e: gloo_net::Error) -> ApiFailure {
    ApiFailure::Transport(format!("Network error: {:?}", e))
}

fn form_data(payload: &ItemPayload<File>) -> Result<FormData, ApiFailure> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in payload.fields.form_parts() {
        form.append_with_str(name, &value).map_err(js_error)?;
    }
    match &payload.images {
        ImageUpload::New(files) => {
            for file in files {
                form.append_with_blob_and_filename(IMAGES_FIELD, file, &file.name())
                    .map_err(js_error)?;
            }
        },
        ImageUpload::Existing(_) => {
            if let Some(json) = payload.images.existing_json() {
                form.append_with_str(IMAGES_FIELD, &json).map_err(js_error)?;
            }
        },
    }
    Ok(form)
}

async fn send<T: DeserializeOwned>(
    builder: RequestBuilder,
    token: &str,
    body: Option<FormData>,
) -> Result<T, ApiFailure> {
    // Content-Type is left to the browser so the multipart boundary is set.
    let builder = builder.header("Authorization", &format!("Bearer {}", token));
    let request = match body {
        Some(form) => builder.body(form).map_err(net_error)?,
        None => builder.build().map_err(net_error)?,
    };
    let response = request.send().await.map_err(net_error)?;
    let text = response.text().await.map_err(net_error)?;
    if !response.ok() {
        return Err(ApiFailure::from_status(response.status(), &text));
    }

    let parsed = if text.trim().is_empty() {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_str(&text)
    };
    parsed.map_err(|e| ApiFailure::Decode(format!("Parse error: {:?}", e)))
}

#[async_trait(?Send)]
impl InventoryApi for GlooInventoryApi {
    type Upload = File;

    async fn list(&self, token: &str) -> Result<Vec<InventoryItem>, ApiFailure> {
        let url = collection_url(API_BASE);
        let request = Request::get(&url).header("Cache-Control", "no-cache");
        let body = send(request, token, None).await?;
        decode_items(body)
    }

    async fn create(
        &self,
        token: &str,
        payload: &ItemPayload<File>,
    ) -> Result<serde_json::Value, ApiFailure> {
        let url = collection_url(API_BASE);
        send(Request::post(&url), token, Some(form_data(payload)?)).await
    }

    async fn update(
        &self,
        token: &str,
        id: &str,
        payload: &ItemPayload<File>,
    ) -> Result<serde_json::Value, ApiFailure> {
        let url = item_url(API_BASE, id);
        send(Request::put(&url), token, Some(form_data(payload)?)).await
    }

    async fn delete(&self, token: &str, id: &str) -> Result<serde_json::Value, ApiFailure> {
        let url = item_url(API_BASE, id);
        send(Request::delete(&url), token, None).await
    }
}
