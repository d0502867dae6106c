//! Firestore Document Store
//!
//! Talks to the Firestore REST API (v1). Documents are read with `GET`
//! and written with `PATCH`, which creates the document if it does not
//! exist yet.
//!
//! Firestore wraps every value in a typed envelope, so a stored list looks
//! like:
//!
//! ```json
//! { "fields": { "categories": { "arrayValue": { "values": [
//!     { "mapValue": { "fields": {
//!         "id": { "stringValue": "..." },
//!         "Category": { "stringValue": "..." } } } }
//! ] } } } }
//! ```

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::document::CategoryDocument;
use super::traits::DocumentStore;
use crate::config::StoreConfig;
use crate::domain::{Category, DomainError, DomainResult};

/// Characters left as-is inside a URL path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub struct FirestoreStore {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
}

impl FirestoreStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub(crate) fn document_url(&self, collection: &str, key: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url,
            utf8_percent_encode(&self.project_id, PATH_SEGMENT),
            utf8_percent_encode(collection, PATH_SEGMENT),
            utf8_percent_encode(key, PATH_SEGMENT),
        )
    }

    fn with_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DocumentStore for FirestoreStore {
    async fn get(&self, collection: &str, key: &str) -> DomainResult<Option<CategoryDocument>> {
        let url = self.document_url(collection, key);
        let response = self
            .with_key(self.client.get(&url))
            .send()
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DomainError::Store(format!(
                "GET {}/{} returned {}",
                collection,
                key,
                response.status()
            )));
        }

        let document: FirestoreDocument = response
            .json()
            .await
            .map_err(|e| DomainError::Decode(e.to_string()))?;
        Ok(Some(document.into()))
    }

    async fn set(&self, collection: &str, key: &str, document: &CategoryDocument) -> DomainResult<()> {
        let url = self.document_url(collection, key);
        let body = FirestoreDocument::from(document);
        let response = self
            .with_key(self.client.patch(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::Store(format!(
                "PATCH {}/{} returned {}",
                collection,
                key,
                response.status()
            )));
        }
        Ok(())
    }
}

// ========================
// Wire format
// ========================

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct FirestoreDocument {
    fields: DocumentFields,
}

#[derive(Debug, Serialize, Deserialize)]
struct DocumentFields {
    categories: ArrayField,
}

#[derive(Debug, Serialize, Deserialize)]
struct ArrayField {
    #[serde(rename = "arrayValue")]
    array_value: ArrayValue,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ArrayValue {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<MapField>,
}

#[derive(Debug, Serialize, Deserialize)]
struct MapField {
    #[serde(rename = "mapValue")]
    map_value: MapValue,
}

#[derive(Debug, Serialize, Deserialize)]
struct MapValue {
    fields: CategoryFields,
}

#[derive(Debug, Serialize, Deserialize)]
struct CategoryFields {
    id: StringField,
    #[serde(rename = "Category", alias = "label")]
    label: StringField,
}

#[derive(Debug, Serialize, Deserialize)]
struct StringField {
    #[serde(rename = "stringValue")]
    string_value: String,
}

impl From<&CategoryDocument> for FirestoreDocument {
    fn from(document: &CategoryDocument) -> Self {
        let values = document
            .categories
            .iter()
            .map(|c| MapField {
                map_value: MapValue {
                    fields: CategoryFields {
                        id: StringField { string_value: c.id.clone() },
                        label: StringField { string_value: c.label.clone() },
                    },
                },
            })
            .collect();

        Self {
            fields: DocumentFields {
                categories: ArrayField {
                    array_value: ArrayValue { values },
                },
            },
        }
    }
}

impl From<FirestoreDocument> for CategoryDocument {
    fn from(document: FirestoreDocument) -> Self {
        document
            .fields
            .categories
            .array_value
            .values
            .into_iter()
            .map(|v| Category::new(v.map_value.fields.id.string_value, v.map_value.fields.label.string_value))
            .collect::<crate::domain::CategoryList>()
            .into()
    }
}
