//! REST client for a single resource collection.
//!
//! Collections live at `<base>/<collection>`, records at
//! `<base>/<collection>/<id>`, all bodies JSON. The backend signals
//! errors through non-2xx statuses; those are mapped to `ApiError::Http`
//! with the canonical status text as the message.

use std::marker::PhantomData;

use reqwest::blocking::{Client, Response};

use super::ResourceClient;
use crate::types::errors::ApiError;
use crate::types::Record;

pub struct HttpClient<T: Record> {
    base_url: String,
    http: Client,
    _marker: PhantomData<T>,
}

impl<T: Record> HttpClient<T> {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
            _marker: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, T::COLLECTION)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, T::COLLECTION, id)
    }

    fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Http {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            })
        }
    }
}

impl<T: Record> ResourceClient<T> for HttpClient<T> {
    fn fetch_all(&self) -> Result<Vec<T>, ApiError> {
        let response = self
            .http
            .get(self.collection_url())
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response)?
            .json()
            .map_err(|e| ApiError::Serialization(e.to_string()))
    }

    fn create(&self, draft: &T::Draft) -> Result<T, ApiError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response)?
            .json()
            .map_err(|e| ApiError::Serialization(e.to_string()))
    }

    fn update(&self, id: &str, draft: &T::Draft) -> Result<T, ApiError> {
        let response = self
            .http
            .put(self.record_url(id))
            .json(draft)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response)?
            .json()
            .map_err(|e| ApiError::Serialization(e.to_string()))
    }

    fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.record_url(id))
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response)?;
        Ok(())
    }
}
