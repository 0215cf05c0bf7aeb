// linkboard client layer
// Every resource speaks the same CRUD interface; implementations differ
// in where the data lives: REST backend, local JSON blobs, or remote
// with transparent local fallback.

pub mod fallback;
pub mod http;
pub mod local;

use crate::config::ClientConfig;
use crate::types::errors::ApiError;
use crate::types::Record;

/// CRUD interface shared by every client implementation.
pub trait ResourceClient<T: Record> {
    fn fetch_all(&self) -> Result<Vec<T>, ApiError>;
    fn create(&self, draft: &T::Draft) -> Result<T, ApiError>;
    fn update(&self, id: &str, draft: &T::Draft) -> Result<T, ApiError>;
    fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Selects the client implementation for a resource.
///
/// With a configured base URL the REST client is used, wrapped so that
/// any failed call is retried against the local store. Without one the
/// local store is the only backend.
pub fn client_for<T: Record + 'static>(config: &ClientConfig) -> Box<dyn ResourceClient<T>> {
    match config.base_url.as_deref() {
        Some(base) => Box::new(fallback::FallbackClient::new(
            Box::new(http::HttpClient::new(base)),
            local::LocalClient::new(&config.data_dir),
        )),
        None => Box::new(local::LocalClient::new(&config.data_dir)),
    }
}
