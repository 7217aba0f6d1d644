//! Client side of the inventory search: the form, the API client with its
//! response cache, and the result renderers.

pub mod api;
pub mod cache;
pub mod error;
pub mod form;
pub mod render;
pub mod types;

pub use api::ApiClient;
pub use error::ClientError;
pub use form::SearchForm;
pub use types::{CategoriesResponse, SearchResponse};
