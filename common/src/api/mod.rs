//! HTTP access to the inventory backend.

mod client;
mod endpoints;
mod error;
mod transport;

pub use client::{ApiClient, ListScope, Submission};
pub use endpoints::{Endpoints, ID_PLACEHOLDER, ResourceRoutes, expand};
pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method};
