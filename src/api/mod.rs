//! Client for the external back-office REST API.
//!
//! Every dashboard page consumes exactly one endpoint, fetched once per
//! user action. The shared `get_json` helper carries the whole fetch state
//! machine: issue the request, map a non-2xx status or transport failure to
//! `ApiError`, decode the JSON body into the page's typed shape.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
pub use types::*;
