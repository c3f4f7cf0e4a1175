//! Read-only HTTP API over a static inventory of server instances.
//!
//! The data file is loaded lazily into an [`services::InstanceStore`]; handlers
//! page, filter and aggregate that in-memory collection.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

pub use error::{InventoryError, Result};
