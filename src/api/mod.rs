//! API Module
//!
//! HTTP handlers and routing for the recipe proxy.
//!
//! # Endpoints
//! - `GET /?action=search&query=..&from=..&size=..&tags=..` - Recipe search
//! - `GET /?action=details&id=..` - Single recipe
//! - `GET /?action=featured` - Featured recipes
//! - `GET /?action=tags` - Tag catalogue
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Cache statistics

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
