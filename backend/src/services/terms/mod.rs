//! # Term Service Module
//!
//! Endpoints under `/api/terms` that turn a `GenerateTermRequest` into the
//! final term HTML, using the templates from the settings store.
//!
//! ## Sub-modules:
//! - `generate`: Handlers for viewing and printing a term.
//! - `sink`: `DocumentSink` that turns the composed HTML into an HTTP response.

mod generate;
mod sink;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/terms";

/// Configures and returns the Actix `Scope` for the term routes.
///
/// # Registered Routes:
///
/// *   **`POST /generate`**: the term as `text/html`.
/// *   **`POST /print`**: the same document with a script that opens the
///     browser print dialog once it loads.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/generate", post().to(generate::view))
        .route("/print", post().to(generate::print))
}

