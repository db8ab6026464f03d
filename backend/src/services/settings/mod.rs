//! # Settings Service Module
//!
//! Endpoints under `/api/settings` for the company data and the two term
//! templates edited in the frontend.
//!
//! ## Sub-modules:
//! - `get`: Returns the stored settings.
//! - `save`: Validates and stores a new version of the settings.

pub(crate) mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/settings";

/// Configures and returns the Actix `Scope` for the settings routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: current `Settings` as JSON.
/// *   **`POST /save`**: replaces the stored `Settings`. Rejects a blank company
///     name and templates that repeat an insertion anchor.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("/save", post().to(save::process))
}
