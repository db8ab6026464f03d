//! # Term Generation Service
//!
//! Backend side of `POST /api/terms/generate` and `POST /api/terms/print`.
//!
//! ## Workflow
//!
//! 1.  The handler receives a `GenerateTermRequest` as JSON.
//! 2.  The current `Settings` are read from the store; the request never
//!     carries templates of its own.
//! 3.  `common::term::generate_into` composes the term and hands the HTML to
//!     an `HtmlResponseSink`, which adds the print trigger when asked to.
//! 4.  Slots the template had no place for are logged with the term id so a
//!     broken template can be traced back.

use crate::services::settings::get::load_settings;
use crate::store::SettingsStore;
use actix_web::{web, HttpResponse, Responder};
use common::requests::GenerateTermRequest;
use common::term::{generate_into, TermRequest};
use log::{info, warn};

use super::sink::{HtmlResponseSink, PrintMode};

pub async fn view(
    store: web::Data<SettingsStore>,
    payload: web::Json<GenerateTermRequest>,
) -> impl Responder {
    respond(store, payload.into_inner(), PrintMode::View).await
}

pub async fn print(
    store: web::Data<SettingsStore>,
    payload: web::Json<GenerateTermRequest>,
) -> impl Responder {
    respond(store, payload.into_inner(), PrintMode::Print).await
}

async fn respond(
    store: web::Data<SettingsStore>,
    request: GenerateTermRequest,
    mode: PrintMode,
) -> HttpResponse {
    let settings = match load_settings(store).await {
        Ok(settings) => settings,
        Err(e) => {
            return HttpResponse::ServiceUnavailable()
                .body(format!("Erro ao carregar configurações: {}", e))
        }
    };

    let mut sink = HtmlResponseSink::new(mode);
    let composed = generate_into(&TermRequest::from_request(&request, &settings), &mut sink);

    info!(
        "Term {} generated ({}, {:?})",
        composed.term_id,
        request.action_type.label(),
        mode
    );
    for slot in composed.dropped_slots() {
        warn!(
            "Term {}: template has no place for {}",
            composed.term_id,
            slot.label()
        );
    }

    sink.into_response()
}
