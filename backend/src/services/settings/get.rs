use crate::store::SettingsStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::settings::Settings;

/// Actix web handler for `GET /api/settings`.
///
/// # Returns
/// - `200 OK` with the `Settings` as JSON.
/// - `503 Service Unavailable` if the store cannot be read.
pub async fn process(store: web::Data<SettingsStore>) -> impl Responder {
    match load_settings(store).await {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Erro ao carregar configurações: {}", e)),
    }
}

/// Reads the settings off the async runtime. Also used by the term endpoints.
pub(crate) async fn load_settings(store: web::Data<SettingsStore>) -> Result<Settings, String> {
    web::block(move || store.load())
        .await
        .map_err(|e| e.to_string())?
}
