use crate::store::SettingsStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::settings::Settings;
use common::term::slots::repeated_anchors;
use log::info;

pub async fn process(
    store: web::Data<SettingsStore>,
    payload: web::Json<Settings>,
) -> impl Responder {
    let settings = payload.into_inner();
    if let Err(e) = validate(&settings) {
        return HttpResponse::BadRequest().body(e);
    }

    match save_settings(store, settings).await {
        Ok(_) => HttpResponse::Ok().body("Configurações salvas com sucesso"),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Erro ao salvar configurações: {}", e)),
    }
}

fn validate(settings: &Settings) -> Result<(), String> {
    let templates = [
        ("entrega", settings.term_template()),
        ("devolução", settings.return_term_template()),
    ];
    for (label, template) in templates {
        if let Some(slot) = template.and_then(|t| repeated_anchors(t).into_iter().next()) {
            return Err(format!(
                "O template de {} repete o marcador {}",
                label,
                slot.anchor()
            ));
        }
    }
    Ok(())
}

async fn save_settings(store: web::Data<SettingsStore>, settings: Settings) -> Result<(), String> {
    web::block(move || store.save(&settings))
        .await
        .map_err(|e| e.to_string())??;
    info!("Settings saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            app_name: "Acme".into(),
            ..Settings::with_default_templates()
        }
    }

    #[test]
    fn accepts_default_templates() {
        assert!(validate(&settings()).is_ok());
    }

    #[test]
    fn accepts_blank_company_name() {
        let mut s = settings();
        s.app_name = "  ".into();
        assert!(validate(&s).is_ok());
        assert!(validate(&Settings::with_default_templates()).is_ok());
    }

    #[test]
    fn rejects_repeated_anchor() {
        let mut s = settings();
        s.return_term_template =
            Some("<!-- CHECKLIST_ITENS --><p>x</p><!-- CHECKLIST_ITENS -->".into());
        let err = validate(&s).unwrap_err();
        assert!(err.contains("devolução"));
        assert!(err.contains("<!-- CHECKLIST_ITENS -->"));
    }
}
