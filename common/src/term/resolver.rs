//! Picks the base template for an action.

use log::warn;

use crate::model::action::ActionType;
use crate::model::settings::Settings;

pub const MISSING_DELIVERY_TEMPLATE: &str =
    r#"<p style="color:red">Erro: Template de Entrega não configurado.</p>"#;
pub const MISSING_RETURN_TEMPLATE: &str =
    r#"<p style="color:red">Erro: Template de Devolução não configurado.</p>"#;

/// Where the resolved template text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    Delivery,
    Return,
    /// Return requested but only the delivery template is configured.
    DeliveryFallback,
    /// Nothing configured; the body is the visible error marker.
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTemplate<'a> {
    pub body: &'a str,
    pub source: TemplateSource,
}

pub fn resolve_template(action: ActionType, settings: &Settings) -> ResolvedTemplate<'_> {
    let resolved = match action {
        ActionType::Entrega => match settings.term_template() {
            Some(body) => ResolvedTemplate {
                body,
                source: TemplateSource::Delivery,
            },
            None => ResolvedTemplate {
                body: MISSING_DELIVERY_TEMPLATE,
                source: TemplateSource::Missing,
            },
        },
        ActionType::Devolucao => {
            if let Some(body) = settings.return_term_template() {
                ResolvedTemplate {
                    body,
                    source: TemplateSource::Return,
                }
            } else if let Some(body) = settings.term_template() {
                ResolvedTemplate {
                    body,
                    source: TemplateSource::DeliveryFallback,
                }
            } else {
                ResolvedTemplate {
                    body: MISSING_RETURN_TEMPLATE,
                    source: TemplateSource::Missing,
                }
            }
        }
    };

    match resolved.source {
        TemplateSource::Missing => warn!("No template configured for {:?}", action),
        TemplateSource::DeliveryFallback => {
            warn!("Return template not configured, using the delivery template")
        }
        _ => {}
    }
    resolved
}
