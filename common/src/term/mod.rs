//! # Responsibility term generator
//!
//! Turns an HTML template from [`Settings`] plus the asset, the employee and
//! (for returns) the checklist into the final term document.
//!
//! ## Pipeline
//!
//! 1.  **Template selection** (`resolver`): delivery or return template, with
//!     the return falling back to the delivery one and both falling back to
//!     a visible error paragraph.
//! 2.  **Token substitution** (`tokens`, `substitute`): the seventeen
//!     `{TOKEN}` placeholders are resolved into one map and replaced in a
//!     single pass.
//! 3.  **Checklist splice** (`checklist`, `slots`): returns with a checklist
//!     get the item table and, when something is missing, the pending-items
//!     clause placed at the `<!-- CHECKLIST_ITENS -->` and
//!     `<!-- CLAUSULAS_ADICIONAIS -->` anchors.
//! 4.  **Emit** (`compositor`, `sink`): the string goes back to the caller or
//!     to a [`sink::DocumentSink`].
//!
//! Nothing here does I/O or keeps state between calls.

pub mod checklist;
pub mod compositor;
pub mod defaults;
pub mod descriptor;
pub mod html;
pub mod linked;
pub mod resolver;
pub mod sink;
pub mod slots;
pub mod stamp;
pub mod substitute;
pub mod tokens;

pub use compositor::{ComposedTerm, compose, generate, generate_into};
pub use stamp::Stamp;

use crate::model::action::ActionType;
use crate::model::asset::{Asset, SimCard};
use crate::model::checklist::ReturnChecklist;
use crate::model::lookup::{AssetType, Brand, Model};
use crate::model::settings::Settings;
use crate::model::user::User;
use crate::requests::GenerateTermRequest;

/// Everything one term is generated from, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct TermRequest<'a> {
    pub user: &'a User,
    pub asset: &'a Asset,
    pub settings: &'a Settings,
    pub action_type: ActionType,
    pub model: Option<&'a Model>,
    pub brand: Option<&'a Brand>,
    pub asset_type: Option<&'a AssetType>,
    pub linked_sim: Option<&'a SimCard>,
    pub sector_name: Option<&'a str>,
    pub checklist: Option<&'a ReturnChecklist>,
    pub notes: Option<&'a str>,
}

impl<'a> TermRequest<'a> {
    pub fn new(
        user: &'a User,
        asset: &'a Asset,
        settings: &'a Settings,
        action_type: ActionType,
    ) -> Self {
        Self {
            user,
            asset,
            settings,
            action_type,
            model: None,
            brand: None,
            asset_type: None,
            linked_sim: None,
            sector_name: None,
            checklist: None,
            notes: None,
        }
    }

    /// Borrows a wire request, pairing it with the stored settings.
    pub fn from_request(request: &'a GenerateTermRequest, settings: &'a Settings) -> Self {
        Self {
            user: &request.user,
            asset: &request.asset,
            settings,
            action_type: request.action_type,
            model: request.model.as_ref(),
            brand: request.brand.as_ref(),
            asset_type: request.asset_type.as_ref(),
            linked_sim: request.linked_sim.as_ref(),
            sector_name: request.sector_name.as_deref(),
            checklist: request.checklist.as_ref(),
            notes: request.notes.as_deref(),
        }
    }

    pub fn with_lookups(
        mut self,
        model: Option<&'a Model>,
        brand: Option<&'a Brand>,
        asset_type: Option<&'a AssetType>,
    ) -> Self {
        self.model = model;
        self.brand = brand;
        self.asset_type = asset_type;
        self
    }

    pub fn with_linked_sim(mut self, linked_sim: Option<&'a SimCard>) -> Self {
        self.linked_sim = linked_sim;
        self
    }

    pub fn with_sector_name(mut self, sector_name: Option<&'a str>) -> Self {
        self.sector_name = sector_name;
        self
    }

    pub fn with_checklist(mut self, checklist: Option<&'a ReturnChecklist>) -> Self {
        self.checklist = checklist;
        self
    }

    pub fn with_notes(mut self, notes: Option<&'a str>) -> Self {
        self.notes = notes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::asset::Device;
    use crate::term::resolver::TemplateSource;
    use crate::term::sink::CapturingSink;
    use crate::term::slots::{Placement, Slot};
    use crate::term::substitute::substitute;
    use crate::term::tokens::Token;
    use chrono::{FixedOffset, TimeZone};
    use std::collections::HashMap;

    fn stamp() -> Stamp {
        Stamp {
            issued_at: FixedOffset::west_opt(3 * 3600)
                .unwrap()
                .with_ymd_and_hms(2024, 3, 15, 14, 0, 0)
                .unwrap(),
            term_id: "Q7X2PA".into(),
        }
    }

    fn carlos() -> User {
        User {
            full_name: "Carlos Silva".into(),
            cpf: "123.456.789-00".into(),
            rg: None,
            address: "Rua Augusta, 100".into(),
            email: "carlos@empresa.com.br".into(),
            sector_id: "ti".into(),
        }
    }

    fn notebook() -> Asset {
        Asset::Device(Device {
            serial_number: "5CG1234XYZ".into(),
            asset_tag: "PAT-0107".into(),
            imei: None,
            accessories: vec![],
        })
    }

    fn all_tokens_template() -> String {
        Token::ALL
            .iter()
            .map(|t| format!("<p>{}</p>", t.placeholder()))
            .collect()
    }

    #[test]
    fn delivery_round_trip() {
        let user = carlos();
        let asset = notebook();
        let settings = Settings {
            term_template: Some("<p>{NOME_COLABORADOR} - {CPF} - {NOME_COLABORADOR}</p>".into()),
            ..Settings::default()
        };
        let request = TermRequest::new(&user, &asset, &settings, ActionType::Entrega);
        let composed = compose(&request, &stamp());

        assert!(composed.html.contains("Carlos Silva"));
        assert!(composed.html.contains("123.456.789-00"));
        assert_eq!(composed.html.matches("{NOME_COLABORADOR}").count(), 0);
        assert_eq!(composed.template_source, TemplateSource::Delivery);
        assert!(composed.placements.is_empty());
    }

    #[test]
    fn return_with_checklist_fills_table_and_clauses() {
        let user = carlos();
        let asset = notebook();
        let settings = Settings {
            return_term_template: Some(
                "<h1>{TIPO_TERMO}</h1><!-- CHECKLIST_ITENS --><h3>DECLARAÇÃO</h3><!-- CLAUSULAS_ADICIONAIS -->"
                    .into(),
            ),
            ..Settings::default()
        };
        let checklist: ReturnChecklist =
            [("device", true), ("charger", false)].into_iter().collect();
        let request = TermRequest::new(&user, &asset, &settings, ActionType::Devolucao)
            .with_checklist(Some(&checklist));
        let composed = compose(&request, &stamp());

        assert!(composed.html.contains("<h1>Devolução</h1>"));
        assert_eq!(composed.html.matches(r#"<tr class="checklist-item">"#).count(), 2);

        let charger_row = composed
            .html
            .split(r#"<tr class="checklist-item">"#)
            .find(|row| row.contains(">charger<"))
            .expect("charger row");
        assert!(charger_row.contains("NÃO"));
        assert!(charger_row.contains("PENDENTE"));

        let warning = &composed.html[composed.html.find("pending-items").expect("warning block")..];
        assert!(warning.contains("charger"));
        assert!(!warning.contains(">device<"));

        assert!(!composed.html.contains("<!-- CHECKLIST_ITENS -->"));
        assert!(!composed.html.contains("<!-- CLAUSULAS_ADICIONAIS -->"));
        assert_eq!(
            composed.placements,
            vec![
                (Slot::ItemsTable, Placement::Anchor),
                (Slot::Clauses, Placement::Anchor)
            ]
        );
    }

    #[test]
    fn return_falls_back_to_delivery_template() {
        let user = carlos();
        let asset = notebook();
        let settings = Settings {
            term_template: Some("<p>Termo de {TIPO_TERMO}: {NOME_COLABORADOR}</p>".into()),
            return_term_template: None,
            ..Settings::default()
        };
        let request = TermRequest::new(&user, &asset, &settings, ActionType::Devolucao);
        let composed = compose(&request, &stamp());
        assert_eq!(composed.html, "<p>Termo de Devolução: Carlos Silva</p>");
        assert_eq!(composed.template_source, TemplateSource::DeliveryFallback);
    }

    #[test]
    fn return_checklist_without_anchor_uses_heading_and_drops_clauses() {
        let user = carlos();
        let asset = notebook();
        let settings = Settings {
            return_term_template: Some("<p>{NOME_COLABORADOR}</p><h4>DECLARAÇÃO</h4>".into()),
            ..Settings::default()
        };
        let checklist: ReturnChecklist = [("cable", false)].into_iter().collect();
        let request = TermRequest::new(&user, &asset, &settings, ActionType::Devolucao)
            .with_checklist(Some(&checklist));
        let composed = compose(&request, &stamp());

        let table_at = composed.html.find("Checklist de Itens Devolvidos").unwrap();
        let heading_at = composed.html.find("<h4>DECLARAÇÃO</h4>").unwrap();
        assert!(table_at < heading_at);
        assert!(!composed.html.contains("pending-items"));
        assert_eq!(composed.dropped_slots(), vec![Slot::Clauses]);
    }

    #[test]
    fn heading_text_in_notes_does_not_move_the_table() {
        let user = carlos();
        let asset = notebook();
        let settings = Settings {
            return_term_template: Some("<p>{OBSERVACOES}</p><h4>DECLARAÇÃO</h4>".into()),
            ..Settings::default()
        };
        let checklist: ReturnChecklist = [("device", true)].into_iter().collect();
        let request = TermRequest::new(&user, &asset, &settings, ActionType::Devolucao)
            .with_checklist(Some(&checklist))
            .with_notes(Some("Ver DECLARAÇÃO anexa"));
        let composed = compose(&request, &stamp());

        assert!(composed.html.contains("<p>Ver DECLARAÇÃO anexa</p>"));
        let notes_end = composed.html.find("</p>").unwrap();
        let table_at = composed.html.find(r#"<div class="checklist""#).unwrap();
        let heading_at = composed.html.find("<h4>DECLARAÇÃO</h4>").unwrap();
        assert!(notes_end < table_at);
        assert!(table_at < heading_at);
        assert!(composed.placements.contains(&(Slot::ItemsTable, Placement::BeforeHeading)));
        assert!(!composed.html.contains("FALLBACK"));
    }

    #[test]
    fn delivery_ignores_checklist() {
        let user = carlos();
        let asset = notebook();
        let settings = Settings::with_default_templates();
        let checklist: ReturnChecklist = [("device", false)].into_iter().collect();
        let request = TermRequest::new(&user, &asset, &settings, ActionType::Entrega)
            .with_checklist(Some(&checklist));
        let composed = compose(&request, &stamp());
        assert!(!composed.html.contains("Checklist de Itens Devolvidos"));
        assert!(!composed.html.contains("PENDENTE"));
        assert!(composed.placements.is_empty());
    }

    #[test]
    fn linked_sim_only_appears_when_given() {
        let user = carlos();
        let asset = notebook();
        let settings = Settings::with_default_templates();
        let sim = SimCard {
            phone_number: "(11) 95555-4444".into(),
            operator: "Vivo".into(),
            iccid: "89551093000000001234".into(),
        };

        let with = compose(
            &TermRequest::new(&user, &asset, &settings, ActionType::Entrega)
                .with_linked_sim(Some(&sim)),
            &stamp(),
        );
        assert!(with.html.contains("(11) 95555-4444"));
        assert!(with.html.contains("89551093000000001234"));
        assert!(with.html.contains("Item Vinculado: Chip / SIM Card"));

        let without = compose(
            &TermRequest::new(&user, &asset, &settings, ActionType::Entrega),
            &stamp(),
        );
        assert!(!without.html.contains("(11) 95555-4444"));
        assert!(!without.html.contains("89551093000000001234"));
        assert!(!without.html.contains("Item Vinculado"));
    }

    #[test]
    fn substitution_is_idempotent_on_output() {
        let mut user = carlos();
        user.full_name = "Carlos {CPF} Silva".into();
        let asset = notebook();
        let settings = Settings {
            app_name: "Acme {NOME_EMPRESA}".into(),
            term_template: Some(all_tokens_template()),
            ..Settings::default()
        };
        let request = TermRequest::new(&user, &asset, &settings, ActionType::Entrega)
            .with_notes(Some("ver {OBSERVACOES}"));
        let output = compose(&request, &stamp()).html;

        let mut values: HashMap<&str, String> = HashMap::new();
        for token in Token::ALL {
            values.insert(token.name(), "CHANGED".to_string());
        }
        assert_eq!(substitute(&output, &values), output);
        assert!(!output.contains("CHANGED"));
    }

    #[test]
    fn full_default_return_term() {
        let user = carlos();
        let asset = notebook();
        let settings = Settings {
            app_name: "Acme Tecnologia".into(),
            cnpj: Some("12.345.678/0001-90".into()),
            logo_url: "https://acme.example/logo.png".into(),
            ..Settings::with_default_templates()
        };
        let checklist: ReturnChecklist = [
            ("device", true),
            ("charger", true),
            ("cable", true),
            ("case", true),
        ]
        .into_iter()
        .collect();
        let request = TermRequest::new(&user, &asset, &settings, ActionType::Devolucao)
            .with_sector_name(Some("Financeiro"))
            .with_checklist(Some(&checklist));
        let composed = compose(&request, &stamp());

        assert!(composed.html.contains("Nº Q7X2PA"));
        assert!(composed.html.contains(&stamp().city_date()));
        assert!(composed.html.contains("15 de março de 2024"));
        assert!(composed.html.contains("Financeiro"));
        assert!(composed.html.contains("https://acme.example/logo.png"));
        assert!(composed.html.contains("Equipamento"));
        assert!(composed.html.contains("Carregador, Cabo de dados (Padrão)"));
        assert!(!composed.html.contains("pending-items"));
        for token in Token::ALL {
            assert!(!composed.html.contains(&token.placeholder()), "{:?} left over", token);
        }
        assert!(composed.dropped_slots().is_empty());
    }

    #[test]
    fn generate_into_hands_document_to_sink() {
        let user = carlos();
        let asset = notebook();
        let settings = Settings::default();
        let mut sink = CapturingSink::new();
        let composed = generate_into(
            &TermRequest::new(&user, &asset, &settings, ActionType::Entrega),
            &mut sink,
        );
        assert_eq!(sink.documents().len(), 1);
        assert_eq!(sink.last(), Some(composed.html.as_str()));
        assert!(composed.html.contains("Erro: Template de Entrega não configurado."));
        assert_eq!(composed.term_id.len(), 6);
    }

    #[test]
    fn generated_term_id_is_six_uppercase_chars() {
        let user = carlos();
        let asset = notebook();
        let settings = Settings {
            term_template: Some("{ID_TERMO_AUTO}".into()),
            ..Settings::default()
        };
        let request = TermRequest::new(&user, &asset, &settings, ActionType::Entrega);
        let first = generate(&request);
        assert_eq!(first.len(), 6);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn wire_request_maps_onto_term_request() {
        let json = r#"{
            "user": {"fullName": "Ana Souza", "cpf": "987.654.321-00", "sectorId": "rh"},
            "asset": {"kind": "sim", "phoneNumber": "(21) 90000-1111", "operator": "Oi", "iccid": "8955"},
            "actionType": "DEVOLUCAO",
            "sectorName": "RH",
            "checklist": {"sim": false, "manual": true}
        }"#;
        let wire: GenerateTermRequest = serde_json::from_str(json).unwrap();
        let settings = Settings {
            return_term_template: Some(
                "{MODELO_DISPOSITIVO}|{NOME_SETOR}<!-- CHECKLIST_ITENS --><!-- CLAUSULAS_ADICIONAIS -->".into(),
            ),
            ..Settings::default()
        };
        let request = TermRequest::from_request(&wire, &settings);
        let html = compose(&request, &stamp()).html;
        assert!(html.starts_with("Chip SIM Card - Oi|RH"));
        assert!(html.contains("pending-items"));
        let rows: Vec<&str> = html.split(r#"<tr class="checklist-item">"#).skip(1).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains(">sim<"));
        assert!(rows[1].contains(">manual<"));
    }
}
