//! Fictitious employee and device the preview is composed with.

use common::model::action::ActionType;
use common::model::asset::{Accessory, Asset, Device, SimCard};
use common::model::checklist::ReturnChecklist;
use common::model::lookup::{AssetType, Brand, Model};
use common::model::settings::Settings;
use common::model::user::User;
use common::term::TermRequest;

use super::state::TemplateKind;

pub struct SampleTerm {
    user: User,
    asset: Asset,
    model: Model,
    brand: Brand,
    asset_type: AssetType,
    linked_sim: SimCard,
    checklist: ReturnChecklist,
}

impl SampleTerm {
    pub fn new() -> Self {
        Self {
            user: User {
                full_name: "Maria Oliveira".into(),
                cpf: "123.456.789-00".into(),
                rg: Some("12.345.678-9".into()),
                ..User::default()
            },
            asset: Asset::Device(Device {
                serial_number: "R58N123ABC".into(),
                asset_tag: "PAT-0042".into(),
                imei: Some("356789012345678".into()),
                accessories: vec![
                    Accessory {
                        id: None,
                        name: "Carregador".into(),
                    },
                    Accessory {
                        id: None,
                        name: "Capa".into(),
                    },
                ],
            }),
            model: Model {
                id: None,
                name: "Galaxy A54".into(),
            },
            brand: Brand {
                id: None,
                name: "Samsung".into(),
            },
            asset_type: AssetType {
                id: None,
                name: "Smartphone".into(),
            },
            linked_sim: SimCard {
                phone_number: "(11) 91234-5678".into(),
                operator: "Vivo".into(),
                iccid: "8955101234567890123".into(),
            },
            checklist: [("Aparelho", true), ("Carregador", false), ("Capa", true)]
                .into_iter()
                .collect(),
        }
    }

    /// Request for the template selected in the editor. Return terms carry
    /// a checklist with one pending item so the clause block is visible.
    pub fn request<'a>(&'a self, settings: &'a Settings, kind: TemplateKind) -> TermRequest<'a> {
        let action = match kind {
            TemplateKind::Delivery => ActionType::Entrega,
            TemplateKind::Return => ActionType::Devolucao,
        };
        let request = TermRequest::new(&self.user, &self.asset, settings, action)
            .with_lookups(Some(&self.model), Some(&self.brand), Some(&self.asset_type))
            .with_linked_sim(Some(&self.linked_sim))
            .with_sector_name(Some("Comercial"));

        match kind {
            TemplateKind::Delivery => request,
            TemplateKind::Return => request
                .with_checklist(Some(&self.checklist))
                .with_notes(Some("Carregador será entregue até sexta-feira.")),
        }
    }
}
