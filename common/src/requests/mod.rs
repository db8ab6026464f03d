use serde::{Deserialize, Serialize};

use crate::model::action::ActionType;
use crate::model::asset::{Asset, SimCard};
use crate::model::checklist::ReturnChecklist;
use crate::model::lookup::{AssetType, Brand, Model};
use crate::model::user::User;

/// Request payload for the term generation and print endpoints.
///
/// Everything the generator needs except the settings, which the backend
/// reads from its own store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTermRequest {
    pub user: User,
    pub asset: Asset,
    pub action_type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_sim: Option<SimCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<ReturnChecklist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
