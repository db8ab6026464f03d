//! Human-readable description of the asset a term is about.

use crate::model::asset::Asset;
use crate::model::lookup::{AssetType, Brand, Model};

pub const FALLBACK_ASSET_NAME: &str = "Equipamento";
pub const DEFAULT_DEVICE_ACCESSORIES: &str = "Carregador, Cabo de dados (Padrão)";
pub const DEFAULT_SIM_ACCESSORIES: &str = "Cartão do Chip (PIN/PUK)";
pub const SIM_NAME_PREFIX: &str = "Chip SIM Card - ";
pub const NO_SERIAL: &str = "N/A";

/// Display values derived from an asset. Raw, not yet HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub asset_name: String,
    pub serial_display: String,
    pub id_code_display: String,
    pub accessories_display: String,
}

impl AssetDescriptor {
    pub fn derive(
        asset: &Asset,
        model: Option<&Model>,
        brand: Option<&Brand>,
        asset_type: Option<&AssetType>,
    ) -> Self {
        match asset {
            Asset::Device(device) => {
                let name = [
                    asset_type.map(|t| t.name.as_str()),
                    brand.map(|b| b.name.as_str()),
                    model.map(|m| m.name.as_str()),
                ]
                .into_iter()
                .flatten()
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");

                let id_code_display = match device.imei.as_deref().filter(|i| !i.trim().is_empty()) {
                    Some(imei) => format!("{} / IMEI: {}", device.asset_tag, imei),
                    None => device.asset_tag.clone(),
                };

                let accessories_display = if device.accessories.is_empty() {
                    DEFAULT_DEVICE_ACCESSORIES.to_string()
                } else {
                    device
                        .accessories
                        .iter()
                        .map(|a| a.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                };

                Self {
                    asset_name: if name.is_empty() {
                        FALLBACK_ASSET_NAME.to_string()
                    } else {
                        name
                    },
                    serial_display: device.serial_number.clone(),
                    id_code_display,
                    accessories_display,
                }
            }
            Asset::Sim(sim) => Self {
                asset_name: format!("{}{}", SIM_NAME_PREFIX, sim.operator),
                serial_display: NO_SERIAL.to_string(),
                id_code_display: sim.iccid.clone(),
                accessories_display: DEFAULT_SIM_ACCESSORIES.to_string(),
            },
        }
    }
}
