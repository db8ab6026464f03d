use serde::{Deserialize, Serialize};

/// Which side of the checkout/checkin lifecycle a term documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Asset handed over to the employee.
    Entrega,
    /// Asset handed back by the employee.
    Devolucao,
}

impl ActionType {
    /// Human-readable label used for the `{TIPO_TERMO}` token.
    pub fn label(self) -> &'static str {
        match self {
            ActionType::Entrega => "Entrega",
            ActionType::Devolucao => "Devolução",
        }
    }
}
