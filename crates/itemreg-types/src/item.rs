use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::util::format_display_date;

/// Server-assigned item identifier
pub type ItemId = u64;

/// Item classification
///
/// Wire values are the server's Portuguese names (`MATERIAL`, `SERVICO`, `OUTROS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "MATERIAL")]
    Material,
    #[serde(rename = "SERVICO")]
    Service,
    #[serde(rename = "OUTROS")]
    Other,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::Material, ItemType::Service, ItemType::Other];

    pub fn as_wire_str(&self) -> &'static str {
        match self {
            ItemType::Material => "MATERIAL",
            ItemType::Service => "SERVICO",
            ItemType::Other => "OUTROS",
        }
    }

    /// Human-facing label used in tables
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Material => "Material",
            ItemType::Service => "Serviço",
            ItemType::Other => "Outros",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl FromStr for ItemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "material" => Ok(ItemType::Material),
            "service" | "servico" | "serviço" => Ok(ItemType::Service),
            "other" | "outros" => Ok(ItemType::Other),
            _ => Err(Error::InvalidItemType(s.to_string())),
        }
    }
}

/// A registry record as returned by the item collection endpoint
///
/// `id` is present on every item the repository returns; it is `None` only
/// while a record has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,

    #[serde(rename = "codigo", default)]
    pub code: String,

    #[serde(rename = "descricao", default)]
    pub description: String,

    #[serde(rename = "tipo")]
    pub item_type: ItemType,

    #[serde(rename = "valorUnitario", default)]
    pub unit_value: f64,

    #[serde(rename = "quantidade", default)]
    pub quantity: u32,

    #[serde(rename = "dataCadastro", default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,

    #[serde(rename = "usuarioCadastro", default, skip_serializing_if = "Option::is_none")]
    pub registration_user: Option<String>,

    #[serde(rename = "orgaoResponsavel", default)]
    pub department: String,

    #[serde(rename = "processo", default)]
    pub process: String,

    #[serde(rename = "numeroProcesso", default, skip_serializing_if = "Option::is_none")]
    pub process_number: Option<String>,

    #[serde(rename = "exercicioFiscal", default, skip_serializing_if = "Option::is_none")]
    pub fiscal_year: Option<i32>,

    #[serde(rename = "unidadeOrcamentaria", default, skip_serializing_if = "Option::is_none")]
    pub budget_unit: Option<String>,

    #[serde(rename = "fonteRecurso", default, skip_serializing_if = "Option::is_none")]
    pub funding_source: Option<String>,
}

impl Item {
    /// Strip server-owned fields, producing the payload for an update
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            code: self.code.clone(),
            description: self.description.clone(),
            item_type: self.item_type,
            unit_value: self.unit_value,
            quantity: self.quantity,
            department: self.department.clone(),
            process: self.process.clone(),
            process_number: self.process_number.clone(),
            fiscal_year: self.fiscal_year,
            budget_unit: self.budget_unit.clone(),
            funding_source: self.funding_source.clone(),
        }
    }

    /// `unit_value * quantity`
    pub fn total_value(&self) -> f64 {
        self.unit_value * f64::from(self.quantity)
    }

    /// Registration date as `DD/MM/YYYY`, or `N/A` when the server sent none
    pub fn registration_date_display(&self) -> String {
        format_display_date(self.registration_date.as_deref())
    }
}

/// Create/update payload: the item shape without server-assigned fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "tipo")]
    pub item_type: ItemType,

    #[serde(rename = "valorUnitario")]
    pub unit_value: f64,

    #[serde(rename = "quantidade")]
    pub quantity: u32,

    #[serde(rename = "orgaoResponsavel")]
    pub department: String,

    #[serde(rename = "processo")]
    pub process: String,

    #[serde(rename = "numeroProcesso", default, skip_serializing_if = "Option::is_none")]
    pub process_number: Option<String>,

    #[serde(rename = "exercicioFiscal", default, skip_serializing_if = "Option::is_none")]
    pub fiscal_year: Option<i32>,

    #[serde(rename = "unidadeOrcamentaria", default, skip_serializing_if = "Option::is_none")]
    pub budget_unit: Option<String>,

    #[serde(rename = "fonteRecurso", default, skip_serializing_if = "Option::is_none")]
    pub funding_source: Option<String>,
}

impl ItemDraft {
    /// Materialize the draft as a persisted item with the given id.
    ///
    /// Registration fields stay empty; the caller fills them when it plays
    /// the server role.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id: Some(id),
            code: self.code,
            description: self.description,
            item_type: self.item_type,
            unit_value: self.unit_value,
            quantity: self.quantity,
            registration_date: None,
            registration_user: None,
            department: self.department,
            process: self.process,
            process_number: self.process_number,
            fiscal_year: self.fiscal_year,
            budget_unit: self.budget_unit,
            funding_source: self.funding_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_server_payload() {
        let value = json!({
            "id": 7,
            "codigo": "2024-MAT-001",
            "descricao": "Cadeira giratória",
            "tipo": "SERVICO",
            "valorUnitario": 10.5,
            "quantidade": 3,
            "dataCadastro": "2024-03-01T10:00:00",
            "orgaoResponsavel": "Secretaria de Educação",
            "processo": "PREGÃO 001/2024",
            "exercicioFiscal": 2024
        });

        let item: Item = serde_json::from_value(value).unwrap();
        assert_eq!(item.id, Some(7));
        assert_eq!(item.item_type, ItemType::Service);
        assert_eq!(item.department, "Secretaria de Educação");
        assert_eq!(item.fiscal_year, Some(2024));
        assert!(item.budget_unit.is_none());
        assert_eq!(item.registration_date_display(), "01/03/2024");
    }

    #[test]
    fn test_draft_omits_server_fields() {
        let item = Item {
            id: Some(1),
            code: "2024-MAT-001".to_string(),
            description: "Mesa de reunião".to_string(),
            item_type: ItemType::Material,
            unit_value: 1.0,
            quantity: 1,
            registration_date: Some("2024-01-01T00:00:00Z".to_string()),
            registration_user: Some("admin".to_string()),
            department: "Secretaria de Saúde".to_string(),
            process: "DISPENSA 2/2024".to_string(),
            process_number: None,
            fiscal_year: None,
            budget_unit: None,
            funding_source: None,
        };

        let value = serde_json::to_value(item.to_draft()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("dataCadastro"));
        assert!(!object.contains_key("usuarioCadastro"));
        assert!(!object.contains_key("numeroProcesso"));
        assert_eq!(object["tipo"], "MATERIAL");
    }

    #[test]
    fn test_item_type_from_str() {
        assert_eq!("material".parse::<ItemType>().unwrap(), ItemType::Material);
        assert_eq!("SERVICO".parse::<ItemType>().unwrap(), ItemType::Service);
        assert_eq!("service".parse::<ItemType>().unwrap(), ItemType::Service);
        assert_eq!("Outros".parse::<ItemType>().unwrap(), ItemType::Other);
        assert!("equipment".parse::<ItemType>().is_err());
    }
}
