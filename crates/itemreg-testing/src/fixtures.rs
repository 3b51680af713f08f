//! Sample items shaped like the registry server's payloads.

use itemreg_types::{Item, ItemDraft, ItemType};

/// Minimal persisted item; every optional field left empty
pub fn item(id: u64, code: &str, department: &str, unit_value: f64) -> Item {
    Item {
        id: Some(id),
        code: code.to_string(),
        description: format!("Item de teste {}", code),
        item_type: ItemType::Material,
        unit_value,
        quantity: 1,
        registration_date: None,
        registration_user: None,
        department: department.to_string(),
        process: String::new(),
        process_number: None,
        fiscal_year: None,
        budget_unit: None,
        funding_source: None,
    }
}

/// The two-item collection used throughout the filter scenarios:
/// a cheap education material and an expensive health service.
pub fn two_departments() -> Vec<Item> {
    let mut service = item(2, "2024-SER-002", "Secretaria de Saúde", 500.0);
    service.item_type = ItemType::Service;
    vec![
        item(1, "2024-MAT-001", "Secretaria de Educação", 10.0),
        service,
    ]
}

/// A fuller collection with every field populated
pub fn inventory() -> Vec<Item> {
    vec![
        Item {
            id: Some(1),
            code: "2024-MAT-001".to_string(),
            description: "Carteira escolar com prancheta".to_string(),
            item_type: ItemType::Material,
            unit_value: 189.9,
            quantity: 120,
            registration_date: Some("2024-03-15T10:30:00".to_string()),
            registration_user: Some("maria.souza".to_string()),
            department: "Secretaria de Educação".to_string(),
            process: "PREGÃO 012/2024".to_string(),
            process_number: Some("12345-67.2024.1.01.00.01".to_string()),
            fiscal_year: Some(2024),
            budget_unit: Some("020101".to_string()),
            funding_source: Some("150000".to_string()),
        },
        Item {
            id: Some(2),
            code: "2024-SER-002".to_string(),
            description: "Manutenção preventiva de ambulâncias".to_string(),
            item_type: ItemType::Service,
            unit_value: 4500.0,
            quantity: 6,
            registration_date: Some("2024-04-02T08:00:00Z".to_string()),
            registration_user: Some("joao.lima".to_string()),
            department: "Secretaria de Saúde".to_string(),
            process: "DISPENSA 014/2024".to_string(),
            process_number: None,
            fiscal_year: Some(2024),
            budget_unit: Some("030201".to_string()),
            funding_source: Some("160000".to_string()),
        },
        Item {
            id: Some(3),
            code: "2023-OUT-117".to_string(),
            description: "Taxa de inscrição em congresso técnico".to_string(),
            item_type: ItemType::Other,
            unit_value: 850.0,
            quantity: 2,
            registration_date: None,
            registration_user: None,
            department: "Secretaria de Administração".to_string(),
            process: "INEXIGIBILIDADE 003/2023".to_string(),
            process_number: None,
            fiscal_year: Some(2023),
            budget_unit: None,
            funding_source: None,
        },
        Item {
            id: Some(4),
            code: "2024-MAT-045".to_string(),
            description: "Kit de material pedagógico infantil".to_string(),
            item_type: ItemType::Material,
            unit_value: 75.5,
            quantity: 300,
            registration_date: Some("2024-05-20".to_string()),
            registration_user: Some("maria.souza".to_string()),
            department: "Secretaria de Educação".to_string(),
            process: "PREGÃO 012/2024".to_string(),
            process_number: None,
            fiscal_year: Some(2024),
            budget_unit: Some("020101".to_string()),
            funding_source: Some("150000".to_string()),
        },
    ]
}

/// A draft that passes every validation rule
pub fn valid_draft() -> ItemDraft {
    ItemDraft {
        code: "2024-MAT-100".to_string(),
        description: "Projetor multimídia para sala de aula".to_string(),
        item_type: ItemType::Material,
        unit_value: 3200.0,
        quantity: 10,
        department: "Secretaria de Educação".to_string(),
        process: "PREGÃO 021/2024".to_string(),
        process_number: None,
        fiscal_year: Some(2024),
        budget_unit: Some("020101".to_string()),
        funding_source: None,
    }
}
