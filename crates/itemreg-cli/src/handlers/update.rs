use crate::args::UpdateItemArgs;
use crate::handlers::print_json;
use crate::types::OutputFormat;
use crate::views::ItemDetailView;
use anyhow::{Context, Result};
use itemreg_runtime::{ItemRepository, Registry};
use itemreg_types::{ItemDraft, ItemId};

/// Overlay the given flags on the stored draft
fn apply(draft: &mut ItemDraft, fields: UpdateItemArgs) {
    if let Some(code) = fields.code {
        draft.code = code;
    }
    if let Some(description) = fields.description {
        draft.description = description;
    }
    if let Some(item_type) = fields.item_type {
        draft.item_type = item_type.into();
    }
    if let Some(unit_value) = fields.unit_value {
        draft.unit_value = unit_value;
    }
    if let Some(quantity) = fields.quantity {
        draft.quantity = quantity;
    }
    if let Some(department) = fields.department {
        draft.department = department;
    }
    if let Some(process) = fields.process {
        draft.process = process;
    }
    if let Some(year) = fields.fiscal_year {
        draft.fiscal_year = Some(year);
    }
    if fields.process_number.is_some() {
        draft.process_number = fields.process_number;
    }
    if fields.budget_unit.is_some() {
        draft.budget_unit = fields.budget_unit;
    }
    if fields.funding_source.is_some() {
        draft.funding_source = fields.funding_source;
    }
}

pub async fn handle<R: ItemRepository>(
    registry: &mut Registry<R>,
    id: ItemId,
    fields: UpdateItemArgs,
    format: OutputFormat,
) -> Result<()> {
    if fields.is_empty() {
        anyhow::bail!("Nothing to update: pass at least one field flag");
    }

    let current = registry
        .get(id)
        .await
        .with_context(|| format!("Failed to load item {}", id))?;

    let mut draft = current.to_draft();
    apply(&mut draft, fields);

    let updated = registry
        .update(id, &draft)
        .await
        .with_context(|| format!("Failed to update item {}", id))?;

    match format {
        OutputFormat::Json => print_json(&updated),
        OutputFormat::Plain => {
            println!("Item atualizado com sucesso.");
            print!("{}", ItemDetailView::new(&updated));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemTypeArg;
    use itemreg_types::ItemType;

    fn draft() -> ItemDraft {
        ItemDraft {
            code: "2024-MAT-001".to_string(),
            description: "Carteira escolar com prancheta".to_string(),
            item_type: ItemType::Material,
            unit_value: 189.9,
            quantity: 120,
            department: "Secretaria de Educação".to_string(),
            process: "PREGÃO 012/2024".to_string(),
            process_number: None,
            fiscal_year: Some(2024),
            budget_unit: Some("020101".to_string()),
            funding_source: None,
        }
    }

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut updated = draft();
        apply(
            &mut updated,
            UpdateItemArgs {
                quantity: Some(80),
                item_type: Some(ItemTypeArg::Other),
                ..UpdateItemArgs::default()
            },
        );

        assert_eq!(updated.quantity, 80);
        assert_eq!(updated.item_type, ItemType::Other);
        assert_eq!(updated.code, "2024-MAT-001");
        assert_eq!(updated.budget_unit.as_deref(), Some("020101"));
    }
}
