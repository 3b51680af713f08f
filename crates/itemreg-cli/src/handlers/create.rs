use crate::args::NewItemArgs;
use crate::handlers::print_json;
use crate::types::OutputFormat;
use crate::views::ItemDetailView;
use anyhow::{Context, Result};
use itemreg_runtime::{ItemRepository, Registry};
use itemreg_types::ItemDraft;

impl From<NewItemArgs> for ItemDraft {
    fn from(args: NewItemArgs) -> Self {
        ItemDraft {
            code: args.code,
            description: args.description,
            item_type: args.item_type.into(),
            unit_value: args.unit_value,
            quantity: args.quantity,
            department: args.department,
            process: args.process,
            process_number: args.process_number,
            fiscal_year: Some(args.fiscal_year),
            budget_unit: args.budget_unit,
            funding_source: args.funding_source,
        }
    }
}

pub async fn handle<R: ItemRepository>(
    registry: &mut Registry<R>,
    fields: NewItemArgs,
    format: OutputFormat,
) -> Result<()> {
    let draft = ItemDraft::from(fields);
    let created = registry
        .create(&draft)
        .await
        .context("Failed to create item")?;

    match format {
        OutputFormat::Json => print_json(&created),
        OutputFormat::Plain => {
            println!("Item criado com sucesso.");
            print!("{}", ItemDetailView::new(&created));
            Ok(())
        }
    }
}
