use crate::handlers::print_json;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use itemreg_runtime::{ItemRepository, Registry};
use itemreg_types::ItemId;

pub async fn handle<R: ItemRepository>(
    registry: &mut Registry<R>,
    id: ItemId,
    confirmed: bool,
    format: OutputFormat,
) -> Result<()> {
    if !confirmed {
        anyhow::bail!(
            "Refusing to delete item {} without confirmation; pass --yes",
            id
        );
    }

    registry
        .delete(id)
        .await
        .with_context(|| format!("Failed to delete item {}", id))?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "deleted": id })),
        OutputFormat::Plain => {
            println!("Item {} excluído com sucesso.", id);
            Ok(())
        }
    }
}
