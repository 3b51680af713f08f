use crate::handlers::print_json;
use crate::types::OutputFormat;
use crate::views::ItemDetailView;
use anyhow::{Context, Result};
use itemreg_runtime::{ItemRepository, Registry};
use itemreg_types::ItemId;

pub async fn handle<R: ItemRepository>(
    registry: &Registry<R>,
    id: ItemId,
    format: OutputFormat,
) -> Result<()> {
    let item = registry
        .get(id)
        .await
        .with_context(|| format!("Failed to load item {}", id))?;

    match format {
        OutputFormat::Json => print_json(&item),
        OutputFormat::Plain => {
            print!("{}", ItemDetailView::new(&item));
            Ok(())
        }
    }
}
