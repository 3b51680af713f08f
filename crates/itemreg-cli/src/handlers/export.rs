use crate::handlers::print_json;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use itemreg_engine::FilterSpec;
use itemreg_runtime::{ItemRepository, Registry};
use itemreg_types::ItemId;

pub async fn handle<R: ItemRepository>(
    registry: &mut Registry<R>,
    spec: FilterSpec,
    select: Option<Vec<ItemId>>,
    title: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    registry.load_filtered(spec).await;

    let (path, rows) = match select {
        Some(ids) => {
            let visible: Vec<ItemId> = {
                let view = registry.store().filtered();
                ids.iter()
                    .copied()
                    .filter(|id| view.iter().any(|item| item.id == Some(*id)))
                    .collect()
            };
            if visible.len() < ids.len() {
                tracing::warn!(
                    requested = ids.len(),
                    selected = visible.len(),
                    "some ids are not in the filtered view and were skipped"
                );
            }

            registry.store_mut().select_ids(&visible);
            let path = registry
                .export_selected(title.as_deref())
                .context("Failed to export selected items")?;
            (path, registry.store().selection().count())
        }
        None => {
            let path = registry
                .export_filtered(title.as_deref())
                .context("Failed to export items")?;
            (path, registry.store().filtered_count())
        }
    };

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "items": rows,
        })),
        OutputFormat::Plain => {
            println!("Relatório gerado: {} ({} itens)", path.display(), rows);
            Ok(())
        }
    }
}
