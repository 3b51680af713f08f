use crate::handlers::print_json;
use crate::types::OutputFormat;
use crate::views::ItemTableView;
use anyhow::Result;
use itemreg_engine::FilterSpec;
use itemreg_runtime::{ItemRepository, Registry};

pub async fn handle<R: ItemRepository>(
    registry: &mut Registry<R>,
    spec: FilterSpec,
    format: OutputFormat,
) -> Result<()> {
    registry.load_filtered(spec).await;
    let store = registry.store();

    match format {
        OutputFormat::Json => print_json(&store.filtered()),
        OutputFormat::Plain => {
            print!("{}", ItemTableView::new(store.filtered(), store.count_label()));
            Ok(())
        }
    }
}
