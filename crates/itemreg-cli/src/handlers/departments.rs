use crate::handlers::print_json;
use crate::types::OutputFormat;
use crate::views::DepartmentListView;
use anyhow::Result;
use itemreg_runtime::{ItemRepository, Registry};

pub async fn handle<R: ItemRepository>(
    registry: &mut Registry<R>,
    format: OutputFormat,
) -> Result<()> {
    registry.reload().await;
    let options = registry.store().department_options();

    match format {
        OutputFormat::Json => {
            let names: Vec<String> = options.iter().map(|option| option.to_string()).collect();
            print_json(&names)
        }
        OutputFormat::Plain => {
            print!("{}", DepartmentListView::new(options));
            Ok(())
        }
    }
}
