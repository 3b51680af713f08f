use crate::types::{ItemTypeArg, LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};
use itemreg_engine::FilterSpec;
use itemreg_types::ItemId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "itemreg")]
#[command(about = "List, filter, edit and export patrimonial items", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Collection endpoint of the registry API (overrides ITEMREG_API_URL and config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory holding config.toml (defaults to ITEMREG_PATH or the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log verbosity on stderr; RUST_LOG takes precedence when set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List items matching the filters")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    #[command(about = "List the departments available for filtering")]
    Departments,

    #[command(about = "Show every field of one item")]
    Show { id: ItemId },

    #[command(about = "Register a new item")]
    Create {
        #[command(flatten)]
        fields: NewItemArgs,
    },

    #[command(about = "Change fields of an existing item")]
    Update {
        id: ItemId,

        #[command(flatten)]
        fields: UpdateItemArgs,
    },

    #[command(about = "Delete an item")]
    Delete {
        id: ItemId,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    #[command(about = "Write a PDF report of the filtered or selected items")]
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Report only these ids (comma separated); ids outside the filtered view are skipped
        #[arg(long, value_delimiter = ',', conflicts_with = "all_filtered")]
        select: Option<Vec<ItemId>>,

        /// Report every item of the filtered view (default)
        #[arg(long)]
        all_filtered: bool,

        #[arg(long)]
        title: Option<String>,

        /// Directory for the PDF (defaults to the configured one, then the current directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    #[command(about = "Inspect or change the configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Store the API collection URL in config.toml")]
    SetUrl { url: String },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive text matched against code, description, process and department
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    #[arg(long = "type", value_name = "TYPE")]
    pub item_type: Option<ItemTypeArg>,

    /// Exact department name
    #[arg(long)]
    pub department: Option<String>,

    /// Minimum unit value (inclusive)
    #[arg(long)]
    pub min_value: Option<f64>,

    /// Maximum unit value (inclusive)
    #[arg(long)]
    pub max_value: Option<f64>,
}

impl FilterArgs {
    pub fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        if let Some(query) = &self.query {
            spec = spec.query(query.clone());
        }
        if let Some(item_type) = self.item_type {
            spec = spec.item_type(item_type.into());
        }
        if let Some(department) = &self.department {
            spec = spec.department(department.clone());
        }
        if let Some(min) = self.min_value {
            spec = spec.min_value(min);
        }
        if let Some(max) = self.max_value {
            spec = spec.max_value(max);
        }
        spec
    }
}

#[derive(Debug, Clone, Args)]
pub struct NewItemArgs {
    /// Item code, e.g. 2024-MAT-001
    #[arg(long)]
    pub code: String,

    #[arg(long)]
    pub description: String,

    #[arg(long = "type", value_name = "TYPE")]
    pub item_type: ItemTypeArg,

    #[arg(long)]
    pub unit_value: f64,

    #[arg(long)]
    pub quantity: u32,

    #[arg(long)]
    pub department: String,

    /// Procurement process, e.g. "PREGÃO 001/2024"
    #[arg(long)]
    pub process: String,

    #[arg(long)]
    pub fiscal_year: i32,

    #[arg(long)]
    pub process_number: Option<String>,

    #[arg(long)]
    pub budget_unit: Option<String>,

    #[arg(long)]
    pub funding_source: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct UpdateItemArgs {
    #[arg(long)]
    pub code: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long = "type", value_name = "TYPE")]
    pub item_type: Option<ItemTypeArg>,

    #[arg(long)]
    pub unit_value: Option<f64>,

    #[arg(long)]
    pub quantity: Option<u32>,

    #[arg(long)]
    pub department: Option<String>,

    #[arg(long)]
    pub process: Option<String>,

    #[arg(long)]
    pub fiscal_year: Option<i32>,

    #[arg(long)]
    pub process_number: Option<String>,

    #[arg(long)]
    pub budget_unit: Option<String>,

    #[arg(long)]
    pub funding_source: Option<String>,
}

impl UpdateItemArgs {
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.description.is_none()
            && self.item_type.is_none()
            && self.unit_value.is_none()
            && self.quantity.is_none()
            && self.department.is_none()
            && self.process.is_none()
            && self.fiscal_year.is_none()
            && self.process_number.is_none()
            && self.budget_unit.is_none()
            && self.funding_source.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemreg_engine::{DepartmentFilter, TypeFilter};
    use itemreg_types::ItemType;

    #[test]
    fn test_filter_flags_build_spec() {
        let cli = Cli::try_parse_from([
            "itemreg",
            "list",
            "--query",
            "educa",
            "--type",
            "service",
            "--department",
            "Secretaria de Saúde",
            "--min-value",
            "100",
        ])
        .unwrap();

        let Commands::List { filter } = cli.command else {
            panic!("expected list command");
        };
        let spec = filter.to_spec();
        assert_eq!(spec.query, "educa");
        assert_eq!(spec.item_type, TypeFilter::Only(ItemType::Service));
        assert_eq!(
            spec.department,
            DepartmentFilter::Exact("Secretaria de Saúde".to_string())
        );
        assert_eq!(spec.min_value, Some(100.0));
        assert_eq!(spec.max_value, None);
    }

    #[test]
    fn test_no_filter_flags_is_default_spec() {
        assert!(!FilterArgs::default().to_spec().is_active());
    }

    #[test]
    fn test_export_select_list() {
        let cli = Cli::try_parse_from(["itemreg", "export", "--select", "3,5"]).unwrap();
        let Commands::Export { select, .. } = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(select, Some(vec![3, 5]));
    }

    #[test]
    fn test_select_conflicts_with_all_filtered() {
        let result =
            Cli::try_parse_from(["itemreg", "export", "--select", "3", "--all-filtered"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["itemreg", "departments", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }
}
