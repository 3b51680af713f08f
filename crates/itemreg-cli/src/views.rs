//! Plain-text rendering for terminal output.

use itemreg_engine::DepartmentFilter;
use itemreg_report::format::{format_brl, truncate};
use itemreg_types::Item;
use owo_colors::OwoColorize;
use std::fmt;

const DEFAULT_WIDTH: usize = 100;
/// Columns before the description: id, code, type, value, quantity, department
const FIXED_COLUMNS_WIDTH: usize = 80;
const MIN_DESCRIPTION_WIDTH: usize = 20;
const DEPARTMENT_WIDTH: usize = 22;

/// Turns colour on only for an interactive stdout
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn for_stdout() -> Self {
        use is_terminal::IsTerminal;
        Self::new(std::io::stdout().is_terminal())
    }

    fn header(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn accent(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.bright_black().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w))
        .unwrap_or(DEFAULT_WIDTH)
}

/// Currency for terminals: regular space after the symbol
fn money(value: f64) -> String {
    format_brl(value).replace('\u{a0}', " ")
}

pub struct ItemTableView<'a> {
    items: Vec<&'a Item>,
    count_label: String,
    width: usize,
    palette: Palette,
}

impl<'a> ItemTableView<'a> {
    pub fn new(items: Vec<&'a Item>, count_label: String) -> Self {
        Self {
            items,
            count_label,
            width: terminal_width(),
            palette: Palette::for_stdout(),
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl fmt::Display for ItemTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            writeln!(f, "Nenhum item encontrado.")?;
            return writeln!(f, "{}", self.palette.dim(&self.count_label));
        }

        let description_width = self
            .width
            .saturating_sub(FIXED_COLUMNS_WIDTH)
            .max(MIN_DESCRIPTION_WIDTH);

        let header = format!(
            "{:>4}  {:<14} {:<9} {:>16} {:>7}  {:<22} {}",
            "ID", "Código", "Tipo", "Valor", "Qtd", "Órgão", "Descrição"
        );
        writeln!(f, "{}", self.palette.header(&header))?;

        for item in &self.items {
            let id = item.id.map(|id| id.to_string()).unwrap_or_default();
            writeln!(
                f,
                "{:>4}  {} {:<9} {:>16} {:>7}  {:<22} {}",
                id,
                self.palette.accent(&format!("{:<14}", item.code)),
                item.item_type.label(),
                money(item.unit_value),
                item.quantity,
                truncate(&item.department, DEPARTMENT_WIDTH),
                truncate(&item.description, description_width),
            )?;
        }

        writeln!(f, "{}", self.palette.dim(&self.count_label))
    }
}

pub struct ItemDetailView<'a> {
    item: &'a Item,
    palette: Palette,
}

impl<'a> ItemDetailView<'a> {
    pub fn new(item: &'a Item) -> Self {
        Self {
            item,
            palette: Palette::for_stdout(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

impl fmt::Display for ItemDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.item;
        let fiscal_year = item.fiscal_year.map(|y| y.to_string());
        let id = item.id.map(|id| id.to_string());

        let rows: [(&str, String); 15] = [
            ("ID", or_dash(id.as_deref()).to_string()),
            ("Código", item.code.clone()),
            ("Descrição", item.description.clone()),
            ("Tipo", item.item_type.label().to_string()),
            ("Valor unitário", money(item.unit_value)),
            ("Quantidade", item.quantity.to_string()),
            ("Valor total", money(item.total_value())),
            ("Órgão", item.department.clone()),
            ("Processo", or_dash(Some(&item.process)).to_string()),
            ("Nº do processo", or_dash(item.process_number.as_deref()).to_string()),
            ("Exercício", or_dash(fiscal_year.as_deref()).to_string()),
            ("Unid. orçamentária", or_dash(item.budget_unit.as_deref()).to_string()),
            ("Fonte de recurso", or_dash(item.funding_source.as_deref()).to_string()),
            ("Cadastrado em", item.registration_date_display()),
            ("Cadastrado por", or_dash(item.registration_user.as_deref()).to_string()),
        ];

        for (label, value) in rows {
            writeln!(
                f,
                "{} {}",
                self.palette.dim(&format!("{:<19}", format!("{}:", label))),
                value
            )?;
        }
        Ok(())
    }
}

pub struct DepartmentListView<'a> {
    options: &'a [DepartmentFilter],
}

impl<'a> DepartmentListView<'a> {
    pub fn new(options: &'a [DepartmentFilter]) -> Self {
        Self { options }
    }
}

impl fmt::Display for DepartmentListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for option in self.options {
            writeln!(f, "{}", option)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemreg_types::ItemType;

    fn item(id: u64, code: &str, department: &str, value: f64) -> Item {
        Item {
            id: Some(id),
            code: code.to_string(),
            description: format!("Item de teste {}", code),
            item_type: ItemType::Material,
            unit_value: value,
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

    #[test]
    fn test_table_plain() {
        let mut service = item(2, "2024-SER-002", "Secretaria de Saúde", 1500.0);
        service.item_type = ItemType::Service;
        service.quantity = 12;
        let items = [item(1, "2024-MAT-001", "Secretaria de Educação", 10.0), service];

        let view = ItemTableView::new(items.iter().collect(), "2 itens".to_string())
            .with_width(100)
            .with_palette(Palette::new(false));

        insta::assert_snapshot!(view.to_string(), @r"
          ID  Código         Tipo                 Valor     Qtd  Órgão                  Descrição
           1  2024-MAT-001   Material          R$ 10,00       1  Secretaria de Educação Item de teste 202...
           2  2024-SER-002   Serviço        R$ 1.500,00      12  Secretaria de Saúde    Item de teste 202...
        2 itens
        ");
    }

    #[test]
    fn test_empty_table() {
        let view = ItemTableView::new(Vec::new(), "0 itens".to_string())
            .with_palette(Palette::new(false));
        assert_eq!(view.to_string(), "Nenhum item encontrado.\n0 itens\n");
    }

    #[test]
    fn test_detail_fills_missing_fields() {
        let detail = item(7, "2024-MAT-007", "Secretaria de Educação", 2.5);
        let text = ItemDetailView::new(&detail)
            .with_palette(Palette::new(false))
            .to_string();

        assert!(text.contains("Valor total:        R$ 2,50\n"));
        assert!(text.contains("Processo:           -\n"));
        assert!(text.contains("Cadastrado em:      N/A\n"));
    }

    #[test]
    fn test_department_list_starts_with_sentinel() {
        let options = vec![
            DepartmentFilter::All,
            DepartmentFilter::Exact("Secretaria de Saúde".to_string()),
        ];
        assert_eq!(
            DepartmentListView::new(&options).to_string(),
            "all\nSecretaria de Saúde\n"
        );
    }
}
