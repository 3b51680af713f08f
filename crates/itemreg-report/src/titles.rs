//! Report titles used by the export actions.

pub const DEFAULT_TITLE: &str = "Relatório de Itens";
pub const FULL_REPORT_TITLE: &str = "Relatório Completo de Itens";

/// Title for exporting a selection out of a collection of `total` items.
///
/// Selecting the whole collection counts as a full report.
pub fn selection_title(selected: usize, total: usize) -> String {
    if selected == total {
        FULL_REPORT_TITLE.to_string()
    } else {
        format!("Relatório de Itens Selecionados ({} itens)", selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_title() {
        assert_eq!(selection_title(5, 5), "Relatório Completo de Itens");
        assert_eq!(
            selection_title(2, 5),
            "Relatório de Itens Selecionados (2 itens)"
        );
    }
}
