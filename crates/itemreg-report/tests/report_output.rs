//! Report Output Tests
//!
//! Lays out and writes real reports, checking the rendered text of the
//! first page and that the PDF on disk reopens with the expected pages.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use itemreg_report::{ReportBranding, ReportGenerator, layout_report};
use itemreg_types::{Item, ItemType};

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

fn item(
    id: u64,
    code: &str,
    description: &str,
    item_type: ItemType,
    value: f64,
    quantity: u32,
    department: &str,
    process: &str,
) -> Item {
    Item {
        id: Some(id),
        code: code.to_string(),
        description: description.to_string(),
        item_type,
        unit_value: value,
        quantity,
        registration_date: None,
        registration_user: None,
        department: department.to_string(),
        process: process.to_string(),
        process_number: None,
        fiscal_year: Some(2024),
        budget_unit: None,
        funding_source: None,
    }
}

fn two_items() -> Vec<Item> {
    vec![
        item(
            1,
            "2024-MAT-001",
            "Carteira escolar com prancheta",
            ItemType::Material,
            10.0,
            40,
            "Secretaria de Educação",
            "PREGÃO 001/2024",
        ),
        item(
            2,
            "2024-SER-002",
            "Manutenção preventiva de ambulâncias",
            ItemType::Service,
            500.0,
            2,
            "Secretaria de Saúde",
            "DISPENSA 014/2024",
        ),
    ]
}

#[test]
fn test_first_page_text() {
    let items = two_items();
    let refs: Vec<&Item> = items.iter().collect();
    let doc = layout_report(
        &refs,
        "Relatório Completo de Itens",
        generated_at(),
        &ReportBranding::default(),
    );

    let texts = doc.pages[0].texts().join("\n").replace('\u{a0}', " ");
    insta::assert_snapshot!(texts, @r"
    TRIBUNAL DE CONTAS
    Sistema de Controle de Itens Patrimoniais
    Relatório Completo de Itens
    Gerado em: 18/10/2026 às 14:30:00
    Total de itens: 2
    Código
    Descrição
    Tipo
    Valor
    Qtd
    Órgão
    Processo
    2024-MAT-001
    Carteira escolar com prancheta
    MAT
    R$ 10,00
    40
    Secretaria d...
    PREGÃO 001/2024
    2024-SER-002
    Manutenção preventiva de am...
    SER
    R$ 500,00
    2
    Secretaria d...
    DISPENSA 014...
    Página 1 de 1 • Sistema de Controle Patrimonial • 18/10/2026
    ");
}

#[test]
fn test_custom_branding_reaches_header_and_footer() {
    let items = two_items();
    let refs: Vec<&Item> = items.iter().collect();
    let branding = ReportBranding {
        organization: "PREFEITURA MUNICIPAL".to_string(),
        subtitle: "Almoxarifado Central".to_string(),
        system_label: "Patrimônio".to_string(),
    };
    let doc = layout_report(&refs, "Inventário", generated_at(), &branding);

    let texts = doc.pages[0].texts();
    assert_eq!(texts[0], "PREFEITURA MUNICIPAL");
    assert_eq!(texts[1], "Almoxarifado Central");
    assert!(texts.last().unwrap().contains("• Patrimônio •"));
}

#[test]
fn test_generate_writes_dated_pdf() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let items: Vec<Item> = (0..30).flat_map(|_| two_items()).collect();
    let refs: Vec<&Item> = items.iter().collect();

    let generator = ReportGenerator::new(dir.path().join("reports"));
    let path = generator.generate_at(&refs, "Relatório de Itens", generated_at())?;

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("relatorio_itens_18-10-2026.pdf")
    );

    let bytes = std::fs::read(&path)?;
    assert!(bytes.starts_with(b"%PDF-"));

    // 60 rows: 19 on the first page, 26 on the second, 15 on the third
    let reopened = lopdf::Document::load_mem(&bytes)?;
    assert_eq!(reopened.get_pages().len(), 3);

    Ok(())
}

#[test]
fn test_empty_report_still_has_one_page() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let generator = ReportGenerator::new(dir.path());
    let path = generator.generate_at(&[], "Relatório de Itens", generated_at())?;

    let reopened = lopdf::Document::load_mem(&std::fs::read(path)?)?;
    assert_eq!(reopened.get_pages().len(), 1);
    Ok(())
}
