//! Page layout for the item report.
//!
//! Produces a backend-neutral [`ReportDocument`]: per page, an ordered list
//! of draw operations in millimetres with the origin at the top-left
//! corner. The PDF backend only translates these; every placement decision
//! lives here.

use chrono::NaiveDateTime;
use itemreg_types::Item;
use serde::{Deserialize, Serialize};

use crate::format::{format_brl, format_date, format_time, group_thousands, hard_cut, truncate};

// A4 portrait, millimetres
pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 15.0;

pub const TABLE_TOP: f32 = 75.0;
pub const HEADER_ROW_HEIGHT: f32 = 8.0;
pub const ROW_HEIGHT: f32 = 10.0;
/// A row starting below this line moves to a new page
pub const PAGE_BREAK_Y: f32 = 270.0;
pub const CONTINUATION_TOP: f32 = 20.0;
pub const FOOTER_RULE_Y: f32 = 280.0;
pub const FOOTER_TEXT_Y: f32 = 285.0;
const CELL_PADDING: f32 = 2.0;

pub const HEADER_FILL: Rgb = Rgb(41, 128, 185);
pub const STRIPE_FILL: Rgb = Rgb(245, 245, 245);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Helvetica faces available to the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `x` is the left edge
    Left,
    /// `x` is the horizontal centre
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: Rgb,
}

impl TextStyle {
    pub const fn new(font: Font, size: f32) -> Self {
        Self {
            font,
            size,
            color: Rgb::BLACK,
        }
    }

    pub const fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// `y` is the text baseline
    Text {
        x: f32,
        y: f32,
        text: String,
        style: TextStyle,
        align: Align,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text of every text operation on the page, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub pages: Vec<Page>,
    pub row_count: usize,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Fixed strings printed in the header and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportBranding {
    pub organization: String,
    pub subtitle: String,
    pub system_label: String,
}

impl Default for ReportBranding {
    fn default() -> Self {
        Self {
            organization: "TRIBUNAL DE CONTAS".to_string(),
            subtitle: "Sistema de Controle de Itens Patrimoniais".to_string(),
            system_label: "Sistema de Controle Patrimonial".to_string(),
        }
    }
}

/// One table column: header label, width in mm, and how an item renders into it
pub struct Column {
    pub header: &'static str,
    pub width: f32,
    render: fn(&Item) -> String,
}

impl Column {
    pub fn render(&self, item: &Item) -> String {
        (self.render)(item)
    }
}

pub const COLUMNS: [Column; 7] = [
    Column {
        header: "Código",
        width: 20.0,
        render: |item| truncate(&item.code, 12),
    },
    Column {
        header: "Descrição",
        width: 45.0,
        render: |item| truncate(&item.description, 30),
    },
    Column {
        header: "Tipo",
        width: 18.0,
        render: |item| hard_cut(item.item_type.as_wire_str(), 3),
    },
    Column {
        header: "Valor",
        width: 25.0,
        render: |item| format_brl(item.unit_value),
    },
    Column {
        header: "Qtd",
        width: 15.0,
        render: |item| item.quantity.to_string(),
    },
    Column {
        header: "Órgão",
        width: 30.0,
        render: |item| truncate(&item.department, 15),
    },
    Column {
        header: "Processo",
        width: 30.0,
        render: |item| truncate(&item.process, 15),
    },
];

/// Lay out the whole report.
///
/// The header block appears on the first page only. Footers are added once
/// every row is placed, so each carries the final page count.
pub fn layout_report(
    items: &[&Item],
    title: &str,
    generated_at: NaiveDateTime,
    branding: &ReportBranding,
) -> ReportDocument {
    let mut pages = vec![Page::default()];

    push_header(&mut pages[0], title, generated_at, items.len(), branding);

    let mut y = TABLE_TOP;
    push_table_header(&mut pages[0], y);
    y += HEADER_ROW_HEIGHT;

    for (row_index, item) in items.iter().enumerate() {
        if y > PAGE_BREAK_Y {
            pages.push(Page::default());
            y = CONTINUATION_TOP;
        }

        let current = pages.len() - 1;
        push_row(&mut pages[current], item, row_index, y);
        y += ROW_HEIGHT;
    }

    let date = format_date(generated_at.date());
    let total = pages.len();
    for (i, page) in pages.iter_mut().enumerate() {
        push_footer(page, i + 1, total, &branding.system_label, &date);
    }

    ReportDocument {
        title: title.to_string(),
        pages,
        row_count: items.len(),
    }
}

fn push_header(
    page: &mut Page,
    title: &str,
    generated_at: NaiveDateTime,
    total_items: usize,
    branding: &ReportBranding,
) {
    let center = PAGE_WIDTH / 2.0;
    let centered = |y: f32, text: String, style: TextStyle| DrawOp::Text {
        x: center,
        y,
        text,
        style,
        align: Align::Center,
    };

    page.ops.push(centered(
        20.0,
        branding.organization.clone(),
        TextStyle::new(Font::Bold, 16.0),
    ));
    page.ops.push(centered(
        28.0,
        branding.subtitle.clone(),
        TextStyle::new(Font::Bold, 12.0),
    ));
    page.ops.push(DrawOp::Line {
        x1: MARGIN,
        y1: 35.0,
        x2: PAGE_WIDTH - MARGIN,
        y2: 35.0,
        width: 0.5,
    });
    page.ops.push(centered(
        45.0,
        title.to_string(),
        TextStyle::new(Font::Bold, 14.0),
    ));
    page.ops.push(centered(
        55.0,
        format!(
            "Gerado em: {} às {}",
            format_date(generated_at.date()),
            format_time(generated_at)
        ),
        TextStyle::new(Font::Regular, 10.0),
    ));
    page.ops.push(DrawOp::Text {
        x: MARGIN,
        y: 65.0,
        text: format!("Total de itens: {}", group_thousands(total_items as u64)),
        style: TextStyle::new(Font::Regular, 9.0),
        align: Align::Left,
    });
}

fn push_table_header(page: &mut Page, y: f32) {
    let style = TextStyle::new(Font::Bold, 9.0).color(Rgb::WHITE);
    let mut x = MARGIN;
    for column in &COLUMNS {
        page.ops.push(DrawOp::FillRect {
            x,
            y,
            width: column.width,
            height: HEADER_ROW_HEIGHT,
            color: HEADER_FILL,
        });
        page.ops.push(DrawOp::Text {
            x: x + CELL_PADDING,
            y: y + 5.0,
            text: column.header.to_string(),
            style,
            align: Align::Left,
        });
        x += column.width;
    }
}

fn push_row(page: &mut Page, item: &Item, row_index: usize, y: f32) {
    if row_index % 2 == 0 {
        let mut x = MARGIN;
        for column in &COLUMNS {
            page.ops.push(DrawOp::FillRect {
                x,
                y,
                width: column.width,
                height: ROW_HEIGHT,
                color: STRIPE_FILL,
            });
            x += column.width;
        }
    }

    let style = TextStyle::new(Font::Regular, 8.0);
    let mut x = MARGIN;
    for column in &COLUMNS {
        page.ops.push(DrawOp::Text {
            x: x + CELL_PADDING,
            y: y + 6.0,
            text: column.render(item),
            style,
            align: Align::Left,
        });
        x += column.width;
    }
}

fn push_footer(page: &mut Page, number: usize, total: usize, system_label: &str, date: &str) {
    page.ops.push(DrawOp::Line {
        x1: MARGIN,
        y1: FOOTER_RULE_Y,
        x2: PAGE_WIDTH - MARGIN,
        y2: FOOTER_RULE_Y,
        width: 0.2,
    });
    page.ops.push(DrawOp::Text {
        x: PAGE_WIDTH / 2.0,
        y: FOOTER_TEXT_Y,
        text: format!(
            "Página {} de {} \u{2022} {} \u{2022} {}",
            number, total, system_label, date
        ),
        style: TextStyle::new(Font::Italic, 8.0),
        align: Align::Center,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use itemreg_types::ItemType;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 5, 30)
            .unwrap()
    }

    fn item(n: u64) -> Item {
        Item {
            id: Some(n),
            code: format!("2024-MAT-{:03}", n),
            description: "Cadeira de escritório com rodízios e apoio de braço".to_string(),
            item_type: ItemType::Service,
            unit_value: 1234.5,
            quantity: 7,
            registration_date: None,
            registration_user: None,
            department: "Secretaria de Educação".to_string(),
            process: "PREGÃO 001/2024".to_string(),
            process_number: None,
            fiscal_year: Some(2024),
            budget_unit: None,
            funding_source: None,
        }
    }

    fn layout(n: u64) -> ReportDocument {
        let items: Vec<Item> = (1..=n).map(item).collect();
        let refs: Vec<&Item> = items.iter().collect();
        layout_report(&refs, "Relatório de Itens", generated_at(), &ReportBranding::default())
    }

    fn row_baselines(page: &Page) -> Vec<f32> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, y, style, .. }
                    if *x == MARGIN + CELL_PADDING && style.size == 8.0 =>
                {
                    Some(*y)
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_column_widths_and_headers() {
        let headers: Vec<_> = COLUMNS.iter().map(|c| c.header).collect();
        assert_eq!(
            headers,
            vec!["Código", "Descrição", "Tipo", "Valor", "Qtd", "Órgão", "Processo"]
        );
        let widths: f32 = COLUMNS.iter().map(|c| c.width).sum();
        assert_eq!(widths, 183.0);
    }

    #[test]
    fn test_row_cells_are_truncated_per_column() {
        let cells: Vec<String> = COLUMNS.iter().map(|c| c.render(&item(1))).collect();
        assert_eq!(
            cells,
            vec![
                "2024-MAT-001",
                "Cadeira de escritório com r...",
                "SER",
                "R$\u{a0}1.234,50",
                "7",
                "Secretaria d...",
                "PREGÃO 001/2024",
            ]
        );
    }

    #[test]
    fn test_header_block_on_first_page_only() {
        let doc = layout(30);
        assert_eq!(doc.page_count(), 2);

        let first = doc.pages[0].texts();
        assert_eq!(first[0], "TRIBUNAL DE CONTAS");
        assert_eq!(first[1], "Sistema de Controle de Itens Patrimoniais");
        assert_eq!(first[2], "Relatório de Itens");
        assert_eq!(first[3], "Gerado em: 18/10/2026 às 09:05:30");
        assert_eq!(first[4], "Total de itens: 30");
        assert_eq!(first[5], "Código");

        let second = doc.pages[1].texts();
        assert!(!second.contains(&"TRIBUNAL DE CONTAS"));
        assert!(!second.contains(&"Código"));
    }

    #[test]
    fn test_pagination_thresholds() {
        // First page rows start at 83 and are placed while y <= 270: 19 rows
        assert_eq!(layout(0).page_count(), 1);
        assert_eq!(layout(19).page_count(), 1);
        assert_eq!(layout(20).page_count(), 2);
        // Continuation pages hold rows at 20, 30, ..., 270: 26 rows
        assert_eq!(layout(45).page_count(), 2);
        assert_eq!(layout(46).page_count(), 3);
    }

    #[test]
    fn test_continuation_rows_restart_at_top_margin() {
        let doc = layout(21);
        let first = row_baselines(&doc.pages[0]);
        assert_eq!(first.first(), Some(&89.0));
        assert_eq!(first.last(), Some(&269.0));

        let second = row_baselines(&doc.pages[1]);
        assert_eq!(second, vec![26.0, 36.0]);
    }

    #[test]
    fn test_even_rows_are_shaded() {
        let doc = layout(3);
        let stripes = doc.pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { color, .. } if *color == STRIPE_FILL))
            .count();
        // rows 0 and 2, one rect per column
        assert_eq!(stripes, 2 * COLUMNS.len());
    }

    #[test]
    fn test_every_page_has_numbered_footer() {
        let doc = layout(46);
        for (i, page) in doc.pages.iter().enumerate() {
            let footer = page.texts().last().copied().unwrap();
            assert_eq!(
                footer,
                format!(
                    "Página {} de 3 \u{2022} Sistema de Controle Patrimonial \u{2022} 18/10/2026",
                    i + 1
                )
            );
        }
    }

    #[test]
    fn test_total_is_grouped() {
        let doc = layout(1200);
        assert!(doc.pages[0].texts().contains(&"Total de itens: 1.200"));
    }
}
