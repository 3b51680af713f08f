//! pt-BR text formatting for report cells.

use chrono::{NaiveDate, NaiveDateTime};

const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_chars` characters.
///
/// The ellipsis counts toward the budget: longer text keeps its first
/// `max_chars - 3` characters followed by `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(ELLIPSIS.len())).collect();
    format!("{}{}", kept, ELLIPSIS)
}

/// First `n` characters, no ellipsis
pub fn hard_cut(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

/// `1234567` -> `1.234.567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Brazilian real with exactly two decimals: `R$ 1.234,56`.
///
/// The symbol is separated by a no-break space, as browsers do for `pt-BR`.
/// Half-cent values round away from zero.
pub fn format_brl(value: f64) -> String {
    let cents = round_cents(value.abs());
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}R$\u{a0}{},{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Round a non-negative amount to whole cents from its exact decimal
/// expansion: `2.675` is stored as `2.67499...` and gives 267.
fn round_cents(amount: f64) -> u64 {
    // 30 places separate any double >= 0.005 from a half-cent it is not equal to
    let digits = format!("{:.30}", amount);
    let parsed = digits.split_once('.').and_then(|(whole, frac)| {
        let whole: u64 = whole.parse().ok()?;
        let frac = frac.as_bytes().get(..3)?;
        let cents = u64::from(frac[0] - b'0') * 10 + u64::from(frac[1] - b'0');
        let carry = u64::from(frac[2] >= b'5');
        whole.checked_mul(100)?.checked_add(cents + carry)
    });

    parsed.unwrap_or_else(|| (amount * 100.0).round() as u64)
}

/// `DD/MM/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `HH:MM:SS`
pub fn format_time(at: NaiveDateTime) -> String {
    at.format("%H:%M:%S").to_string()
}

/// `relatorio_itens_DD-MM-YYYY.pdf`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("relatorio_itens_{}.pdf", format_date(date).replace('/', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_ellipsis_in_budget() {
        let description = "a".repeat(35);
        let cut = truncate(&description, 30);
        assert_eq!(cut.chars().count(), 30);
        assert_eq!(cut, format!("{}...", "a".repeat(27)));

        let exact = "b".repeat(30);
        assert_eq!(truncate(&exact, 30), exact);
    }

    #[test]
    fn test_truncate_is_char_based() {
        assert_eq!(truncate("Secretaria de Educação", 15), "Secretaria d...");
        assert_eq!(truncate("Saúde", 15), "Saúde");
    }

    #[test]
    fn test_hard_cut() {
        assert_eq!(hard_cut("SERVICO", 3), "SER");
        assert_eq!(hard_cut("AB", 3), "AB");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(10.0), "R$\u{a0}10,00");
        assert_eq!(format_brl(0.5), "R$\u{a0}0,50");
        assert_eq!(format_brl(1234.567), "R$\u{a0}1.234,57");
        assert_eq!(format_brl(9_999_999.99), "R$\u{a0}9.999.999,99");
        assert_eq!(format_brl(-3.0), "-R$\u{a0}3,00");
    }

    #[test]
    fn test_format_brl_rounds_exact_binary_value() {
        // stored as 2.67499... and 1.11499...
        assert_eq!(format_brl(2.675), "R$\u{a0}2,67");
        assert_eq!(format_brl(1.115), "R$\u{a0}1,11");
        // exact midpoints go away from zero
        assert_eq!(format_brl(0.125), "R$\u{a0}0,13");
        assert_eq!(format_brl(-0.125), "-R$\u{a0}0,13");
        assert_eq!(format_brl(0.004), "R$\u{a0}0,00");
        assert_eq!(format_brl(-0.004), "R$\u{a0}0,00");
    }

    #[test]
    fn test_report_file_name_replaces_slashes() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(report_file_name(date), "relatorio_itens_07-03-2026.pdf");
    }
}
