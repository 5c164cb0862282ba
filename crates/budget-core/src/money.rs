//! Budget totals and BRL formatting

use crate::models::BudgetItem;

/// Sum of `quantity * unit_value` over all items. Recomputed on every render.
pub fn total_value(items: &[BudgetItem]) -> f64 {
    items.iter().map(BudgetItem::subtotal).sum()
}

/// Format a value as Brazilian Real, matching `Intl.NumberFormat("pt-BR", BRL)`:
/// `R$ 1.234,50` with a non-breaking space after the symbol.
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return "R$\u{a0}-".to_string();
    }

    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let reais = (cents / 100).to_string();

    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, ch) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}R$\u{a0}{grouped},{:02}", cents % 100)
}
