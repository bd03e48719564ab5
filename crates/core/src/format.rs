//! Display-formatting helpers shared by the dashboard pages.

/// Format an amount as whole US dollars with thousands separators,
/// e.g. `format_currency(45231.7)` is `"$45,232"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let grouped = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a signed percentage with an explicit `+` for non-negative
/// values, e.g. `format_percentage(5.04, 1)` is `"+5.0%"`.
#[must_use]
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.decimals$}%")
}

/// Format an integer with thousands separators, e.g. `"18,420"`.
#[must_use]
pub fn format_number(value: u64) -> String {
    group_thousands(value)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
