//! Money helpers: final 2-decimal rounding and display.

/// Round to cents, half away from zero on the *decimal* value.
///
/// `950.0 * 0.0765` is stored as `72.67499999…`; snapping the scaled value to
/// 1e-6 cents first lets it round to `72.68` like the written amount does.
pub fn round_money(amount: f64) -> f64 {
    let cents = (amount * 100.0 * 1e6).round() / 1e6;
    cents.round() / 100.0
}

pub fn format_money(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, amount.abs())
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
