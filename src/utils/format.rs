//! Formato de montos para reportes y estadísticas

use rust_decimal::Decimal;

/// Formatea un monto como `$1,234.50`; la ausencia de valor se muestra como `$0.00`
pub fn format_currency(value: Option<f64>) -> String {
    let amount = value
        .and_then(Decimal::from_f64_retain)
        .unwrap_or_default()
        .round_dp(2);

    let mut fixed = amount.abs();
    fixed.rescale(2);
    let text = fixed.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, fraction)
}
