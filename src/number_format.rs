use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed-point notation, ties rounded away from zero.
/// Magnitudes of 1e21 and above fall back to [`shortest`].
pub fn fixed(value: f64, decimal_places: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if !value.is_finite() || value.abs() >= 1e21 {
        return shortest(value);
    }

    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded = decimal.round_dp_with_strategy(
                decimal_places as u32,
                RoundingStrategy::MidpointAwayFromZero,
            );
            format!("{:.*}", decimal_places, rounded)
        }
        None => format!("{:.*}", decimal_places, value),
    }
}

/// Shortest round-tripping form, exponent notation past 1e21.
pub fn shortest(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let mut buffer = ryu_js::Buffer::new();
    buffer.format(value).to_owned()
}
