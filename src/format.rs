//! Display formatting for money, quantities and table cells.

use serde_json::Value;

pub const CURRENCY_PREFIX: &str = "S/";

/// `S/ 1234.56`: local-currency prefix, a space, two decimals.
pub fn currency(amount: f64) -> String {
    format!("{} {:.2}", CURRENCY_PREFIX, amount)
}

/// Counts print without a fractional part when they are whole.
pub fn quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Text of a table cell taken verbatim from the document.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Amount cell: the currency prefix followed by the value as written.
pub fn currency_cell(value: &Value) -> String {
    format!("{} {}", CURRENCY_PREFIX, cell_text(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(currency(0.0), "S/ 0.00");
        assert_eq!(currency(1234.5), "S/ 1234.50");
        assert_eq!(currency(12500.0), "S/ 12500.00");
    }

    #[test]
    fn whole_quantities_have_no_fraction() {
        assert_eq!(quantity(0.0), "0");
        assert_eq!(quantity(24.0), "24");
        assert_eq!(quantity(2.5), "2.5");
    }

    #[test]
    fn cells_keep_document_form() {
        assert_eq!(cell_text(&json!("15/03/2024")), "15/03/2024");
        assert_eq!(cell_text(&json!(2024)), "2024");
        assert_eq!(cell_text(&json!(350.0)), "350.0");
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(currency_cell(&json!(350)), "S/ 350");
    }
}
