//! The typed account-statement record.
//!
//! Field names on the wire are the Spanish keys of the input document; the
//! Rust side uses English names through `serde(rename)`.

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payment concept that marks an enrollment fee.
pub const ENROLLMENT_CONCEPT: &str = "Matrícula";

/// Top-level keys that must be present for a statement to render.
pub const REQUIRED_FIELDS: [&str; 5] = ["alumno", "programa", "promocion", "historial_pagos", "deudas"];

/// Scalar fee-schedule figures. Every field defaults to zero when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostFigures {
    #[serde(rename = "costo_pension")]
    pub tuition_cost: f64,
    #[serde(rename = "monto_pension")]
    pub installment_amount: f64,
    #[serde(rename = "num_cuotas")]
    pub installments: f64,
    #[serde(rename = "costo_matricula")]
    pub enrollment_cost: f64,
    #[serde(rename = "monto_matricula")]
    pub enrollment_amount: f64,
    #[serde(rename = "num_matriculas")]
    pub enrollments: f64,
    #[serde(rename = "pagos_por_ciclo")]
    pub payments_per_cycle: f64,
    #[serde(rename = "costo_total")]
    pub total_cost: f64,
}

/// One row of the payment history. Display columns keep their JSON value so
/// numbers and strings print the way the document wrote them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEntry {
    #[serde(rename = "n")]
    pub number: Value,
    #[serde(rename = "año")]
    pub year: Value,
    #[serde(rename = "fecha")]
    pub date: Value,
    #[serde(rename = "codigo")]
    pub bank_code: Value,
    #[serde(rename = "cuotas")]
    pub installment: Value,
    #[serde(rename = "concepto")]
    pub concept: String,
    #[serde(rename = "monto")]
    pub amount: Value,
}

impl PaymentEntry {
    pub fn is_enrollment(&self) -> bool {
        self.concept == ENROLLMENT_CONCEPT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtEntry {
    #[serde(rename = "codigo")]
    pub code: Value,
    #[serde(rename = "cuotas")]
    pub installments: Value,
    #[serde(rename = "monto")]
    pub amount: Value,
    #[serde(rename = "concepto")]
    pub concept: Value,
    pub total: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRecord {
    #[serde(rename = "alumno")]
    pub student: String,
    #[serde(rename = "programa")]
    pub program: String,
    #[serde(rename = "promocion")]
    pub cohort: String,
    /// Printed after `INFORME ECONÓMICO N°`; the configured default applies when absent.
    #[serde(rename = "numero_informe", default, skip_serializing_if = "Option::is_none")]
    pub report_number: Option<String>,
    #[serde(flatten)]
    pub costs: CostFigures,
    #[serde(rename = "historial_pagos")]
    pub payments: Vec<PaymentEntry>,
    #[serde(rename = "deudas")]
    pub debts: Vec<DebtEntry>,
}

impl StatementRecord {
    /// Builds the record from a loaded mapping, naming the first missing
    /// required field instead of failing with a generic lookup error.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, RecordError> {
        if let Some(field) = REQUIRED_FIELDS.into_iter().find(|f| !map.contains_key(*f)) {
            return Err(RecordError::MissingField(field));
        }
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    pub fn enrollment_payments(&self) -> impl Iterator<Item = &PaymentEntry> {
        self.payments.iter().filter(|p| p.is_enrollment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("fixture must be an object"),
        }
    }

    fn minimal() -> Value {
        json!({
            "alumno": "Juan Perez",
            "programa": "Maestría en Gestión",
            "promocion": "2024-II",
            "historial_pagos": [],
            "deudas": []
        })
    }

    #[test]
    fn cost_fields_default_to_zero() {
        let record = StatementRecord::from_map(as_map(minimal())).unwrap();
        assert_eq!(record.costs, CostFigures::default());
        assert_eq!(record.report_number, None);
    }

    #[test]
    fn reads_costs_and_entries() {
        let mut value = minimal();
        value["costo_total"] = json!(12500);
        value["num_cuotas"] = json!(20);
        value["numero_informe"] = json!("017-2025-OAE-EPG-UNAP");
        value["historial_pagos"] = json!([{
            "n": 1, "año": 2024, "fecha": "15/03/2024", "codigo": "B-001",
            "cuotas": 1, "concepto": "Matrícula", "monto": 350.0
        }]);
        value["deudas"] = json!([{
            "codigo": "D-01", "cuotas": 2, "monto": 500, "concepto": "Pensión", "total": 1000
        }]);

        let record = StatementRecord::from_map(as_map(value)).unwrap();
        assert_eq!(record.costs.total_cost, 12500.0);
        assert_eq!(record.costs.installments, 20.0);
        assert_eq!(record.report_number.as_deref(), Some("017-2025-OAE-EPG-UNAP"));
        assert_eq!(record.payments[0].year, json!(2024));
        assert!(record.payments[0].is_enrollment());
        assert_eq!(record.enrollment_payments().count(), 1);
        assert_eq!(record.debts[0].total, json!(1000));
    }

    #[test]
    fn names_missing_required_field() {
        for field in REQUIRED_FIELDS {
            let mut map = as_map(minimal());
            map.remove(field);
            match StatementRecord::from_map(map) {
                Err(RecordError::MissingField(name)) => assert_eq!(name, field),
                other => panic!("expected missing '{}', got {:?}", field, other),
            }
        }
    }

    #[test]
    fn missing_entry_column_is_invalid() {
        let mut value = minimal();
        value["historial_pagos"] = json!([{ "n": 1, "concepto": "Pensión" }]);
        let err = StatementRecord::from_map(as_map(value)).unwrap_err();
        assert!(matches!(err, RecordError::Invalid(_)));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn concept_match_is_exact() {
        let entry = PaymentEntry {
            number: json!(1),
            year: json!(2024),
            date: json!("01/04/2024"),
            bank_code: json!("B-2"),
            installment: json!(1),
            concept: "matricula".into(),
            amount: json!(350),
        };
        assert!(!entry.is_enrollment());
    }
}
