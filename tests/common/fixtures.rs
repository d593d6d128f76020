use serde_json::{Value, json};

pub fn payment(n: u32, concept: &str, amount: Value) -> Value {
    json!({
        "n": n,
        "año": 2024,
        "fecha": format!("{:02}/04/2024", (n % 28) + 1),
        "codigo": format!("BCO-{:04}", n),
        "cuotas": n,
        "concepto": concept,
        "monto": amount
    })
}

pub fn debt(code: &str, installments: u32, amount: u32) -> Value {
    json!({
        "codigo": code,
        "cuotas": installments,
        "monto": amount,
        "concepto": "Pensión",
        "total": installments * amount
    })
}

/// The sample statement used throughout the end-to-end tests.
pub fn juan_perez() -> Value {
    json!({
        "alumno": "Juan Perez",
        "programa": "Maestría en Gestión Pública",
        "promocion": "2024-I",
        "costo_pension": 10000.0,
        "monto_pension": 500.0,
        "num_cuotas": 20,
        "costo_matricula": 1400.0,
        "monto_matricula": 350.0,
        "num_matriculas": 4,
        "pagos_por_ciclo": 5,
        "costo_total": 11400.0,
        "historial_pagos": [
            payment(1, "Matrícula", json!(350)),
            payment(2, "Pensión", json!(500)),
            payment(3, "Pensión", json!(500))
        ],
        "deudas": [
            debt("D-001", 2, 500)
        ]
    })
}

/// A statement whose payment history is long enough to push later tables
/// past the pagination threshold.
pub fn long_history(payments: u32) -> Value {
    let mut record = juan_perez();
    record["historial_pagos"] = Value::Array(
        (1..=payments)
            .map(|n| payment(n, if n % 6 == 1 { "Matrícula" } else { "Pensión" }, json!(500)))
            .collect(),
    );
    record
}

/// Only the required fields, with empty lists.
pub fn bare() -> Value {
    json!({
        "alumno": "Ana Torres",
        "programa": "Doctorado en Educación",
        "promocion": "2023-II",
        "historial_pagos": [],
        "deudas": []
    })
}
