//! Turns the record's payment and debt lists into the three statement tables.

use crate::format::{cell_text, currency_cell};
use crate::record::{DebtEntry, PaymentEntry, StatementRecord};
use crate::sections::Grid;

pub const PAYMENTS_TITLE: &str = "PENSIÓN";
pub const ENROLLMENT_TITLE: &str = "MATRÍCULA";
pub const DEBTS_TITLE: &str = "REPORTE INFORMATIVO DE DEUDAS";

pub const PAYMENTS_HEADER: [&str; 7] = ["N°", "AÑO", "FECHA", "COD. BCO.", "CUOTAS", "CONCEPTO", "PAGO"];
pub const ENROLLMENT_HEADER: [&str; 6] = ["AÑO", "FECHA", "COD. BCO.", "N° CUOTA", "CONCEPTO", "MONTO"];
pub const DEBTS_HEADER: [&str; 5] = ["CÓDIGO", "CUOTAS", "MONTO", "CONCEPTO", "TOTAL"];

/// A titled table ready for `draw_table`: body rows plus the header to put
/// on top of them.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSection {
    pub title: &'static str,
    pub header: Vec<String>,
    pub grid: Grid,
}

impl TableSection {
    fn new(title: &'static str, header: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            title,
            header: header.iter().map(|h| h.to_string()).collect(),
            grid: Grid::body(rows),
        }
    }
}

fn payment_row(p: &PaymentEntry) -> Vec<String> {
    vec![
        cell_text(&p.number),
        cell_text(&p.year),
        cell_text(&p.date),
        cell_text(&p.bank_code),
        cell_text(&p.installment),
        p.concept.clone(),
        cell_text(&p.amount),
    ]
}

fn enrollment_row(p: &PaymentEntry) -> Vec<String> {
    vec![
        cell_text(&p.year),
        cell_text(&p.date),
        cell_text(&p.bank_code),
        cell_text(&p.installment),
        p.concept.clone(),
        currency_cell(&p.amount),
    ]
}

fn debt_row(d: &DebtEntry) -> Vec<String> {
    vec![
        cell_text(&d.code),
        cell_text(&d.installments),
        currency_cell(&d.amount),
        cell_text(&d.concept),
        currency_cell(&d.total),
    ]
}

pub fn payments_table(record: &StatementRecord) -> TableSection {
    TableSection::new(
        PAYMENTS_TITLE,
        &PAYMENTS_HEADER,
        record.payments.iter().map(payment_row).collect(),
    )
}

pub fn enrollment_table(record: &StatementRecord) -> TableSection {
    TableSection::new(
        ENROLLMENT_TITLE,
        &ENROLLMENT_HEADER,
        record.enrollment_payments().map(enrollment_row).collect(),
    )
}

pub fn debts_table(record: &StatementRecord) -> TableSection {
    TableSection::new(DEBTS_TITLE, &DEBTS_HEADER, record.debts.iter().map(debt_row).collect())
}

/// The statement's tables in drawing order.
pub fn statement_tables(record: &StatementRecord) -> [TableSection; 3] {
    [payments_table(record), enrollment_table(record), debts_table(record)]
}
