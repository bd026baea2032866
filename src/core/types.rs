use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice-level fields, read once per document from the `infNFe` header
/// nodes and shared read-only by every row derived from that document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceHeader {
    /// Invoice number (`ide/nNF`).
    pub number: String,
    /// Invoice series (`ide/serie`).
    pub series: String,
    /// Supplier / issuer name (`emit/xNome`).
    pub supplier: String,
    /// Total product value (`total/ICMSTot/vProd`).
    pub total_value: Decimal,
    /// Business nature of the operation (`ide/natOp`), e.g. "VENDA".
    pub operation_nature: String,
}

impl InvoiceHeader {
    /// Number and series combined the way the report displays them.
    pub fn invoice_label(&self) -> String {
        format!("{} - {}", self.number, self.series)
    }
}

/// A tracked batch (`prod/rastro`) attached to a line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lot {
    /// Lot identifier (`nLote`).
    pub id: String,
    /// Expiry date text (`dVal`) exactly as found in the document;
    /// normalization happens when rows are produced.
    pub expiry: String,
}

/// One `det` line item with its lots in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product description (`prod/xProd`).
    pub product: String,
    /// Total commercial quantity (`prod/qCom`), before lot apportionment.
    pub quantity: Decimal,
    /// Commercial unit (`prod/uCom`).
    pub unit: String,
    /// Tracked lots; empty for untracked products.
    pub lots: Vec<Lot>,
}

/// A parsed NFe document: header plus line items, before flattening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NfeDocument {
    /// Invoice-level fields.
    pub header: InvoiceHeader,
    /// Line items in document order.
    pub items: Vec<LineItem>,
}

/// One row of the flattened report: a line item joined with one of its lots
/// (or with the no-lot placeholder) and the shared header fields.
///
/// Rows keep numeric values numeric; display formatting (processing date as
/// `DD/MM/YYYY`, total as `R$…`) is applied only at the export boundary by
/// [`crate::relatorio::Report`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    /// Date the document was processed.
    pub processed_on: NaiveDate,
    /// Invoice number and series, e.g. `"123 - 1"`.
    pub invoice: String,
    /// Supplier name.
    pub supplier: String,
    /// Product description.
    pub product: String,
    /// Apportioned quantity: the item total divided by its lot count, or
    /// the full total for an untracked item.
    pub quantity: Decimal,
    /// Commercial unit.
    pub unit: String,
    /// Lot identifier, or [`crate::core::defaults::SEM_LOTE`].
    pub lot: String,
    /// Normalized expiry; `None` for the single row of an untracked item.
    pub expiry: Option<String>,
    /// Invoice total product value (shared by all rows of a document).
    pub total_value: Decimal,
    /// Operation nature.
    pub operation_nature: String,
}
