//! Single-document NFe extraction.
//!
//! [`parse_nfe`] turns one XML byte stream into an [`NfeDocument`] under the
//! fixed schema namespace; [`flatten`] expands the document into report rows,
//! splitting each line item's quantity across its tracked lots and
//! normalizing expiry dates. [`extract`] composes the two.
//!
//! # Example
//!
//! ```ignore
//! use notafiscal::nfe;
//!
//! let rows = nfe::extract(&xml_bytes)?;
//! for row in &rows {
//!     println!("{} x{} lote {}", row.product, row.quantity, row.lot);
//! }
//! ```

mod document;
mod expiry;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::core::{NfeDocument, NfeError, ReportRow, defaults};

pub use document::parse_nfe;
pub use expiry::normalize_expiry;

/// The NFe schema namespace every recognized element must belong to.
pub const NFE_NAMESPACE: &str = "http://www.portalfiscal.inf.br/nfe";

/// Extract one document into report rows, stamped with today's date.
///
/// Convenience wrapper over [`extract_with_date`]; prefer the explicit-date
/// variant wherever determinism matters (tests, replays).
pub fn extract(xml: &[u8]) -> Result<Vec<ReportRow>, NfeError> {
    extract_with_date(xml, Local::now().date_naive())
}

/// Extract one document into report rows with an explicit processing date.
///
/// Returns `Err` only for structural problems (malformed XML, missing
/// `NFe/infNFe` root); missing or malformed fields fall back to their
/// defaults. The result may be empty when the document has no line items.
pub fn extract_with_date(
    xml: &[u8],
    processed_on: NaiveDate,
) -> Result<Vec<ReportRow>, NfeError> {
    let doc = parse_nfe(xml)?;
    Ok(flatten(&doc, processed_on))
}

/// Flatten a parsed document into one row per (line item, lot) pair.
///
/// An item with K ≥ 1 lots produces K rows in document order, each carrying
/// `quantity / K` (native decimal division, no extra rounding). An item
/// without lots produces exactly one row with the full quantity, the
/// [`defaults::SEM_LOTE`] placeholder, and no expiry.
pub fn flatten(doc: &NfeDocument, processed_on: NaiveDate) -> Vec<ReportRow> {
    let invoice = doc.header.invoice_label();
    let mut rows = Vec::new();

    for item in &doc.items {
        if item.lots.is_empty() {
            rows.push(ReportRow {
                processed_on,
                invoice: invoice.clone(),
                supplier: doc.header.supplier.clone(),
                product: item.product.clone(),
                quantity: item.quantity,
                unit: item.unit.clone(),
                lot: defaults::SEM_LOTE.to_string(),
                expiry: None,
                total_value: doc.header.total_value,
                operation_nature: doc.header.operation_nature.clone(),
            });
            continue;
        }

        let share = item.quantity / Decimal::from(item.lots.len() as u64);
        for lot in &item.lots {
            rows.push(ReportRow {
                processed_on,
                invoice: invoice.clone(),
                supplier: doc.header.supplier.clone(),
                product: item.product.clone(),
                quantity: share,
                unit: item.unit.clone(),
                lot: lot.id.clone(),
                expiry: Some(normalize_expiry(&lot.expiry)),
                total_value: doc.header.total_value,
                operation_nature: doc.header.operation_nature.clone(),
            });
        }
    }

    rows
}
