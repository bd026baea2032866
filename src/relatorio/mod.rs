//! Batch aggregation and the export boundary.
//!
//! [`aggregate`] runs the extractor over a collection of documents and
//! concatenates every produced row into one [`Report`], skipping documents
//! that fail to parse or are not NFe invoices. The report converts itself to
//! a display grid (or CSV) only at the boundary; rows stay numeric.
//!
//! # Example
//!
//! ```ignore
//! use notafiscal::relatorio::{self, CsvOptions};
//!
//! let report = relatorio::aggregate(&files);
//! if report.is_empty() {
//!     eprintln!("nenhuma nota fiscal válida foi processada");
//! } else {
//!     std::fs::write("notas_fiscais.csv", report.to_csv(&CsvOptions::default()))?;
//! }
//! ```

mod csv;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{ReportRow, format_brl};
use crate::nfe;

pub use csv::CsvOptions;

/// The combined lot-level table produced from a batch of documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    /// All rows, in input order and within-document order.
    pub rows: Vec<ReportRow>,
}

/// Column titles, in the order the export contract fixes them.
pub const COLUMNS: [&str; 10] = [
    "DATA",
    "NOTA FISCAL",
    "FORNECEDOR",
    "PRODUTO",
    "QUANTIDADE",
    "UNIDADE",
    "LOTE",
    "VALIDADE",
    "VALOR TOTAL PRODUTOS",
    "NATUREZA DA OPERAÇÃO",
];

impl Report {
    /// True when no document contributed any rows — the only failure mode
    /// the caller is expected to report to the end user.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Render every row to display strings, in [`COLUMNS`] order.
    ///
    /// The processing date becomes `DD/MM/YYYY`, the total becomes
    /// `R$`-formatted text, and a missing expiry renders empty. The
    /// underlying rows are not modified.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(render_row).collect()
    }

    /// Serialize the table as CSV, header row included per the options.
    pub fn to_csv(&self, options: &CsvOptions) -> String {
        csv::render_csv(self, options)
    }
}

fn render_row(row: &ReportRow) -> Vec<String> {
    vec![
        row.processed_on.format("%d/%m/%Y").to_string(),
        row.invoice.clone(),
        row.supplier.clone(),
        row.product.clone(),
        row.quantity.normalize().to_string(),
        row.unit.clone(),
        row.lot.clone(),
        row.expiry.clone().unwrap_or_default(),
        format_brl(row.total_value),
        row.operation_nature.clone(),
    ]
}

/// Aggregate a batch of XML documents into one report, stamped with today's
/// date. See [`aggregate_with_date`].
pub fn aggregate<I>(inputs: I) -> Report
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    aggregate_with_date(inputs, Local::now().date_naive())
}

/// Aggregate a batch of XML documents with an explicit processing date.
///
/// Documents are extracted in input order; a document that fails to extract
/// is logged and skipped, and never aborts the rest of the batch. An empty
/// input (or a batch where every document fails) yields an empty report,
/// not an error.
pub fn aggregate_with_date<I>(inputs: I, processed_on: NaiveDate) -> Report
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut rows = Vec::new();
    for (index, input) in inputs.into_iter().enumerate() {
        match nfe::extract_with_date(input.as_ref(), processed_on) {
            Ok(extracted) => {
                tracing::debug!(index, rows = extracted.len(), "document extracted");
                rows.extend(extracted);
            }
            Err(err) => {
                tracing::warn!(index, %err, "skipping document");
            }
        }
    }
    Report { rows }
}
