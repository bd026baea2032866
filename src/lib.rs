//! # notafiscal
//!
//! Extraction of structured line-item data from Brazilian NFe
//! (Nota Fiscal Eletrônica) XML documents, flattened into a lot-level
//! tabular report ready for spreadsheet export.
//!
//! All quantities and monetary values use [`rust_decimal::Decimal`] — never
//! floating point. Parsing is namespace-aware and resolves element names
//! against the fixed NFe schema namespace.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use notafiscal::nfe;
//! use rust_decimal_macros::dec;
//!
//! let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <nfeProc xmlns="http://www.portalfiscal.inf.br/nfe">
//!   <NFe><infNFe>
//!     <ide><nNF>123</nNF><serie>1</serie><natOp>VENDA</natOp></ide>
//!     <emit><xNome>ACME Distribuidora</xNome></emit>
//!     <det><prod>
//!       <xProd>Widget</xProd><qCom>10</qCom><uCom>UN</uCom>
//!       <rastro><nLote>L1</nLote><dVal>2025-01-15</dVal></rastro>
//!       <rastro><nLote>L2</nLote><dVal>2025-01</dVal></rastro>
//!     </prod></det>
//!     <total><ICMSTot><vProd>10.50</vProd></ICMSTot></total>
//!   </infNFe></NFe>
//! </nfeProc>"#;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let rows = nfe::extract_with_date(xml.as_bytes(), date).unwrap();
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].invoice, "123 - 1");
//! assert_eq!(rows[0].quantity, dec!(5));
//! assert_eq!(rows[0].expiry.as_deref(), Some("15/1/2025"));
//! assert_eq!(rows[1].expiry.as_deref(), Some("31/1/2025"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`core`] | Data model, field defaults, errors, currency display |
//! | [`nfe`] | Single-document extractor and expiry normalization |
//! | [`relatorio`] | Batch aggregation, display grid, CSV export |

pub mod core;

pub mod nfe;

pub mod relatorio;

// Re-export core types at crate root for convenience
pub use crate::core::*;
