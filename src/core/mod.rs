//! Core NFe data model, field defaults, and currency display.
//!
//! This module provides the foundational types shared by the extractor and
//! the report aggregator: the parsed document model, the flattened report
//! row, and the Brazilian-locale currency formatter.

pub mod defaults;
mod error;
mod money;
mod types;

pub use error::*;
pub use money::format_brl;
pub use types::*;
