//! Default field values substituted when an optional NFe node is missing
//! or empty.
//!
//! The strings are the Portuguese placeholders that end up verbatim in the
//! exported report, so they are part of the output contract.

/// Header fields (invoice number, series, supplier, operation nature).
pub const DESCONHECIDO: &str = "Desconhecido";

/// Product name on a `det` line item.
pub const PRODUTO_DESCONHECIDO: &str = "Produto Desconhecido";

/// Lot identifier, also used for the single row of an untracked item.
pub const SEM_LOTE: &str = "Sem Lote";

/// Expiry date on a lot without a `dVal` node.
pub const SEM_VALIDADE: &str = "Sem Validade";

/// Replacement for a year-month expiry that does not name a real month.
pub const DATA_INVALIDA: &str = "Data Inválida";

/// Commercial unit on a `det` line item.
pub const UNIDADE_PADRAO: &str = "UN";
