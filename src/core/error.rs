use thiserror::Error;

/// Errors that can occur while extracting a single NFe document.
///
/// Both variants mean the document contributes zero rows; the batch
/// aggregator recovers from either by skipping the document. Field-level
/// problems (missing or empty nodes, non-numeric amounts) are never errors —
/// they resolve to the defaults in [`crate::core::defaults`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NfeError {
    /// The input is not well-formed XML.
    #[error("XML parse error: {0}")]
    ParseFailure(String),

    /// The input is well-formed XML but carries no `NFe/infNFe` element in
    /// the NFe namespace, so it is not a recognizable invoice.
    #[error("missing NFe/infNFe root element")]
    MissingRoot,
}
