use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::NFE_NAMESPACE;
use crate::core::{InvoiceHeader, LineItem, Lot, NfeDocument, NfeError, defaults};

/// Element stack: local name plus whether the element is bound to the NFe
/// namespace. Foreign elements keep their place on the stack but never
/// match a lookup path.
type Path = Vec<(String, bool)>;

/// True when the tail of the stack is exactly `suffix`, all NFe-bound.
fn ends_with(path: &Path, suffix: &[&str]) -> bool {
    path.len() >= suffix.len()
        && path[path.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|((name, in_ns), want)| *in_ns && name == want)
}

/// Parse one NFe document into its semantic model.
///
/// Accepts the invoice root at any depth (standalone `NFe` or wrapped in
/// `nfeProc`); only elements bound to [`NFE_NAMESPACE`] are recognized.
/// Header and item fields use first-match semantics; missing or empty nodes
/// resolve to their defaults when the model is assembled.
pub fn parse_nfe(xml: &[u8]) -> Result<NfeDocument, NfeError> {
    let mut reader = NsReader::from_reader(xml);
    reader.config_mut().trim_text(true);
    reader.config_mut().expand_empty_elements = true;

    let mut p = NfeParsed::default();
    let mut path: Path = Vec::new();

    loop {
        match reader.read_resolved_event() {
            Ok((resolve, Event::Start(ref e))) => {
                path.push((local_name(e), in_nfe_namespace(&resolve)));
                p.handle_start(&path);
            }
            Ok((_, Event::Text(ref e))) => {
                let text = e.unescape().unwrap_or_default();
                if !text.is_empty() {
                    p.handle_text(&path, &text);
                }
            }
            Ok((_, Event::CData(e))) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                if !text.is_empty() {
                    p.handle_text(&path, &text);
                }
            }
            Ok((_, Event::End(_))) => {
                p.handle_end(&path);
                path.pop();
            }
            Ok((_, Event::Eof)) => break,
            Err(e) => return Err(NfeError::ParseFailure(e.to_string())),
            _ => {}
        }
    }

    if !path.is_empty() {
        return Err(NfeError::ParseFailure(
            "unexpected end of document".to_string(),
        ));
    }
    if !p.found_root {
        return Err(NfeError::MissingRoot);
    }
    Ok(p.into_document())
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn in_nfe_namespace(resolve: &ResolveResult) -> bool {
    matches!(resolve, ResolveResult::Bound(Namespace(ns)) if *ns == NFE_NAMESPACE.as_bytes())
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

#[derive(Default)]
struct NfeParsed {
    found_root: bool,
    in_root: bool,

    number: Option<String>,
    series: Option<String>,
    supplier: Option<String>,
    total_value: Option<String>,
    operation_nature: Option<String>,

    items: Vec<ParsedItem>,
    current_item: Option<ParsedItem>,
}

#[derive(Default)]
struct ParsedItem {
    product: Option<String>,
    quantity: Option<String>,
    unit: Option<String>,
    lots: Vec<ParsedLot>,
    current_lot: Option<ParsedLot>,
}

#[derive(Default)]
struct ParsedLot {
    id: Option<String>,
    expiry: Option<String>,
}

impl NfeParsed {
    fn handle_start(&mut self, path: &Path) {
        if ends_with(path, &["NFe", "infNFe"]) {
            // Only the first infNFe is read; a repeated root is ignored.
            if !self.found_root {
                self.found_root = true;
                self.in_root = true;
            }
        } else if self.in_root && ends_with(path, &["infNFe", "det"]) {
            self.current_item = Some(ParsedItem::default());
        } else if self.current_item.is_some() && ends_with(path, &["det", "prod", "rastro"]) {
            if let Some(item) = self.current_item.as_mut() {
                item.current_lot = Some(ParsedLot::default());
            }
        }
    }

    fn handle_text(&mut self, path: &Path, text: &str) {
        if !self.in_root {
            return;
        }

        if let Some(item) = self.current_item.as_mut() {
            if let Some(lot) = item.current_lot.as_mut() {
                if ends_with(path, &["rastro", "nLote"]) {
                    set_first(&mut lot.id, text);
                } else if ends_with(path, &["rastro", "dVal"]) {
                    set_first(&mut lot.expiry, text);
                }
            } else if ends_with(path, &["det", "prod", "xProd"]) {
                set_first(&mut item.product, text);
            } else if ends_with(path, &["det", "prod", "qCom"]) {
                set_first(&mut item.quantity, text);
            } else if ends_with(path, &["det", "prod", "uCom"]) {
                set_first(&mut item.unit, text);
            }
            return;
        }

        if ends_with(path, &["infNFe", "ide", "nNF"]) {
            set_first(&mut self.number, text);
        } else if ends_with(path, &["infNFe", "ide", "serie"]) {
            set_first(&mut self.series, text);
        } else if ends_with(path, &["infNFe", "ide", "natOp"]) {
            set_first(&mut self.operation_nature, text);
        } else if ends_with(path, &["infNFe", "emit", "xNome"]) {
            set_first(&mut self.supplier, text);
        } else if ends_with(path, &["infNFe", "total", "ICMSTot", "vProd"]) {
            set_first(&mut self.total_value, text);
        }
    }

    fn handle_end(&mut self, path: &Path) {
        if ends_with(path, &["det", "prod", "rastro"]) {
            if let Some(item) = self.current_item.as_mut() {
                if let Some(lot) = item.current_lot.take() {
                    item.lots.push(lot);
                }
            }
        } else if ends_with(path, &["infNFe", "det"]) {
            if let Some(item) = self.current_item.take() {
                self.items.push(item);
            }
        } else if self.in_root && ends_with(path, &["NFe", "infNFe"]) {
            self.in_root = false;
        }
    }

    fn into_document(self) -> NfeDocument {
        let header = InvoiceHeader {
            number: or_default(self.number, defaults::DESCONHECIDO),
            series: or_default(self.series, defaults::DESCONHECIDO),
            supplier: or_default(self.supplier, defaults::DESCONHECIDO),
            total_value: decimal_or_zero(self.total_value.as_deref()),
            operation_nature: or_default(self.operation_nature, defaults::DESCONHECIDO),
        };
        let items = self.items.into_iter().map(ParsedItem::into_item).collect();
        NfeDocument { header, items }
    }
}

impl ParsedItem {
    fn into_item(self) -> LineItem {
        LineItem {
            product: or_default(self.product, defaults::PRODUTO_DESCONHECIDO),
            quantity: decimal_or_zero(self.quantity.as_deref()),
            unit: or_default(self.unit, defaults::UNIDADE_PADRAO),
            lots: self.lots.into_iter().map(ParsedLot::into_lot).collect(),
        }
    }
}

impl ParsedLot {
    fn into_lot(self) -> Lot {
        Lot {
            id: or_default(self.id, defaults::SEM_LOTE),
            expiry: or_default(self.expiry, defaults::SEM_VALIDADE),
        }
    }
}

fn set_first(slot: &mut Option<String>, text: &str) {
    if slot.is_none() {
        *slot = Some(text.to_string());
    }
}

fn or_default(slot: Option<String>, default: &str) -> String {
    slot.unwrap_or_else(|| default.to_string())
}

/// Non-numeric text on a present node is treated like a missing node.
fn decimal_or_zero(text: Option<&str>) -> Decimal {
    text.and_then(|t| Decimal::from_str(t.trim()).ok())
        .unwrap_or(Decimal::ZERO)
}
