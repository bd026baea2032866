//! Property-based tests for apportionment, date repair, and parser
//! robustness.

use chrono::NaiveDate;
use notafiscal::core::format_brl;
use notafiscal::nfe;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn processing_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

/// Tolerance for the lossy least-significant digit of decimal division.
fn tolerance() -> Decimal {
    Decimal::new(1, 15)
}

fn lot_tracked_doc(quantity: Decimal, lot_count: usize) -> String {
    let rastros: String = (0..lot_count)
        .map(|i| format!("<rastro><nLote>L{i}</nLote><dVal>2026-01-15</dVal></rastro>"))
        .collect();
    format!(
        r#"<NFe xmlns="http://www.portalfiscal.inf.br/nfe"><infNFe>
          <ide><nNF>1</nNF><serie>1</serie><natOp>VENDA</natOp></ide>
          <emit><xNome>ACME</xNome></emit>
          <det><prod><xProd>P</xProd><qCom>{quantity}</qCom><uCom>UN</uCom>{rastros}</prod></det>
          <total><ICMSTot><vProd>1.00</vProd></ICMSTot></total>
        </infNFe></NFe>"#
    )
}

proptest! {
    /// Spreading a quantity over K lots always produces K equal rows whose
    /// sum matches the item total.
    #[test]
    fn apportioned_quantities_sum_to_total(cents in 0u64..100_000_000, k in 1usize..=12) {
        let quantity = Decimal::new(cents as i64, 2);
        let xml = lot_tracked_doc(quantity, k);

        let rows = nfe::extract_with_date(xml.as_bytes(), processing_date()).unwrap();
        prop_assert_eq!(rows.len(), k);

        let share = quantity / Decimal::from(k as u64);
        let sum: Decimal = rows.iter().map(|r| r.quantity).sum();
        for row in &rows {
            prop_assert_eq!(row.quantity, share);
        }
        prop_assert!((sum - quantity).abs() <= tolerance());
    }

    /// Expiry normalization accepts any text without panicking, and any
    /// non-2-part, non-3-part input is returned unchanged.
    #[test]
    fn normalize_expiry_total_function(raw in ".*") {
        let normalized = nfe::normalize_expiry(&raw);
        let parts = raw.split('-').count();
        if parts != 2 && parts != 3 {
            prop_assert_eq!(normalized, raw);
        }
    }

    /// Currency display always carries the prefix and exactly two decimals,
    /// comma-separated.
    #[test]
    fn format_brl_shape(cents in -10_000_000_000i64..10_000_000_000) {
        let formatted = format_brl(Decimal::new(cents, 2));
        prop_assert!(formatted.starts_with("R$"));
        let (_, decimals) = formatted.rsplit_once(',').unwrap();
        prop_assert_eq!(decimals.len(), 2);
        prop_assert!(decimals.chars().all(|c| c.is_ascii_digit()));
    }

    /// The extractor never panics, whatever the input bytes.
    #[test]
    fn extractor_is_panic_free(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = nfe::extract_with_date(&data, processing_date());
    }
}
