use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use notafiscal::nfe;
use notafiscal::relatorio;

fn processing_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn build_document(items: usize, lots_per_item: usize) -> String {
    let mut dets = String::new();
    for i in 0..items {
        let rastros: String = (0..lots_per_item)
            .map(|l| format!("<rastro><nLote>L{i}-{l}</nLote><dVal>2026-08-31</dVal></rastro>"))
            .collect();
        dets.push_str(&format!(
            "<det><prod><xProd>Produto {i}</xProd><qCom>100</qCom><uCom>UN</uCom>{rastros}</prod></det>"
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<nfeProc xmlns="http://www.portalfiscal.inf.br/nfe">
  <NFe><infNFe>
    <ide><nNF>1</nNF><serie>1</serie><natOp>VENDA</natOp></ide>
    <emit><xNome>Bench Distribuidora</xNome></emit>
    {dets}
    <total><ICMSTot><vProd>123456.78</vProd></ICMSTot></total>
  </infNFe></NFe>
</nfeProc>"#
    )
}

fn bench_extract(c: &mut Criterion) {
    let small = build_document(10, 2);
    let large = build_document(500, 4);

    c.bench_function("extract_10_items", |b| {
        b.iter(|| nfe::extract_with_date(black_box(small.as_bytes()), processing_date()))
    });

    c.bench_function("extract_500_items", |b| {
        b.iter(|| nfe::extract_with_date(black_box(large.as_bytes()), processing_date()))
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let docs: Vec<Vec<u8>> = (0..50)
        .map(|_| build_document(20, 2).into_bytes())
        .collect();

    c.bench_function("aggregate_50_documents", |b| {
        b.iter(|| relatorio::aggregate_with_date(black_box(&docs), processing_date()))
    });
}

criterion_group!(benches, bench_extract, bench_aggregate);
criterion_main!(benches);
