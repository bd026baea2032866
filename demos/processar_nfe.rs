use notafiscal::nfe;
use notafiscal::relatorio::{COLUMNS, Report};

fn main() {
    // One NFe with a lot-tracked item and an untracked item
    let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<nfeProc xmlns="http://www.portalfiscal.inf.br/nfe">
  <NFe><infNFe>
    <ide><nNF>4077</nNF><serie>1</serie><natOp>VENDA</natOp></ide>
    <emit><xNome>ACME Distribuidora Ltda</xNome></emit>
    <det><prod>
      <xProd>Dipirona 500mg</xProd><qCom>120</qCom><uCom>CX</uCom>
      <rastro><nLote>AB1234</nLote><dVal>2026-08-31</dVal></rastro>
      <rastro><nLote>AB1235</nLote><dVal>2026-11</dVal></rastro>
    </prod></det>
    <det><prod>
      <xProd>Soro Fisiologico</xProd><qCom>40</qCom><uCom>UN</uCom>
    </prod></det>
    <total><ICMSTot><vProd>3580.00</vProd></ICMSTot></total>
  </infNFe></NFe>
</nfeProc>"#;

    let rows = nfe::extract(xml).expect("valid NFe document");
    let report = Report { rows };

    println!("{}", COLUMNS.join(" | "));
    for row in report.to_grid() {
        println!("{}", row.join(" | "));
    }
}
