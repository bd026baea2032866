use notafiscal::relatorio::{self, CsvOptions};

fn main() {
    let valid = br#"<NFe xmlns="http://www.portalfiscal.inf.br/nfe"><infNFe>
      <ide><nNF>555</nNF><serie>2</serie><natOp>VENDA</natOp></ide>
      <emit><xNome>Farmacia Central</xNome></emit>
      <det><prod><xProd>Vitamina C</xProd><qCom>30</qCom><uCom>FR</uCom>
        <rastro><nLote>VC01</nLote><dVal>2027-02</dVal></rastro>
      </prod></det>
      <total><ICMSTot><vProd>449.70</vProd></ICMSTot></total>
    </infNFe></NFe>"#;

    // The batch keeps going past documents that are not valid NFe XML.
    let inputs: Vec<&[u8]> = vec![b"not xml at all <", valid];

    let report = relatorio::aggregate(inputs);
    if report.is_empty() {
        eprintln!("nenhuma nota fiscal válida foi processada");
        return;
    }

    print!("{}", report.to_csv(&CsvOptions::default()));
}
