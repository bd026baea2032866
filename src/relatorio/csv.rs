//! CSV rendering of the report table.
//!
//! Quoted fields, CRLF rows, semicolon delimiter by default — the shape
//! Brazilian spreadsheet applications expect alongside comma decimals.

use serde::{Deserialize, Serialize};

use super::{COLUMNS, Report};

/// Options for CSV rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Field delimiter.
    pub delimiter: char,
    /// Whether to emit the column-title row first.
    pub header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ';',
            header: true,
        }
    }
}

pub(super) fn render_csv(report: &Report, options: &CsvOptions) -> String {
    let mut out = String::new();
    if options.header {
        write_record(&mut out, COLUMNS.iter().copied(), options.delimiter);
    }
    for row in report.to_grid() {
        write_record(&mut out, row.iter().map(String::as_str), options.delimiter);
    }
    out
}

fn write_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>, delimiter: char) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        csv_field(out, field);
    }
    out.push_str("\r\n");
}

fn csv_field(out: &mut String, value: &str) {
    out.push('"');
    // Escape internal double quotes
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_matches_column_contract() {
        let csv = render_csv(&Report::default(), &CsvOptions::default());
        assert_eq!(
            csv,
            "\"DATA\";\"NOTA FISCAL\";\"FORNECEDOR\";\"PRODUTO\";\"QUANTIDADE\";\
             \"UNIDADE\";\"LOTE\";\"VALIDADE\";\"VALOR TOTAL PRODUTOS\";\
             \"NATUREZA DA OPERAÇÃO\"\r\n"
        );
    }

    #[test]
    fn no_header_when_disabled() {
        let options = CsvOptions {
            header: false,
            ..Default::default()
        };
        assert_eq!(render_csv(&Report::default(), &options), "");
    }

    #[test]
    fn quotes_are_doubled() {
        let mut out = String::new();
        csv_field(&mut out, "Produto \"especial\"");
        assert_eq!(out, "\"Produto \"\"especial\"\"\"");
    }
}
