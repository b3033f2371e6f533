//! Asaas statement text parser.
//!
//! Expected extracted-text layout:
//!   ACME Pagamentos LTDA
//!   CNPJ: 12.345.678/0001-90
//!   Período: 01/01/2024 a 31/01/2024
//!   Saldo inicial do período: R$ 1.200,00
//!   Saldo final do período: R$ 950,50
//!   Data Movimentações Valor
//!   05/01/2024 Cobrança recebida fatura nr. 98765 John Smith R$ 150,00
//!   06/01/2024 Taxa de cartão de crédito R$ -4,99
//!
//! Amounts are Brazilian-locale: dot as thousands grouping, comma as the
//! decimal separator, minus sign directly after the currency marker.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use extrato_core::{StatementEntry, StatementMetadata};

// Header layout is positional in the Asaas export.
const COMPANY_LINE: usize = 0;
const ACCOUNT_LINE: usize = 1;
const PERIOD_LINE: usize = 2;
/// Balances are only ever printed in the header block.
const BALANCE_SCAN_LINES: usize = 10;

const OPENING_BALANCE_LABEL: &str = "Saldo inicial do período";
const CLOSING_BALANCE_LABEL: &str = "Saldo final do período";
const TABLE_HEADER: &str = "Data Movimentações Valor";

/// A table-body line that did not match the movement pattern. Collected
/// instead of printed so callers decide how to surface them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number within the statement text
    pub line_number: usize,
    pub content: String,
}

/// Full result of parsing one statement text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedStatement {
    pub metadata: StatementMetadata,
    /// Movements in statement order
    pub entries: Vec<StatementEntry>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a Brazilian-locale amount: `"1.234,56"` → 1234.56,
/// `"-12,30"` → −12.3.
pub fn parse_brl_amount(raw: &str) -> Option<f64> {
    raw.trim().replace('.', "").replace(',', ".").parse().ok()
}

/// Parse the extracted statement text.
///
/// The only hard failure is a text with no transaction-table header
/// line; everything else degrades softly (absent balances stay `None`,
/// unmatched body lines are collected in `skipped`).
pub fn parse_statement(text: &str) -> Result<ParsedStatement> {
    let lines: Vec<&str> = text.lines().collect();

    let header_line =
        |index: usize| lines.get(index).map(|l| l.trim().to_string()).unwrap_or_default();

    let balance_re = Regex::new(r"R\$\s+(-?\d+,\d{2})")?;
    let mut opening_balance = None;
    let mut closing_balance = None;
    for line in lines.iter().take(BALANCE_SCAN_LINES) {
        if line.contains(OPENING_BALANCE_LABEL) {
            opening_balance = balance_re
                .captures(line)
                .and_then(|caps| parse_brl_amount(&caps[1]));
        }
        if line.contains(CLOSING_BALANCE_LABEL) {
            closing_balance = balance_re
                .captures(line)
                .and_then(|caps| parse_brl_amount(&caps[1]));
        }
    }

    let metadata = StatementMetadata {
        company: header_line(COMPANY_LINE),
        account_info: header_line(ACCOUNT_LINE),
        period: header_line(PERIOD_LINE),
        opening_balance,
        closing_balance,
    };

    let body_start = lines
        .iter()
        .position(|line| line.contains(TABLE_HEADER))
        .map(|index| index + 1)
        .ok_or_else(|| anyhow!("transaction table not found in statement text"))?;

    // DATE DESCRIPTION R$ AMOUNT
    let movement_re = Regex::new(r"(\d{2}/\d{2}/\d{4})\s+(.*?)\s+R\$\s+(-?[\d.]+,\d{2})")?;

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for (offset, line) in lines[body_start..].iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some(caps) = movement_re.captures(line) else {
            skipped.push(SkippedLine {
                line_number: body_start + offset + 1,
                content: line.to_string(),
            });
            continue;
        };

        let date = NaiveDate::parse_from_str(&caps[1], "%d/%m/%Y")
            .with_context(|| format!("invalid movement date in line: {line}"))?;
        let amount = parse_brl_amount(&caps[3])
            .ok_or_else(|| anyhow!("invalid movement amount in line: {line}"))?;

        entries.push(StatementEntry {
            date,
            description: caps[2].trim().to_string(),
            amount,
        });
    }

    Ok(ParsedStatement {
        metadata,
        entries,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ACME Pagamentos LTDA
CNPJ: 12.345.678/0001-90
Período: 01/01/2024 a 31/01/2024
Saldo inicial do período: R$ -200,00
Saldo final do período: R$ 950,50
Data Movimentações Valor
05/01/2024 Cobrança recebida fatura nr. 98765 John Smith R$ 150,00
05/01/2024 Taxa de cartão de crédito R$ -4,99

06/01/2024 Antecipação de recebíveis R$ 1.234,56
linha de rodapé sem valor
07/01/2024 Transferência via Pix R$ -12,30
";

    #[test]
    fn test_parses_matching_rows_in_order() {
        let parsed = parse_statement(SAMPLE).unwrap();
        assert_eq!(parsed.entries.len(), 4);
        assert_eq!(
            parsed.entries[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert_eq!(
            parsed.entries[0].description,
            "Cobrança recebida fatura nr. 98765 John Smith"
        );
        assert_eq!(parsed.entries[0].amount, 150.0);
        assert_eq!(parsed.entries[1].amount, -4.99);
        assert_eq!(parsed.entries[2].amount, 1234.56);
        assert_eq!(
            parsed.entries[3].date,
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
        );
        assert_eq!(parsed.entries[3].amount, -12.30);
    }

    #[test]
    fn test_unmatched_body_lines_are_collected_not_dropped_silently() {
        let parsed = parse_statement(SAMPLE).unwrap();
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].content, "linha de rodapé sem valor");
        assert_eq!(parsed.skipped[0].line_number, 11);
    }

    #[test]
    fn test_header_metadata_is_positional_and_trimmed() {
        let parsed = parse_statement(SAMPLE).unwrap();
        assert_eq!(parsed.metadata.company, "ACME Pagamentos LTDA");
        assert_eq!(parsed.metadata.account_info, "CNPJ: 12.345.678/0001-90");
        assert_eq!(parsed.metadata.period, "Período: 01/01/2024 a 31/01/2024");
    }

    #[test]
    fn test_balances_parsed_from_header_block() {
        let parsed = parse_statement(SAMPLE).unwrap();
        assert_eq!(parsed.metadata.opening_balance, Some(-200.0));
        assert_eq!(parsed.metadata.closing_balance, Some(950.50));
    }

    #[test]
    fn test_malformed_balance_stays_none() {
        let text = "\
ACME Pagamentos LTDA
CNPJ: 12.345.678/0001-90
Período: 01/01/2024 a 31/01/2024
Saldo inicial do período: indisponível
Data Movimentações Valor
05/01/2024 Transferência via Pix R$ -12,30
";
        let parsed = parse_statement(text).unwrap();
        assert_eq!(parsed.metadata.opening_balance, None);
        assert_eq!(parsed.metadata.closing_balance, None);
        assert_eq!(parsed.entries.len(), 1);
    }

    #[test]
    fn test_missing_table_header_is_the_hard_failure() {
        let err = parse_statement("ACME\nCNPJ\nPeríodo\nnada aqui\n").unwrap_err();
        assert!(err.to_string().contains("transaction table not found"));
    }

    #[test]
    fn test_brl_amount_round_trips() {
        assert_eq!(parse_brl_amount("1.234,56"), Some(1234.56));
        assert_eq!(parse_brl_amount("-12,30"), Some(-12.30));
        assert_eq!(parse_brl_amount("0,00"), Some(0.0));
        assert_eq!(parse_brl_amount("1.234.567,89"), Some(1234567.89));
        assert_eq!(parse_brl_amount("abc"), None);
    }

    #[test]
    fn test_short_text_yields_empty_header_fields() {
        let text = "Data Movimentações Valor\n05/01/2024 Pix R$ 1,00\n";
        let parsed = parse_statement(text).unwrap();
        // Line 0 is the table header itself under this degenerate layout.
        assert_eq!(parsed.metadata.account_info, "05/01/2024 Pix R$ 1,00");
        assert_eq!(parsed.metadata.period, "");
        assert_eq!(parsed.entries.len(), 1);
    }
}
