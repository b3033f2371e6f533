//! Statement-text → enriched-movement pipeline, end to end (no PDF).

use chrono::NaiveDate;
use extrato_core::{
    Category, Direction, Movement, daily_category_summary, daily_totals, top_clients,
};
use extrato_ingest::parse_statement;

const STATEMENT: &str = "\
ACME Pagamentos LTDA
CNPJ: 12.345.678/0001-90
Período: 01/01/2024 a 31/01/2024
Saldo inicial do período: R$ 100,00
Saldo final do período: R$ 250,00
Data Movimentações Valor
05/01/2024 Cobrança recebida fatura nr. 98765 John Smith R$ 150,00
";

#[test]
fn test_single_invoice_line_end_to_end() {
    let parsed = parse_statement(STATEMENT).unwrap();
    assert_eq!(parsed.entries.len(), 1);
    assert!(parsed.skipped.is_empty());

    let movements: Vec<Movement> = parsed.entries.iter().map(Movement::from_entry).collect();
    let m = &movements[0];
    assert_eq!(m.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert_eq!(m.description, "Cobrança recebida fatura nr. 98765 John Smith");
    assert_eq!(m.amount, 150.0);
    assert_eq!(m.category, Category::CobrancaRecebida);
    assert_eq!(m.direction, Direction::Entrada);
    assert_eq!(m.client.as_deref(), Some("John Smith"));

    let breakdown = daily_category_summary(&movements);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].inflow_total, 150.0);
    assert_eq!(breakdown[0].inflow_count, 1);
    assert_eq!(breakdown[0].outflow_total, 0.0);
    assert_eq!(breakdown[0].net, 150.0);

    let totals = daily_totals(&movements);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].net, 150.0);

    let clients = top_clients(&movements).expect("one identified client");
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].client, "John Smith");
    assert_eq!(clients[0].total, 150.0);
}

#[test]
fn test_statement_without_table_yields_no_movements() {
    let err = parse_statement("ACME\nCNPJ: 1\nPeríodo: jan\nSaldo inicial do período: R$ 1,00\n")
        .unwrap_err();
    assert!(err.to_string().contains("transaction table not found"));
}
