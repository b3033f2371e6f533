//! Multi-sheet XLSX output.
//!
//! Sheet order mirrors the delimited outputs, then the analysis views,
//! then a label/value metadata sheet. The top-client sheet only exists
//! when at least one movement identified a client.

use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

use crate::ExportTables;

const DATE_FMT: &str = "%Y-%m-%d";

fn write_header(sheet: &mut Worksheet, headers: &[&str], bold: &Format) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, bold)?;
    }
    Ok(())
}

pub fn write_workbook(path: &Path, tables: &ExportTables) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Movimentações")?;
    write_header(
        sheet,
        &["Data", "Descrição", "Valor", "Categoria", "Tipo", "Cliente"],
        &bold,
    )?;
    for (i, m) in tables.movements.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, m.date.format(DATE_FMT).to_string())?;
        sheet.write_string(row, 1, m.description.as_str())?;
        sheet.write_number(row, 2, m.amount)?;
        sheet.write_string(row, 3, m.category.label())?;
        sheet.write_string(row, 4, m.direction.label())?;
        sheet.write_string(row, 5, m.client.as_deref().unwrap_or(""))?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Resumo Diário por Categoria")?;
    write_header(
        sheet,
        &[
            "Data",
            "Categoria",
            "Valor_Entrada",
            "Quantidade_Entrada",
            "Valor_Saída",
            "Quantidade_Saída",
            "Saldo",
        ],
        &bold,
    )?;
    for (i, r) in tables.daily_category.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, r.date.format(DATE_FMT).to_string())?;
        sheet.write_string(row, 1, r.category.label())?;
        sheet.write_number(row, 2, r.inflow_total)?;
        sheet.write_number(row, 3, r.inflow_count as f64)?;
        sheet.write_number(row, 4, r.outflow_total)?;
        sheet.write_number(row, 5, r.outflow_count as f64)?;
        sheet.write_number(row, 6, r.net)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Totais Diários")?;
    write_header(
        sheet,
        &["Data", "Valor_Total_Entrada", "Valor_Total_Saída", "Saldo_Diário"],
        &bold,
    )?;
    for (i, r) in tables.daily_totals.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, r.date.format(DATE_FMT).to_string())?;
        sheet.write_number(row, 1, r.inflow)?;
        sheet.write_number(row, 2, r.outflow)?;
        sheet.write_number(row, 3, r.net)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Resumo Diário")?;
    write_header(sheet, &["Data", "Valor"], &bold)?;
    for (i, r) in tables.daily_net.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, r.date.format(DATE_FMT).to_string())?;
        sheet.write_number(row, 1, r.total)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Resumo por Categoria")?;
    write_header(sheet, &["Categoria", "Valor Total", "Quantidade"], &bold)?;
    for (i, r) in tables.category_totals.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, r.category.label())?;
        sheet.write_number(row, 1, r.total)?;
        sheet.write_number(row, 2, r.count as f64)?;
    }

    if let Some(clients) = tables.top_clients {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Top Clientes")?;
        write_header(sheet, &["Cliente", "Valor"], &bold)?;
        for (i, r) in clients.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, r.client.as_str())?;
            sheet.write_number(row, 1, r.total)?;
        }
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Metadados")?;
    write_header(sheet, &["Informação", "Valor"], &bold)?;
    let balance = |b: Option<f64>| b.map(|v| format!("{v:.2}")).unwrap_or_default();
    let meta = tables.metadata;
    let rows = [
        ("Empresa", meta.company.clone()),
        ("CNPJ/Conta", meta.account_info.clone()),
        ("Período", meta.period.clone()),
        ("Saldo Inicial", balance(meta.opening_balance)),
        ("Saldo Final", balance(meta.closing_balance)),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *label)?;
        sheet.write_string(row, 1, value.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}
