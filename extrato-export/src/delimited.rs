//! CSV output, UTF-8 with a byte-order mark.
//!
//! The BOM is required so spreadsheet tools pick the right encoding for
//! the accented headers and descriptions when double-clicking the file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use extrato_core::{DailyCategorySummary, DailyTotal, Movement};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn bom_writer(path: &Path) -> Result<csv::Writer<File>> {
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(UTF8_BOM)
        .with_context(|| format!("writing BOM to {}", path.display()))?;
    Ok(csv::Writer::from_writer(file))
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

/// Full transaction table: one row per movement, statement order.
pub fn write_movements(path: &Path, movements: &[Movement]) -> Result<()> {
    let mut writer = bom_writer(path)?;
    writer.write_record(["Data", "Descrição", "Valor", "Categoria", "Tipo", "Cliente"])?;
    for m in movements {
        writer.write_record([
            m.date.format("%Y-%m-%d").to_string(),
            m.description.clone(),
            money(m.amount),
            m.category.label().to_string(),
            m.direction.label().to_string(),
            m.client.clone().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Daily breakdown per (date, category) with separate inflow/outflow
/// columns.
pub fn write_daily_category(path: &Path, rows: &[DailyCategorySummary]) -> Result<()> {
    let mut writer = bom_writer(path)?;
    writer.write_record([
        "Data",
        "Categoria",
        "Valor_Entrada",
        "Quantidade_Entrada",
        "Valor_Saída",
        "Quantidade_Saída",
        "Saldo",
    ])?;
    for row in rows {
        writer.write_record([
            row.date.format("%Y-%m-%d").to_string(),
            row.category.label().to_string(),
            money(row.inflow_total),
            row.inflow_count.to_string(),
            money(row.outflow_total),
            row.outflow_count.to_string(),
            money(row.net),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Per-day totals: inflow, outflow magnitude and net balance.
pub fn write_daily_totals(path: &Path, rows: &[DailyTotal]) -> Result<()> {
    let mut writer = bom_writer(path)?;
    writer.write_record([
        "Data",
        "Valor_Total_Entrada",
        "Valor_Total_Saída",
        "Saldo_Diário",
    ])?;
    for row in rows {
        writer.write_record([
            row.date.format("%Y-%m-%d").to_string(),
            money(row.inflow),
            money(row.outflow),
            money(row.net),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
