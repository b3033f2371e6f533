//! extrato-export: delimited and workbook output for processed
//! statements.
//!
//! File names and sheet layout are part of the output contract and are
//! consumed by downstream spreadsheets, so they stay in Portuguese.

pub mod delimited;
pub mod workbook;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use extrato_core::{
    CategoryTotal, ClientTotal, DailyCategorySummary, DailyNet, DailyTotal, Movement,
    StatementMetadata,
};

pub const MOVEMENTS_CSV: &str = "movimentacoes.csv";
pub const DAILY_CATEGORY_CSV: &str = "resumo_diario_categoria.csv";
pub const DAILY_TOTALS_CSV: &str = "totais_diarios.csv";
pub const WORKBOOK_FILE: &str = "extrato_processado.xlsx";

/// Everything one statement run produces, ready to serialize.
pub struct ExportTables<'a> {
    pub metadata: &'a StatementMetadata,
    pub movements: &'a [Movement],
    pub daily_category: &'a [DailyCategorySummary],
    pub daily_totals: &'a [DailyTotal],
    pub daily_net: &'a [DailyNet],
    pub category_totals: &'a [CategoryTotal],
    /// `None` when no movement identified a client; the sheet is omitted.
    pub top_clients: Option<&'a [ClientTotal]>,
}

/// Write every output file into `dir`, creating it if needed.
/// Existing files are overwritten.
pub fn write_all(dir: &Path, tables: &ExportTables) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    delimited::write_movements(&dir.join(MOVEMENTS_CSV), tables.movements)?;
    delimited::write_daily_category(&dir.join(DAILY_CATEGORY_CSV), tables.daily_category)?;
    delimited::write_daily_totals(&dir.join(DAILY_TOTALS_CSV), tables.daily_totals)?;
    workbook::write_workbook(&dir.join(WORKBOOK_FILE), tables)?;
    Ok(())
}
